/// Les quatre directions cardinales de la grille.
///
/// L'absence de direction (cellule jamais entrée) se note `Option<Direction>`
/// du côté appelant, il n'y a donc pas de variante sentinelle ici.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// Les quatre directions, dans un ordre stable pour les parcours.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Fait demi tour (par ex. North -> South). Involution.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Déplacement (dx, dy) d'un pas dans cette direction.
    /// L'axe y croît vers le bas de la grille.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    /// Index stable (0..4), utilisé par `ExitSet`.
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::West => 2,
            Direction::East => 3,
        }
    }
}
