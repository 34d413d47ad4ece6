use crate::direction::Direction;

/// Ensemble dense des directions de sortie d'une cellule.
///
/// Au plus quatre éléments, sans doublon par construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitSet {
    open: [bool; 4],
}

impl ExitSet {
    pub fn add(&mut self, direction: Direction) {
        self.open[direction.index()] = true;
    }

    pub fn remove(&mut self, direction: Direction) {
        self.open[direction.index()] = false;
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.open[direction.index()]
    }

    pub fn clear(&mut self) {
        self.open = [false; 4];
    }

    pub fn len(&self) -> usize {
        self.open.iter().filter(|&&o| o).count()
    }

    pub fn is_empty(&self) -> bool {
        self.open == [false; 4]
    }

    /// Parcourt les directions ouvertes dans l'ordre de `Direction::ALL`.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.contains(*d))
    }
}

/// Une cellule du labyrinthe.
///
/// `entry` est la direction unique par laquelle la cellule a été atteinte
/// depuis son parent dans l'arbre de creusement, `exits` les directions qui
/// continuent au-delà. Une direction n'est jamais à la fois entrée et sortie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub entry: Option<Direction>,
    pub exits: ExitSet,
    pub explored: bool,
    pub letter: Option<char>,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_junction(&self) -> bool {
        self.exits.len() >= 2
    }

    /// Remet la cellule dans son état vierge (élagage d'une branche).
    /// La lettre éventuelle est effacée aussi.
    pub fn reset(&mut self) {
        self.entry = None;
        self.exits.clear();
        self.explored = false;
        self.letter = None;
    }

    /// Une direction est ouverte si on est entré par elle ou si on en sort.
    /// C'est ce que la couche de rendu consomme pour placer les murs.
    pub fn is_open(&self, direction: Direction) -> bool {
        self.entry == Some(direction) || self.exits.contains(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_set_has_no_duplicates() {
        let mut exits = ExitSet::default();
        exits.add(Direction::North);
        exits.add(Direction::North);
        assert_eq!(exits.len(), 1);
        exits.remove(Direction::North);
        assert!(exits.is_empty());
    }

    #[test]
    fn exit_set_iterates_open_directions() {
        let mut exits = ExitSet::default();
        exits.add(Direction::East);
        exits.add(Direction::South);
        let open: Vec<_> = exits.iter().collect();
        assert_eq!(open, vec![Direction::South, Direction::East]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut cell = Cell::new();
        cell.entry = Some(Direction::North);
        cell.exits.add(Direction::South);
        cell.explored = true;
        cell.letter = Some('a');
        cell.reset();
        assert!(cell.entry.is_none());
        assert!(cell.exits.is_empty());
        assert!(!cell.explored);
        assert!(cell.letter.is_none());
    }

    #[test]
    fn open_directions_cover_entry_and_exits() {
        let mut cell = Cell::new();
        cell.entry = Some(Direction::North);
        cell.exits.add(Direction::East);
        assert!(cell.is_open(Direction::North));
        assert!(cell.is_open(Direction::East));
        assert!(!cell.is_open(Direction::West));
    }
}
