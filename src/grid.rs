/*!
 * Grille du labyrinthe.
 *
 * Les cellules vivent dans un seul `Vec` contigu, adressé par `CellId`
 * (index = y * largeur + x). Les "références" entre cellules voisines sont
 * des calculs d'index, jamais des pointeurs : la forme de la grille est
 * figée à la construction, seules les cellules mutent.
 */

use crate::cell::Cell;
use crate::direction::Direction;

/// Identifiant d'une cellule dans l'arène de la grille.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(pub usize);

#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grille vide");
        Self {
            width,
            height,
            cells: vec![Cell::new(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    pub fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id.0]
    }

    pub fn id_at(&self, x: usize, y: usize) -> CellId {
        debug_assert!(x < self.width && y < self.height);
        CellId(y * self.width + x)
    }

    pub fn coords(&self, id: CellId) -> (usize, usize) {
        (id.0 % self.width, id.0 / self.width)
    }

    /// La cellule voisine dans `direction`, ou `None` hors grille.
    /// Avec `ignore_explored`, un voisin déjà exploré est filtré aussi :
    /// c'est le mode du creusement, qui ne cible que du terrain vierge.
    pub fn neighbor(&self, id: CellId, direction: Direction, ignore_explored: bool) -> Option<CellId> {
        let (x, y) = self.coords(id);
        let (dx, dy) = direction.delta();
        let nx = x as i32 + dx;
        let ny = y as i32 + dy;
        if nx < 0 || ny < 0 || nx >= self.width as i32 || ny >= self.height as i32 {
            return None;
        }
        let neighbor = self.id_at(nx as usize, ny as usize);
        if ignore_explored && self.cell(neighbor).explored {
            return None;
        }
        Some(neighbor)
    }

    /// Les voisins existants dans les quatre directions.
    pub fn neighbors_in_all_directions(
        &self,
        id: CellId,
        ignore_explored: bool,
    ) -> Vec<(Direction, CellId)> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.neighbor(id, d, ignore_explored).map(|n| (d, n)))
            .collect()
    }

    /// Répare les relations entrée/sortie entre `id` et ses voisins.
    ///
    /// Règles, dans l'ordre :
    /// - l'entrée de la cellule n'est jamais aussi une de ses sorties ;
    /// - un voisin dont l'entrée pointe vers nous sans que nous sortions
    ///   vers lui perd cette entrée et sa sortie réciproque ;
    /// - une de nos sorties que le voisin n'a jamais acceptée comme entrée
    ///   est retirée.
    ///
    /// Idempotent : un second passage ne change plus rien.
    pub fn repair_relationships(&mut self, id: CellId) {
        let entry = self.cell(id).entry;
        if let Some(entry) = entry {
            self.cell_mut(id).exits.remove(entry);
        }

        for (direction, neighbor) in self.neighbors_in_all_directions(id, false) {
            let toward_us = direction.opposite();
            if Some(direction) != entry && !self.cell(id).exits.contains(direction) {
                // Aucun lien de notre côté : le voisin ne doit ni entrer ni
                // sortir par chez nous.
                if self.cell(neighbor).entry == Some(toward_us) {
                    self.cell_mut(neighbor).entry = None;
                }
                self.cell_mut(neighbor).exits.remove(toward_us);
            } else if self.cell(id).exits.contains(direction)
                && self.cell(neighbor).entry != Some(toward_us)
            {
                // Sortie jamais acceptée comme entrée en face : invalide.
                self.cell_mut(id).exits.remove(direction);
            }
        }
    }

    /// Passe de réparation sur toute la grille, aux frontières de phase
    /// (fin de creusement, de résolution, d'élagage).
    pub fn repair_all(&mut self) {
        for index in 0..self.cells.len() {
            self.repair_relationships(CellId(index));
        }
    }

    pub fn all_explored_cells(&self) -> Vec<CellId> {
        (0..self.cells.len())
            .map(CellId)
            .filter(|id| self.cell(*id).explored)
            .collect()
    }

    /// Toutes les cellules à deux sorties ou plus.
    pub fn all_junctions(&self) -> Vec<CellId> {
        (0..self.cells.len())
            .map(CellId)
            .filter(|id| self.cell(*id).is_junction())
            .collect()
    }

    /// La cellule explorée la plus basse de la grille : balayage depuis la
    /// dernière ligne vers le haut, de gauche à droite, première trouvée.
    pub fn lowest_explored(&self) -> Option<CellId> {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let id = self.id_at(x, y);
                if self.cell(id).explored {
                    return Some(id);
                }
            }
        }
        None
    }

    /// Les culs-de-sac explorés : explorés, zéro sortie.
    pub fn explored_dead_ends(&self) -> Vec<CellId> {
        (0..self.cells.len())
            .map(CellId)
            .filter(|id| {
                let cell = self.cell(*id);
                cell.explored && cell.exits.is_empty()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_is_none_outside_the_grid() {
        let grid = Grid::new(3, 3);
        let corner = grid.id_at(0, 0);
        assert_eq!(grid.neighbor(corner, Direction::North, false), None);
        assert_eq!(grid.neighbor(corner, Direction::West, false), None);
        assert_eq!(
            grid.neighbor(corner, Direction::East, false),
            Some(grid.id_at(1, 0))
        );
        assert_eq!(
            grid.neighbor(corner, Direction::South, false),
            Some(grid.id_at(0, 1))
        );
    }

    #[test]
    fn neighbor_filters_explored_cells_on_demand() {
        let mut grid = Grid::new(2, 1);
        let right = grid.id_at(1, 0);
        grid.cell_mut(right).explored = true;
        let left = grid.id_at(0, 0);
        assert_eq!(grid.neighbor(left, Direction::East, true), None);
        assert_eq!(grid.neighbor(left, Direction::East, false), Some(right));
    }

    #[test]
    fn repair_removes_entry_from_exits() {
        let mut grid = Grid::new(2, 2);
        let id = grid.id_at(0, 0);
        grid.cell_mut(id).entry = Some(Direction::South);
        grid.cell_mut(id).exits.add(Direction::South);
        grid.repair_relationships(id);
        assert!(!grid.cell(id).exits.contains(Direction::South));
    }

    #[test]
    fn repair_drops_exit_without_reciprocal_entry() {
        let mut grid = Grid::new(2, 1);
        let left = grid.id_at(0, 0);
        grid.cell_mut(left).exits.add(Direction::East);
        // Le voisin n'a jamais accepté cette entrée.
        grid.repair_relationships(left);
        assert!(grid.cell(left).exits.is_empty());
    }

    #[test]
    fn repair_drops_orphan_entry_of_the_neighbor() {
        let mut grid = Grid::new(2, 1);
        let left = grid.id_at(0, 0);
        let right = grid.id_at(1, 0);
        grid.cell_mut(right).entry = Some(Direction::West);
        grid.cell_mut(right).exits.add(Direction::West);
        // Rien ne sort de `left` vers `right` : le lien est orphelin.
        grid.repair_relationships(left);
        assert_eq!(grid.cell(right).entry, None);
        assert!(!grid.cell(right).exits.contains(Direction::West));
    }

    #[test]
    fn repair_keeps_a_consistent_pair() {
        let mut grid = Grid::new(2, 1);
        let left = grid.id_at(0, 0);
        let right = grid.id_at(1, 0);
        grid.cell_mut(left).exits.add(Direction::East);
        grid.cell_mut(right).entry = Some(Direction::West);
        grid.repair_all();
        assert!(grid.cell(left).exits.contains(Direction::East));
        assert_eq!(grid.cell(right).entry, Some(Direction::West));
    }

    #[test]
    fn repair_all_is_idempotent() {
        let mut grid = Grid::new(3, 3);
        let a = grid.id_at(0, 0);
        let b = grid.id_at(1, 0);
        let c = grid.id_at(1, 1);
        grid.cell_mut(a).exits.add(Direction::East);
        grid.cell_mut(b).entry = Some(Direction::West);
        grid.cell_mut(b).exits.add(Direction::South);
        grid.cell_mut(c).entry = Some(Direction::East); // orphelin volontaire
        grid.repair_all();
        let snapshot = grid.clone();
        grid.repair_all();
        for y in 0..3 {
            for x in 0..3 {
                let id = grid.id_at(x, y);
                assert_eq!(grid.cell(id).entry, snapshot.cell(id).entry);
                assert_eq!(grid.cell(id).exits, snapshot.cell(id).exits);
            }
        }
    }

    #[test]
    fn lowest_explored_scans_bottom_up() {
        let mut grid = Grid::new(3, 3);
        grid.cell_mut(grid.id_at(2, 0)).explored = true;
        grid.cell_mut(grid.id_at(1, 1)).explored = true;
        assert_eq!(grid.lowest_explored(), Some(grid.id_at(1, 1)));
    }

    #[test]
    fn dead_ends_are_explored_cells_without_exits() {
        let mut grid = Grid::new(2, 1);
        let left = grid.id_at(0, 0);
        let right = grid.id_at(1, 0);
        grid.cell_mut(left).explored = true;
        grid.cell_mut(left).exits.add(Direction::East);
        grid.cell_mut(right).explored = true;
        assert_eq!(grid.explored_dead_ends(), vec![right]);
    }
}
