/*!
 * Résolution du labyrinthe.
 *
 * Ensemble d'hypothèses de marche traité par tours : les culs-de-sac sont
 * abandonnés, les jonctions clonent la marche par sortie, une sortie unique
 * prolonge sur place. La phase de creusement produit un arbre, une seule
 * marche atteint donc l'arrivée.
 */

use crate::grid::{CellId, Grid};
use crate::walk::Walk;
use crate::MazeError;

/// Trouve l'unique marche reliant `start` à `end` en ne suivant que les
/// sorties creusées.
///
/// L'épuisement de toutes les hypothèses sans solution est un défaut de
/// génération (l'arrivée est atteignable par construction), remonté en
/// `MazeError::NoSolution`.
pub fn solve(grid: &mut Grid, start: CellId, end: CellId) -> Result<Walk, MazeError> {
    let mut active = vec![Walk::new(start)];

    while !active.is_empty() {
        let mut next: Vec<Walk> = Vec::new();

        for mut walk in active.drain(..) {
            let tail = walk.tail();
            if tail == end {
                walk.complete = true;
                // La résolution ne modifie pas la structure creusée, la
                // réparation ne sert que de garde avant les mutations à venir.
                grid.repair_all();
                return Ok(walk);
            }

            let exits = grid.cell(tail).exits;
            match exits.len() {
                // Cul-de-sac qui n'est pas l'arrivée : hypothèse abandonnée.
                0 => {}
                1 => {
                    let direction = exits
                        .iter()
                        .next()
                        .expect("une sortie exactement");
                    if let Some(neighbor) = grid.neighbor(tail, direction, false) {
                        walk.push(neighbor);
                        next.push(walk);
                    }
                }
                // Jonction : une marche clonée par sortie, l'originale meurt.
                _ => {
                    for direction in exits.iter() {
                        if let Some(neighbor) = grid.neighbor(tail, direction, false) {
                            let mut branch = walk.clone();
                            branch.push(neighbor);
                            next.push(branch);
                        }
                    }
                }
            }
        }

        active = next;
    }

    Err(MazeError::NoSolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    fn link(grid: &mut Grid, from: (usize, usize), direction: Direction) {
        let id = grid.id_at(from.0, from.1);
        let neighbor = grid.neighbor(id, direction, false).expect("voisin en grille");
        grid.cell_mut(id).exits.add(direction);
        grid.cell_mut(neighbor).entry = Some(direction.opposite());
        grid.cell_mut(id).explored = true;
        grid.cell_mut(neighbor).explored = true;
    }

    /// Petit arbre creusé à la main :
    ///
    /// ```text
    /// S . .        S = départ (0,0)
    /// | \          branche morte vers (1,1)
    /// E  x         E = arrivée (0,2)
    /// ```
    fn handmade_grid() -> (Grid, CellId, CellId) {
        let mut grid = Grid::new(3, 3);
        grid.cell_mut(grid.id_at(0, 0)).entry = Some(Direction::North);
        link(&mut grid, (0, 0), Direction::South);
        link(&mut grid, (0, 1), Direction::East); // cul-de-sac en (1,1)
        link(&mut grid, (0, 1), Direction::South);
        let start = grid.id_at(0, 0);
        let end = grid.id_at(0, 2);
        (grid, start, end)
    }

    #[test]
    fn solver_follows_the_only_route() {
        let (mut grid, start, end) = handmade_grid();
        let solution = solve(&mut grid, start, end).expect("le labyrinthe a une solution");
        assert!(solution.complete);
        let cells: Vec<CellId> = solution.iter().collect();
        assert_eq!(
            cells,
            vec![start, grid.id_at(0, 1), end],
            "la branche morte ne fait pas partie de la solution"
        );
    }

    #[test]
    fn solver_reports_an_unreachable_end() {
        let mut grid = Grid::new(2, 2);
        let start = grid.id_at(0, 0);
        grid.cell_mut(start).explored = true;
        let end = grid.id_at(1, 1);
        assert!(matches!(
            solve(&mut grid, start, end),
            Err(MazeError::NoSolution)
        ));
    }

    #[test]
    fn single_cell_start_is_already_the_end() {
        let mut grid = Grid::new(1, 1);
        let only = grid.id_at(0, 0);
        let solution = solve(&mut grid, only, only).expect("trivial");
        assert_eq!(solution.len(), 1);
    }
}
