/*!
 * Creusement du labyrinthe.
 *
 * Front aléatoire par bandes : on creuse une composante connexe complète
 * depuis un point de départ, puis on force une continuation vers le sud
 * depuis la cellule explorée la plus basse, jusqu'à atteindre la dernière
 * ligne. Toute la réparation des relations est différée à la fin de phase.
 */

use rand::Rng;

use crate::direction::Direction;
use crate::grid::{CellId, Grid};
use crate::walk::Walk;

/// Probabilité par défaut d'ouvrir une sortie vers chaque voisin vierge.
pub const DEFAULT_BRANCH_CHANCE: f64 = 0.6;

#[derive(Debug, Clone, Copy)]
pub struct Generator {
    branch_chance: f64,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_BRANCH_CHANCE)
    }
}

impl Generator {
    pub fn new(branch_chance: f64) -> Self {
        Self { branch_chance }
    }

    /// Creuse la grille entière et retourne (départ, arrivée).
    ///
    /// Le départ est tiré au hasard sur la première ligne, son entrée pointe
    /// vers le nord ("depuis l'extérieur"). L'arrivée est la première cellule
    /// de la dernière ligne à recevoir la sortie sud forcée.
    pub fn carve(&self, grid: &mut Grid, rng: &mut impl Rng) -> (CellId, CellId) {
        let start = grid.id_at(rng.random_range(0..grid.width()), 0);
        grid.cell_mut(start).entry = Some(Direction::North);

        let mut from = start;
        let end = loop {
            self.carve_component(grid, from, rng);

            let lowest = grid
                .lowest_explored()
                .expect("au moins une cellule est explorée après un creusement");
            grid.cell_mut(lowest).exits.add(Direction::South);

            let (_, y) = grid.coords(lowest);
            if y == grid.height() - 1 {
                break lowest;
            }
            let below = grid
                .neighbor(lowest, Direction::South, false)
                .expect("la cellule la plus basse n'est pas sur la dernière ligne");
            grid.cell_mut(below).entry = Some(Direction::North);
            from = below;
        };

        grid.repair_all();
        (start, end)
    }

    /// Creuse toute la composante atteignable depuis `start` : pioche
    /// aléatoire dans un ensemble de départs candidats, marche branchante
    /// depuis chacun, les fronts non suivis retournent dans l'ensemble.
    pub fn carve_component(&self, grid: &mut Grid, start: CellId, rng: &mut impl Rng) {
        let mut candidates = vec![start];
        while !candidates.is_empty() {
            let picked = rng.random_range(0..candidates.len());
            let current = candidates.swap_remove(picked);
            if grid.cell(current).explored {
                continue;
            }
            let mut walk = Walk::new(current);
            let deferred = self.step_walk(grid, &mut walk, rng);
            candidates.extend(deferred);
        }
    }

    /// Déroule une marche branchante depuis la queue de `walk` et retourne
    /// les fronts non suivis, à creuser plus tard.
    fn step_walk(&self, grid: &mut Grid, walk: &mut Walk, rng: &mut impl Rng) -> Vec<CellId> {
        let mut frontier = vec![walk.tail()];
        let mut deferred: Vec<CellId> = Vec::new();

        while !frontier.is_empty() {
            let picked = rng.random_range(0..frontier.len());
            let current = frontier.swap_remove(picked);
            deferred.retain(|&cell| cell != current);

            grid.cell_mut(current).explored = true;
            if walk.tail() != current {
                walk.push(current);
            }

            // Les fronts frères non choisis repartent dans l'ensemble
            // de travail extérieur.
            deferred.append(&mut frontier);
            frontier = self.open_random_exits(grid, current, rng);
        }

        walk.complete = true;
        deferred
    }

    /// Ouvre, indépendamment avec `branch_chance`, une sortie vers chaque
    /// voisin encore vierge ; le voisin reçoit l'entrée réciproque.
    /// Une cellule peut finir avec 0 à 4 sorties : zéro sortie est un
    /// cul-de-sac valide.
    pub fn open_random_exits(
        &self,
        grid: &mut Grid,
        from: CellId,
        rng: &mut impl Rng,
    ) -> Vec<CellId> {
        let mut opened = Vec::new();
        for (direction, neighbor) in grid.neighbors_in_all_directions(from, true) {
            if rng.random_bool(self.branch_chance) {
                grid.cell_mut(from).exits.add(direction);
                grid.cell_mut(neighbor).entry = Some(direction.opposite());
                opened.push(neighbor);
            }
        }
        opened
    }
}
