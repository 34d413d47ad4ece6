/*!
 * spelling-maze : génération d'un labyrinthe qui épelle un mot.
 *
 * Pipeline séquentiel sur une seule grille : le générateur creuse la
 * connectivité, le solveur trouve l'unique chemin de l'entrée à la sortie,
 * l'inscripteur pose les lettres du mot le long de ce chemin et des leurres
 * ailleurs. Tout l'aléa passe par un générateur injecté, reproductible
 * avec une graine fixe.
 */

use rand::Rng;
use thiserror::Error;

pub mod ascii;
pub mod cell;
pub mod direction;
pub mod generator;
pub mod grid;
pub mod solver;
pub mod walk;
pub mod word;

pub use cell::{Cell, ExitSet};
pub use direction::Direction;
pub use generator::{Generator, DEFAULT_BRANCH_CHANCE};
pub use grid::{CellId, Grid};
pub use walk::Walk;
pub use word::{Embedding, WordEmbedder};

#[derive(Debug, Error)]
pub enum MazeError {
    /// Récupérable : le labyrinthe reste valide, le mot n'est pas inscrit.
    #[error("pas assez de jonctions sur le chemin solution pour écrire le mot ({needed} nécessaires, {available} disponibles)")]
    NotEnoughJunctions { needed: usize, available: usize },
    /// Contrat d'entrée : lettres `a-z` uniquement, non vide, et au moins
    /// une lettre de l'alphabet doit rester libre pour les leurres.
    #[error("mot invalide : lettres minuscules a-z, non vide, au plus 25 lettres distinctes")]
    InvalidWord,
    /// Défaut de génération : l'arrivée est atteignable par construction.
    #[error("aucune marche n'atteint l'arrivée, le creusement a violé ses invariants")]
    NoSolution,
}

/// Un labyrinthe résolu : la grille, ses deux extrémités et l'unique
/// marche solution qui les relie.
#[derive(Debug)]
pub struct Maze {
    pub grid: Grid,
    pub start: CellId,
    pub end: CellId,
    pub solution: Walk,
}

impl Maze {
    /// Creuse une grille `width` x `height` puis la résout.
    pub fn generate(
        width: usize,
        height: usize,
        generator: &Generator,
        rng: &mut impl Rng,
    ) -> Result<Self, MazeError> {
        let mut grid = Grid::new(width, height);
        let (start, end) = generator.carve(&mut grid, rng);
        let solution = solver::solve(&mut grid, start, end)?;
        Ok(Self {
            grid,
            start,
            end,
            solution,
        })
    }

    /// Les jonctions du chemin solution, en ordre de parcours, arrivée
    /// exclue (une jonction sans successeur ne peut pas porter de lettre).
    pub fn solution_junctions(&self) -> Vec<CellId> {
        let path = self.solution.cells();
        path[..path.len() - 1]
            .iter()
            .copied()
            .filter(|&id| self.grid.cell(id).is_junction())
            .collect()
    }
}
