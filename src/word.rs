/*!
 * Inscription d'un mot le long de la solution.
 *
 * Après résolution : on retient au hasard autant de jonctions du chemin
 * solution que de lettres, on ferme et dés-explore les branches des
 * jonctions non retenues, on re-remplit les zones vidées, puis on pose les
 * lettres. Le mot ne se lit qu'en suivant les vraies sorties du chemin.
 */

use std::collections::VecDeque;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::direction::Direction;
use crate::generator::Generator;
use crate::grid::{CellId, Grid};
use crate::{Maze, MazeError};

/// Alphabet de base des lettres posées dans la grille.
const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// Résultat d'une inscription réussie : les jonctions retenues, dans
/// l'ordre du chemin solution. La i-ème porte la lettre `word[i]` sur son
/// successeur de chemin.
#[derive(Debug)]
pub struct Embedding {
    pub selected: Vec<CellId>,
}

#[derive(Debug, Default)]
pub struct WordEmbedder {
    generator: Generator,
}

impl WordEmbedder {
    /// Le générateur sert à re-creuser les zones vidées par l'élagage.
    pub fn new(generator: Generator) -> Self {
        Self { generator }
    }

    /// Inscrit `word` dans un labyrinthe résolu.
    ///
    /// Échec récupérable si le chemin solution n'offre pas assez de
    /// jonctions : la grille n'est alors pas touchée au-delà de la
    /// résolution et reste un labyrinthe valide.
    pub fn embed(
        &self,
        maze: &mut Maze,
        word: &str,
        rng: &mut impl Rng,
    ) -> Result<Embedding, MazeError> {
        let letters = validate_word(word)?;
        let solution_junctions = maze.solution_junctions();

        if solution_junctions.len() < letters.len() {
            return Err(MazeError::NotEnoughJunctions {
                needed: letters.len(),
                available: solution_junctions.len(),
            });
        }

        let selected: Vec<CellId> = solution_junctions
            .choose_multiple(rng, letters.len())
            .copied()
            .collect();

        self.close_unselected_junctions(maze, &solution_junctions, &selected);
        self.fill_unexplored_areas(&mut maze.grid, rng);
        let ordered = self.assign_letters(maze, &letters, &selected, rng);
        maze.grid.repair_all();

        Ok(Embedding { selected: ordered })
    }

    /// Ferme chaque branche hors chemin des jonctions non retenues, puis
    /// dés-explore récursivement tout ce qui pendait derrière.
    fn close_unselected_junctions(
        &self,
        maze: &mut Maze,
        solution_junctions: &[CellId],
        selected: &[CellId],
    ) {
        for &junction in solution_junctions {
            if selected.contains(&junction) {
                continue;
            }
            let exits: Vec<Direction> = maze.grid.cell(junction).exits.iter().collect();
            for direction in exits {
                let Some(neighbor) = maze.grid.neighbor(junction, direction, false) else {
                    continue;
                };
                if !maze.solution.contains(neighbor) {
                    sever_branch(&mut maze.grid, neighbor);
                }
            }
        }
    }

    /// Rouvre les culs-de-sac vers le terrain vierge jusqu'au point fixe :
    /// chaque cul-de-sac exploré qui borde du vierge ouvre une sortie au
    /// hasard et le creusement reprend derrière. Évite les grandes zones
    /// noires après l'élagage.
    fn fill_unexplored_areas(&self, grid: &mut Grid, rng: &mut impl Rng) {
        loop {
            let mut changed = false;
            for dead_end in grid.explored_dead_ends() {
                let around = grid.neighbors_in_all_directions(dead_end, true);
                if let Some(&(direction, neighbor)) = around.choose(rng) {
                    grid.cell_mut(dead_end).exits.add(direction);
                    grid.cell_mut(neighbor).entry = Some(direction.opposite());
                    self.generator.carve_component(grid, neighbor, rng);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
        grid.repair_all();
    }

    /// Pose les lettres : leurres sur tous les voisins de sortie de toutes
    /// les jonctions de la grille, puis les lettres du mot, dans l'ordre du
    /// chemin, sur le successeur de chaque jonction retenue. Retourne les
    /// jonctions retenues en ordre de chemin.
    fn assign_letters(
        &self,
        maze: &mut Maze,
        letters: &[char],
        selected: &[CellId],
        rng: &mut impl Rng,
    ) -> Vec<CellId> {
        let decoys = decoy_letters(letters);

        for junction in maze.grid.all_junctions() {
            let exits: Vec<Direction> = maze.grid.cell(junction).exits.iter().collect();
            for direction in exits {
                // La sortie sud de l'arrivée n'a pas de voisin en grille.
                let Some(neighbor) = maze.grid.neighbor(junction, direction, false) else {
                    continue;
                };
                let decoy = *decoys
                    .choose(rng)
                    .expect("le pool de leurres n'est jamais vide, validé en amont");
                maze.grid.cell_mut(neighbor).letter = Some(decoy);
            }
        }

        let path = maze.solution.cells().to_vec();
        let mut ordered = Vec::with_capacity(letters.len());
        for (position, &cell) in path.iter().enumerate() {
            if !selected.contains(&cell) {
                continue;
            }
            let successor = path[position + 1];
            maze.grid.cell_mut(successor).letter = Some(letters[ordered.len()]);
            ordered.push(cell);
        }
        ordered
    }
}

/// Le mot est une suite non vide de lettres `a-z`, et doit laisser au moins
/// une lettre libre pour les leurres.
fn validate_word(word: &str) -> Result<Vec<char>, MazeError> {
    let letters: Vec<char> = word.chars().collect();
    if letters.is_empty()
        || !letters.iter().all(|c| c.is_ascii_lowercase())
        || decoy_letters(&letters).is_empty()
    {
        return Err(MazeError::InvalidWord);
    }
    Ok(letters)
}

/// Les lettres de l'alphabet absentes du mot : le pool de leurres.
fn decoy_letters(word: &[char]) -> Vec<char> {
    ALPHABET.filter(|c| !word.contains(c)).collect()
}

/// Remet à l'état vierge toute la branche accessible depuis `first` : on
/// coupe d'abord la sortie du parent vers la branche, puis chaque cellule
/// est réinitialisée (entrée, sorties, exploration, lettre) en largeur
/// d'abord. Les cellules sont permanentes, rien n'est détruit.
fn sever_branch(grid: &mut Grid, first: CellId) {
    if let Some(entry) = grid.cell(first).entry {
        if let Some(parent) = grid.neighbor(first, entry, false) {
            grid.cell_mut(parent).exits.remove(entry.opposite());
        }
    }

    let mut queue = VecDeque::from([first]);
    while let Some(current) = queue.pop_front() {
        for direction in grid.cell(current).exits.iter().collect::<Vec<_>>() {
            if let Some(next) = grid.neighbor(current, direction, false) {
                queue.push_back(next);
            }
        }
        grid.cell_mut(current).reset();
    }
}
