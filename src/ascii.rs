/*!
 * Rendu ASCII du labyrinthe.
 *
 * Adaptateur de rendu hors du cœur : il ne consomme que l'état exposé par
 * cellule (directions ouvertes, exploration, lettre). Chaque cellule occupe
 * 3 colonnes sur 2 lignes, murs partagés, intersections en `+`. L'entrée
 * nord du départ et la sortie sud forcée de l'arrivée percent la bordure.
 */

use crate::direction::Direction;
use crate::Maze;

/// Génère la représentation ASCII complète du labyrinthe.
pub fn render(maze: &Maze) -> String {
    let grid = &maze.grid;
    let width = grid.width();
    let height = grid.height();
    let mut canvas = vec![vec![' '; width * 3 + 1]; height * 2 + 1];

    for y in 0..height {
        for x in 0..width {
            let id = grid.id_at(x, y);
            let cell = grid.cell(id);
            let gx = x * 3;
            let gy = y * 2;

            if !is_open(maze, x, y, Direction::North) {
                canvas[gy][gx + 1] = '-';
                canvas[gy][gx + 2] = '-';
            }
            if !is_open(maze, x, y, Direction::West) {
                canvas[gy + 1][gx] = '|';
            }
            // Les bords est et sud n'appartiennent qu'à la dernière
            // colonne / ligne, les autres sont les murs nord/ouest voisins.
            if x == width - 1 && !is_open(maze, x, y, Direction::East) {
                canvas[gy + 1][gx + 3] = '|';
            }
            if y == height - 1 && !is_open(maze, x, y, Direction::South) {
                canvas[gy + 2][gx + 1] = '-';
                canvas[gy + 2][gx + 2] = '-';
            }

            canvas[gy + 1][gx + 1] = match (cell.letter, cell.explored) {
                (Some(letter), _) => letter,
                (None, true) => ' ',
                (None, false) => '#',
            };
        }
    }

    for row in (0..=height * 2).step_by(2) {
        for col in (0..=width * 3).step_by(3) {
            canvas[row][col] = '+';
        }
    }

    let mut out = String::new();
    for row in canvas {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Une frontière est ouverte si l'un de ses deux côtés l'ouvre ; après
/// réparation les deux côtés sont d'accord, le double test couvre les
/// percées de bordure (entrée du départ, sortie de l'arrivée).
fn is_open(maze: &Maze, x: usize, y: usize, direction: Direction) -> bool {
    let grid = &maze.grid;
    let id = grid.id_at(x, y);
    if grid.cell(id).is_open(direction) {
        return true;
    }
    match grid.neighbor(id, direction, false) {
        Some(neighbor) => grid.cell(neighbor).is_open(direction.opposite()),
        None => false,
    }
}
