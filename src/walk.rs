use crate::grid::CellId;

/// Trace ordonnée de cellules à travers la grille.
///
/// Sert aux deux phases : branche aléatoire pendant le creusement,
/// hypothèse de chemin pendant la résolution. Une marche ne possède jamais
/// ses cellules, elle n'en garde que les identifiants.
#[derive(Debug, Clone)]
pub struct Walk {
    cells: Vec<CellId>,
    pub complete: bool,
}

impl Walk {
    pub fn new(start: CellId) -> Self {
        Self {
            cells: vec![start],
            complete: false,
        }
    }

    pub fn push(&mut self, cell: CellId) {
        self.cells.push(cell);
    }

    /// La cellule courante, en queue de marche.
    pub fn tail(&self) -> CellId {
        *self.cells.last().expect("une marche n'est jamais vide")
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: CellId) -> bool {
        self.cells.contains(&cell)
    }

    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().copied()
    }
}
