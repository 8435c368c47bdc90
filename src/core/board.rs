//! Square board storage.
//!
//! Cells are stored row-major in a flat `Vec<Symbol>`, so the flat index of
//! `(row, column)` is `row * size + column`. The observation handed to an
//! agent is exactly this vector mapped through `Symbol::code`.

use serde::{Deserialize, Serialize};

use super::action::Coord;
use super::symbol::Symbol;

/// An N×N grid of symbols.
///
/// Only the engine writes to a board: a cell goes from `Empty` to a mark
/// once and never back.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Symbol>,
}

impl Board {
    /// Create an all-empty board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Symbol::Empty; size * size],
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `coord` lies on the board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.column < self.size
    }

    /// Symbol at `coord`, or `None` when off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Symbol> {
        if self.contains(coord) {
            Some(self.cells[coord.to_index(self.size)])
        } else {
            None
        }
    }

    /// Row-major view of every cell.
    #[must_use]
    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    /// Number of cells holding `symbol`.
    #[must_use]
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells.iter().filter(|&&s| s == symbol).count()
    }

    /// Number of unclaimed cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.count(Symbol::Empty)
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Symbol::Empty)
    }

    /// Row-major integer encoding of the board.
    #[must_use]
    pub fn to_codes(&self) -> Vec<i8> {
        self.cells.iter().map(|s| s.code()).collect()
    }

    /// Coordinates of all empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == Symbol::Empty)
            .map(move |(i, _)| Coord::from_index(i, size))
    }

    /// Write a symbol. Panics if `coord` is off the board.
    pub(crate) fn set(&mut self, coord: Coord, symbol: Symbol) {
        let index = coord.to_index(self.size);
        self.cells[index] = symbol;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            let line: String = row.iter().map(|s| s.as_char()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
