//! Moves: a cell coordinate plus the symbol to place there.
//!
//! Actions are transient values built by the caller for each turn. Whether
//! an action is legal depends on the game it is played into, so nothing here
//! checks bounds or occupancy.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// A `(row, column)` board position, zero-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub column: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Flat row-major index on a board of side `size`.
    ///
    /// ```
    /// use mnk_env::core::Coord;
    ///
    /// assert_eq!(Coord::new(1, 2).to_index(3), 5);
    /// assert_eq!(Coord::from_index(5, 3), Coord::new(1, 2));
    /// ```
    #[must_use]
    pub const fn to_index(self, size: usize) -> usize {
        self.row * size + self.column
    }

    /// Inverse of [`Coord::to_index`].
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            column: index % size,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

/// An intended move.
///
/// ## Example
///
/// ```
/// use mnk_env::core::{Action, Coord, Symbol};
///
/// let action = Action::new(0, 2, Symbol::X);
/// assert_eq!(action.coord(), Coord::new(0, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub column: usize,
    pub symbol: Symbol,
}

impl Action {
    #[must_use]
    pub const fn new(row: usize, column: usize, symbol: Symbol) -> Self {
        Self {
            row,
            column,
            symbol,
        }
    }

    /// Build an action from a coordinate.
    #[must_use]
    pub const fn at(coord: Coord, symbol: Symbol) -> Self {
        Self::new(coord.row, coord.column, symbol)
    }

    /// Build an action from a flat action-space index.
    #[must_use]
    pub const fn from_index(index: usize, size: usize, symbol: Symbol) -> Self {
        Self::at(Coord::from_index(index, size), symbol)
    }

    /// Target cell.
    #[must_use]
    pub const fn coord(&self) -> Coord {
        Coord::new(self.row, self.column)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.symbol, self.coord())
    }
}
