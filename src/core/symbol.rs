//! Cell symbols and their numeric encoding.
//!
//! ## Symbol
//!
//! `X` and `O` are the two opposing marks; `Empty` is an unclaimed cell.
//! Each symbol has a fixed integer code used for observations:
//! X = -1, Empty = 0, O = +1.

use serde::{Deserialize, Serialize};

/// The content of a board cell, or the mark a player places.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Unclaimed cell.
    #[default]
    Empty,
    /// First player by convention.
    X,
    /// Second player by convention.
    O,
}

impl Symbol {
    /// Both playable marks, X first.
    pub const PLAYERS: [Symbol; 2] = [Symbol::X, Symbol::O];

    /// Integer code used in observations.
    ///
    /// ```
    /// use mnk_env::core::Symbol;
    ///
    /// assert_eq!(Symbol::X.code(), -1);
    /// assert_eq!(Symbol::Empty.code(), 0);
    /// assert_eq!(Symbol::O.code(), 1);
    /// ```
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Symbol::Empty => 0,
            Symbol::X => -1,
            Symbol::O => 1,
        }
    }

    /// Decode an observation value. Returns `None` for unknown codes.
    #[must_use]
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            0 => Some(Symbol::Empty),
            -1 => Some(Symbol::X),
            1 => Some(Symbol::O),
            _ => None,
        }
    }

    /// The opposing mark. `Empty` maps to itself.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Symbol::Empty => Symbol::Empty,
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Whether this is a playable mark (X or O).
    #[must_use]
    pub const fn is_player(self) -> bool {
        !matches!(self, Symbol::Empty)
    }

    /// Single-character rendering used by board display.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Symbol::Empty => '.',
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Empty => write!(f, "Empty"),
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}
