//! Error types for the engine and environment.
//!
//! Illegal moves (out of bounds, occupied cell) are not errors in the
//! environment: it reports them through the `invalid_move` reward. The
//! variants here are configuration mistakes and caller contract violations,
//! such as `Game::play` on an off-board cell.

use thiserror::Error;

use crate::core::{Action, Coord, Symbol};
use crate::rules::GameResult;

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("wrong symbol to play: got {got} but expected {expected}")]
    WrongTurn { expected: Symbol, got: Symbol },

    #[error("game already over ({result})")]
    GameOver { result: GameResult },

    #[error("cell {coord} is off a {size}x{size} board")]
    OffBoard { coord: Coord, size: usize },

    #[error("opponent moves are only driven in single-player mode")]
    NotSinglePlayer,

    #[error("unknown reward key '{key}' (expected one of: valid_move, invalid_move, draw, win, loss)")]
    UnknownRewardKey { key: String },

    #[error("opponent chose an illegal move: {action}")]
    IllegalOpponentMove { action: Action },

    #[error("no valid moves available")]
    NoValidMoves,
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
