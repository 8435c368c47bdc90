//! Game rules: move legality, move application, win/draw detection.
//!
//! `Game` owns the board and the result. Streak detection lives in `lines`
//! so that it can be used on a bare `Board`.

pub mod engine;
pub mod lines;

pub use engine::{Game, GameResult};
pub use lines::{find_line, has_line, Direction, LineCells, WinningLine};
