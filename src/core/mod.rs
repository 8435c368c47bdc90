//! Core types: symbols, board storage, moves, configuration, RNG.
//!
//! Nothing in this module knows the rules of the game. `Board` stores cells,
//! `Action` describes an intended move, `GameConfig` fixes the geometry.

pub mod action;
pub mod board;
pub mod config;
pub mod rng;
pub mod symbol;

pub use action::{Action, Coord};
pub use board::Board;
pub use config::GameConfig;
pub use rng::GameRng;
pub use symbol::Symbol;
