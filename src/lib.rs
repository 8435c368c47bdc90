//! # mnk-env
//!
//! An (m,n,k) tic-tac-toe engine wrapped as a reinforcement-learning
//! environment.
//!
//! A game is played on an N×N board; the first symbol to place K marks in a
//! row, column or diagonal wins. The environment exposes a step/reset
//! protocol for a learning agent: each step takes an action and returns the
//! flattened board, a reward from the tracked player's side and a terminal
//! flag.
//!
//! ## Design Principles
//!
//! 1. **Validate, then apply**: `Game::is_valid_move` and `Game::play` are
//!    separate. The environment always validates first.
//!
//! 2. **Sticky results**: once a game is won or drawn it stays that way and
//!    accepts no more moves.
//!
//! 3. **Illegal moves are rewards, misuse is an error**: an occupied cell
//!    earns the `invalid_move` reward; playing out of turn or after the end
//!    returns `Err`.
//!
//! ## Modules
//!
//! - `core`: Symbols, board storage, actions, configuration, RNG
//! - `rules`: The game engine and streak detection
//! - `env`: Step/reset environment and reward table
//! - `nn`: Tensor encodings for network-based agents
//! - `opponent`: Opponent policy interface for single-player training
//! - `error`: Error type

pub mod core;
pub mod env;
pub mod error;
pub mod nn;
pub mod opponent;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Action, Board, Coord, GameConfig, GameRng, Symbol};

pub use crate::rules::{Direction, Game, GameResult, WinningLine};

pub use crate::env::{EnvConfig, Environment, RewardKind, RewardTable, StepResult};

pub use crate::nn::{EncodedState, FlatEncoder, PlanesEncoder, StateEncoder};

pub use crate::opponent::{FirstAvailable, OpponentPolicy, UniformOpponent};

pub use crate::error::{Error, Result};
