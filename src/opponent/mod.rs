//! Opponent interface for single-player environments.

pub mod policy;

pub use policy::{FirstAvailable, OpponentPolicy, UniformOpponent};
