//! Opponent policies.
//!
//! In single-player training the side not controlled by the learning agent
//! is played by an `OpponentPolicy`. The engine only needs a move back; how
//! the policy picks it is up to the implementation.

use crate::core::{Action, GameRng, Symbol};
use crate::rules::Game;

/// Chooses a move for `symbol` on the current game.
pub trait OpponentPolicy: Send + Sync {
    /// Return a legal action for `symbol`, or `None` if no cell is empty.
    fn choose(&self, game: &Game, symbol: Symbol, rng: &mut GameRng) -> Option<Action>;
}

/// Uniformly random legal move.
#[derive(Clone, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose(&self, game: &Game, symbol: Symbol, rng: &mut GameRng) -> Option<Action> {
        let moves: Vec<_> = game.valid_moves().collect();
        rng.choose(&moves).map(|&coord| Action::at(coord, symbol))
    }
}

/// First empty cell in row-major order. Deterministic; useful in tests.
#[derive(Clone, Debug, Default)]
pub struct FirstAvailable;

impl OpponentPolicy for FirstAvailable {
    fn choose(&self, game: &Game, symbol: Symbol, _rng: &mut GameRng) -> Option<Action> {
        game.valid_moves().next().map(|coord| Action::at(coord, symbol))
    }
}

impl<P: OpponentPolicy + ?Sized> OpponentPolicy for Box<P> {
    fn choose(&self, game: &Game, symbol: Symbol, rng: &mut GameRng) -> Option<Action> {
        (**self).choose(game, symbol, rng)
    }
}
