//! State encoding for neural network input.
//!
//! The environment's own observation is the raw `i8` board. Encoders turn a
//! `Game` into an `f32` tensor in whatever layout the consuming network
//! expects, from the point of view of one symbol.

use crate::core::{Coord, Symbol};
use crate::rules::Game;

use super::encoded::EncodedState;

/// Encodes a game into a tensor.
pub trait StateEncoder: Send + Sync {
    /// Encode the game as seen by `perspective`.
    ///
    /// The tensor is laid out for `game`'s own board size; it only matches
    /// `output_shape` when the encoder was built for that size.
    fn encode(&self, game: &Game, perspective: Symbol) -> EncodedState;

    /// Shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Number of actions: one per cell.
    fn action_space_size(&self) -> usize;
}

/// Raw symbol codes as floats, shape `[size²]`.
///
/// Matches the environment observation exactly; `perspective` is ignored.
#[derive(Clone, Debug)]
pub struct FlatEncoder {
    size: usize,
}

impl FlatEncoder {
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl StateEncoder for FlatEncoder {
    fn encode(&self, game: &Game, _perspective: Symbol) -> EncodedState {
        let tensor = game
            .board()
            .cells()
            .iter()
            .map(|s| f32::from(s.code()))
            .collect();
        let size = game.size();
        EncodedState::new(tensor, vec![size * size])
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![self.size * self.size]
    }

    fn action_space_size(&self) -> usize {
        self.size * self.size
    }
}

/// Three binary planes, shape `[3, size, size]`:
///
/// - plane 0: cells held by `perspective`
/// - plane 1: cells held by the opponent
/// - plane 2: empty cells
#[derive(Clone, Debug)]
pub struct PlanesEncoder {
    size: usize,
}

impl PlanesEncoder {
    pub const PLANES: usize = 3;

    pub fn new(size: usize) -> Self {
        Self { size }
    }

    fn plane_for(cell: Symbol, perspective: Symbol) -> usize {
        if cell == Symbol::Empty {
            2
        } else if cell == perspective {
            0
        } else {
            1
        }
    }
}

impl StateEncoder for PlanesEncoder {
    fn encode(&self, game: &Game, perspective: Symbol) -> EncodedState {
        let size = game.size();
        let area = size * size;
        let mut tensor = vec![0.0f32; Self::PLANES * area];

        for (index, &cell) in game.board().cells().iter().enumerate() {
            let plane = Self::plane_for(cell, perspective);
            tensor[plane * area + index] = 1.0;
        }

        EncodedState::new(tensor, vec![Self::PLANES, size, size])
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![Self::PLANES, self.size, self.size]
    }

    fn action_space_size(&self) -> usize {
        self.size * self.size
    }
}

/// Map a policy index back to a board cell.
#[must_use]
pub fn action_to_coord(index: usize, size: usize) -> Coord {
    Coord::from_index(index, size)
}

/// Mask of legal actions (1.0 for empty cells) over the flat action space.
/// All zeros once the game is over.
#[must_use]
pub fn legal_action_mask(game: &Game) -> Vec<f32> {
    if game.is_terminal() {
        return vec![0.0; game.board().cells().len()];
    }
    game.board()
        .cells()
        .iter()
        .map(|&s| if s == Symbol::Empty { 1.0 } else { 0.0 })
        .collect()
}
