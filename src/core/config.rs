//! Game configuration.
//!
//! A game is fully described by its board size and the streak length needed
//! to win. Both are fixed for the lifetime of a `Game`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Board geometry for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length N of the N×N board.
    pub size: usize,

    /// Consecutive marks K needed to win. Must satisfy `1 <= K <= N`.
    pub streak: usize,
}

impl Default for GameConfig {
    /// Classic 3×3 tic-tac-toe.
    fn default() -> Self {
        Self { size: 3, streak: 3 }
    }
}

impl GameConfig {
    /// Create a configuration. Call [`GameConfig::validate`] before use, or
    /// let `Game::new` do it.
    #[must_use]
    pub const fn new(size: usize, streak: usize) -> Self {
        Self { size, streak }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the streak length.
    #[must_use]
    pub fn with_streak(mut self, streak: usize) -> Self {
        self.streak = streak;
        self
    }

    /// Number of cells on the board.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Check `1 <= streak <= size`.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::config("board size must be at least 1"));
        }
        if self.streak == 0 {
            return Err(Error::config("streak must be at least 1"));
        }
        if self.streak > self.size {
            return Err(Error::config(format!(
                "board of size {} cannot be smaller than the streak {}",
                self.size, self.streak
            )));
        }
        Ok(())
    }
}
