//! Environment configuration.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, Symbol};
use crate::error::{Error, Result};

use super::reward::RewardTable;

/// Everything needed to build an [`Environment`](super::Environment).
///
/// ```
/// use mnk_env::core::Symbol;
/// use mnk_env::env::EnvConfig;
///
/// let config = EnvConfig::new(5, 4).with_player(Symbol::O);
/// assert_eq!(config.first_to_play, Symbol::X);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Board geometry.
    pub game: GameConfig,

    /// The symbol whose rewards the environment reports.
    pub player_symbol: Symbol,

    /// Who moves first after construction and after every reset.
    pub first_to_play: Symbol,

    /// The other side is driven by an opponent policy rather than by the
    /// same caller.
    pub single_player: bool,

    pub rewards: RewardTable,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            player_symbol: Symbol::X,
            first_to_play: Symbol::X,
            single_player: true,
            rewards: RewardTable::default(),
        }
    }
}

impl EnvConfig {
    /// Defaults on an N×N board with streak K.
    #[must_use]
    pub fn new(size: usize, streak: usize) -> Self {
        Self {
            game: GameConfig::new(size, streak),
            ..Self::default()
        }
    }

    /// Set the tracked player's symbol.
    #[must_use]
    pub fn with_player(mut self, symbol: Symbol) -> Self {
        self.player_symbol = symbol;
        self
    }

    /// Set the symbol that opens each game.
    #[must_use]
    pub fn with_first_to_play(mut self, symbol: Symbol) -> Self {
        self.first_to_play = symbol;
        self
    }

    /// Enable or disable single-player mode.
    #[must_use]
    pub fn with_single_player(mut self, single_player: bool) -> Self {
        self.single_player = single_player;
        self
    }

    /// Replace the reward table.
    #[must_use]
    pub fn with_rewards(mut self, rewards: RewardTable) -> Self {
        self.rewards = rewards;
        self
    }

    /// Validate geometry and symbols.
    pub fn validate(&self) -> Result<()> {
        self.game.validate()?;
        if !self.player_symbol.is_player() {
            return Err(Error::config("player symbol must be X or O"));
        }
        if !self.first_to_play.is_player() {
            return Err(Error::config("first symbol to play must be X or O"));
        }
        Ok(())
    }
}
