//! Reward table: outcome category → reward value.
//!
//! The table is the only policy surface of the environment. It is built
//! once, copied into the environment at construction and never mutated
//! afterwards.

use serde::{Deserialize, Serialize};

use crate::core::Symbol;
use crate::error::{Error, Result};
use crate::rules::GameResult;

/// Outcome categories that carry a reward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    /// A legal move that did not end the game.
    ValidMove,
    /// Out-of-bounds or occupied cell. The move is not applied.
    InvalidMove,
    Draw,
    Win,
    Loss,
}

impl RewardKind {
    pub const ALL: [RewardKind; 5] = [
        RewardKind::ValidMove,
        RewardKind::InvalidMove,
        RewardKind::Draw,
        RewardKind::Win,
        RewardKind::Loss,
    ];

    /// Key used in configuration maps.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            RewardKind::ValidMove => "valid_move",
            RewardKind::InvalidMove => "invalid_move",
            RewardKind::Draw => "draw",
            RewardKind::Win => "win",
            RewardKind::Loss => "loss",
        }
    }

    /// Category of a (legal) move's result, seen from `player`.
    #[must_use]
    pub fn for_result(result: GameResult, player: Symbol) -> Self {
        match result {
            GameResult::Undecided => RewardKind::ValidMove,
            GameResult::Drawn => RewardKind::Draw,
            GameResult::WonX | GameResult::WonO => {
                if result.winner() == Some(player) {
                    RewardKind::Win
                } else {
                    RewardKind::Loss
                }
            }
        }
    }
}

impl std::str::FromStr for RewardKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RewardKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| Error::UnknownRewardKey { key: s.to_string() })
    }
}

impl std::fmt::Display for RewardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Reward per outcome category.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardTable {
    pub valid_move: f32,
    pub invalid_move: f32,
    pub draw: f32,
    pub win: f32,
    pub loss: f32,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            valid_move: 0.0,
            invalid_move: -10.0,
            draw: -1.0,
            win: 10.0,
            loss: -10.0,
        }
    }
}

impl RewardTable {
    /// Reward for a category.
    #[must_use]
    pub const fn get(&self, kind: RewardKind) -> f32 {
        match kind {
            RewardKind::ValidMove => self.valid_move,
            RewardKind::InvalidMove => self.invalid_move,
            RewardKind::Draw => self.draw,
            RewardKind::Win => self.win,
            RewardKind::Loss => self.loss,
        }
    }

    /// Set the reward for a category.
    #[must_use]
    pub fn with(mut self, kind: RewardKind, value: f32) -> Self {
        *self.slot(kind) = value;
        self
    }

    /// Build a table from `(key, value)` pairs, starting from the defaults.
    ///
    /// ```
    /// use mnk_env::env::RewardTable;
    ///
    /// let table = RewardTable::from_entries([("win", 1.0), ("loss", -1.0)]).unwrap();
    /// assert_eq!(table.win, 1.0);
    /// assert_eq!(table.invalid_move, -10.0);
    ///
    /// assert!(RewardTable::from_entries([("tie", 0.0)]).is_err());
    /// ```
    pub fn from_entries<K, I>(entries: I) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, f32)>,
    {
        entries
            .into_iter()
            .try_fold(Self::default(), |table, (key, value)| {
                let kind: RewardKind = key.as_ref().parse()?;
                Ok(table.with(kind, value))
            })
    }

    /// All categories with their rewards.
    pub fn entries(&self) -> impl Iterator<Item = (RewardKind, f32)> + '_ {
        RewardKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    fn slot(&mut self, kind: RewardKind) -> &mut f32 {
        match kind {
            RewardKind::ValidMove => &mut self.valid_move,
            RewardKind::InvalidMove => &mut self.invalid_move,
            RewardKind::Draw => &mut self.draw,
            RewardKind::Win => &mut self.win,
            RewardKind::Loss => &mut self.loss,
        }
    }
}

/// Reward for reaching `result` after a legal move, seen from `player`.
#[must_use]
pub fn reward_for(result: GameResult, player: Symbol, table: &RewardTable) -> f32 {
    table.get(RewardKind::for_result(result, player))
}
