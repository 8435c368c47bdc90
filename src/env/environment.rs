//! Step/reset environment around a single `Game`.
//!
//! The environment owns turn bookkeeping: it checks that each action comes
//! from the symbol whose turn it is, validates the move with the engine,
//! applies it, re-evaluates the game and flips the turn. Rewards are always
//! reported from the perspective of `player_symbol`.
//!
//! ## Step outcomes
//!
//! | Situation                    | Outcome                                         |
//! |------------------------------|-------------------------------------------------|
//! | game already terminal        | `Err(GameOver)`                                 |
//! | wrong symbol                 | `Err(WrongTurn)`                                |
//! | off-board or occupied cell   | `Ok`, `invalid_move` reward, nothing changes    |
//! | legal move                   | `Ok`, new observation, result reward, turn flips |

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{Action, GameRng, Symbol};
use crate::error::{Error, Result};
use crate::opponent::OpponentPolicy;
use crate::rules::{Game, GameResult};

use super::config::EnvConfig;
use super::reward::{reward_for, RewardTable};

/// What a step hands back to the agent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// Row-major board codes, length size².
    pub observation: Vec<i8>,
    pub reward: f32,
    pub terminal: bool,
}

impl StepResult {
    /// `(observation, reward, terminal)`.
    #[must_use]
    pub fn into_tuple(self) -> (Vec<i8>, f32, bool) {
        (self.observation, self.reward, self.terminal)
    }
}

/// Reinforcement-learning environment for one tracked player.
///
/// One instance per worker; there is no shared state between instances.
#[derive(Clone, Debug)]
pub struct Environment {
    config: EnvConfig,
    game: Game,
    symbol_to_play: Symbol,
    terminal: bool,
    result: GameResult,
}

impl Environment {
    /// Build an environment with a fresh game.
    pub fn new(config: EnvConfig) -> Result<Self> {
        config.validate()?;
        let game = Game::from_config(config.game)?;
        Ok(Self {
            config,
            game,
            symbol_to_play: config.first_to_play,
            terminal: false,
            result: GameResult::Undecided,
        })
    }

    /// Default rewards, X tracked and moving first, single-player.
    pub fn with_size(size: usize, streak: usize) -> Result<Self> {
        Self::new(EnvConfig::new(size, streak))
    }

    /// Start a new game with the same configuration.
    ///
    /// Returns the (empty) observation.
    pub fn reset(&mut self) -> Vec<i8> {
        self.game = self.game.restarted();
        self.symbol_to_play = self.config.first_to_play;
        self.terminal = false;
        self.result = GameResult::Undecided;
        debug!(
            "environment reset: {}x{} streak {}, {} to play",
            self.config.game.size,
            self.config.game.size,
            self.config.game.streak,
            self.symbol_to_play
        );
        self.observation()
    }

    /// Row-major board codes.
    #[must_use]
    pub fn observation(&self) -> Vec<i8> {
        self.game.board().to_codes()
    }

    /// Length of every observation (size²).
    #[must_use]
    pub fn observation_len(&self) -> usize {
        self.config.game.cell_count()
    }

    /// Reward for the current result from the tracked player's side.
    #[must_use]
    pub fn reward(&self) -> f32 {
        reward_for(self.result, self.config.player_symbol, &self.config.rewards)
    }

    /// Apply one action.
    ///
    /// Illegal cells are reported through the `invalid_move` reward and
    /// leave the board and the turn untouched. Calling this after the game
    /// has ended, or with the wrong symbol, is an error.
    pub fn step(&mut self, action: Action) -> Result<StepResult> {
        if self.terminal {
            return Err(Error::GameOver {
                result: self.result,
            });
        }
        if action.symbol != self.symbol_to_play {
            return Err(Error::WrongTurn {
                expected: self.symbol_to_play,
                got: action.symbol,
            });
        }

        if !self.game.is_valid_move(&action) {
            trace!("invalid move {}", action);
            return Ok(StepResult {
                observation: self.observation(),
                reward: self.config.rewards.invalid_move,
                terminal: self.terminal,
            });
        }

        self.game.play(&action)?;
        self.result = self.game.evaluate();
        self.terminal = self.game.is_terminal();
        self.symbol_to_play = self.symbol_to_play.opponent();

        let reward = self.reward();
        trace!("{} -> {} (reward {})", action, self.result, reward);
        if self.terminal {
            debug!(
                "episode finished after {} moves: {}",
                self.game.move_count(),
                self.result
            );
        }

        Ok(StepResult {
            observation: self.observation(),
            reward,
            terminal: self.terminal,
        })
    }

    /// Step the tracked player's action, then let `policy` answer for the
    /// other side.
    ///
    /// `action` must carry `player_symbol`. If the opponent is on move (it
    /// opens the game), `policy` plays first; should that move end the game,
    /// its result is returned and `action` is not applied. The opponent only
    /// answers if the player's action was legal and did not end the game.
    /// The returned result reflects the position after the last move made,
    /// with the reward seen from `player_symbol`.
    pub fn step_against<P>(
        &mut self,
        action: Action,
        policy: &P,
        rng: &mut GameRng,
    ) -> Result<StepResult>
    where
        P: OpponentPolicy + ?Sized,
    {
        if !self.config.single_player {
            return Err(Error::NotSinglePlayer);
        }
        if self.terminal {
            return Err(Error::GameOver {
                result: self.result,
            });
        }
        let player = self.config.player_symbol;
        if action.symbol != player {
            return Err(Error::WrongTurn {
                expected: player,
                got: action.symbol,
            });
        }

        if self.symbol_to_play != player {
            let opening = self.opponent_move(policy, rng)?;
            if opening.terminal {
                return Ok(opening);
            }
        }

        let outcome = self.step(action)?;
        if outcome.terminal || self.symbol_to_play == player {
            return Ok(outcome);
        }
        self.opponent_move(policy, rng)
    }

    fn opponent_move<P>(&mut self, policy: &P, rng: &mut GameRng) -> Result<StepResult>
    where
        P: OpponentPolicy + ?Sized,
    {
        let symbol = self.symbol_to_play;
        let reply = policy
            .choose(&self.game, symbol, rng)
            .ok_or(Error::NoValidMoves)?;
        if reply.symbol != symbol || !self.game.is_valid_move(&reply) {
            return Err(Error::IllegalOpponentMove { action: reply });
        }
        self.step(reply)
    }

    /// All legal actions for the symbol to play. Empty once terminal.
    #[must_use]
    pub fn valid_actions(&self) -> Vec<Action> {
        if self.terminal {
            return Vec::new();
        }
        let symbol = self.symbol_to_play;
        self.game
            .valid_moves()
            .map(|coord| Action::at(coord, symbol))
            .collect()
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    #[must_use]
    pub fn symbol_to_play(&self) -> Symbol {
        self.symbol_to_play
    }

    #[must_use]
    pub fn player_symbol(&self) -> Symbol {
        self.config.player_symbol
    }

    #[must_use]
    pub fn is_single_player(&self) -> bool {
        self.config.single_player
    }

    #[must_use]
    pub fn reward_table(&self) -> &RewardTable {
        &self.config.rewards
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// The underlying game, read-only.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }
}
