//! The game engine: board ownership, move validation, terminal detection.
//!
//! Validation and application are separate steps. Callers check
//! `is_valid_move` and then call `play`, which writes the cell without
//! re-checking it. `evaluate` must be called after each move to update the
//! result; the engine does not evaluate on its own.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{Action, Board, Coord, GameConfig, Symbol};
use crate::error::{Error, Result};

use super::lines::{self, WinningLine};

/// Outcome of a game so far.
///
/// `Undecided` is the only non-terminal value. Once a game leaves it, the
/// result never changes again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    #[default]
    Undecided,
    WonX,
    WonO,
    Drawn,
}

impl GameResult {
    /// Check if the game is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameResult::Undecided)
    }

    /// The winning symbol, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Symbol> {
        match self {
            GameResult::WonX => Some(Symbol::X),
            GameResult::WonO => Some(Symbol::O),
            GameResult::Undecided | GameResult::Drawn => None,
        }
    }

    /// The result of `symbol` completing a line. `Empty` yields `Undecided`.
    #[must_use]
    pub const fn won_by(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => GameResult::WonX,
            Symbol::O => GameResult::WonO,
            Symbol::Empty => GameResult::Undecided,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Undecided => write!(f, "undecided"),
            GameResult::WonX => write!(f, "won by X"),
            GameResult::WonO => write!(f, "won by O"),
            GameResult::Drawn => write!(f, "drawn"),
        }
    }
}

/// One match on an N×N board with streak K.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    board: Board,
    terminal: bool,
    result: GameResult,
    moves: usize,
}

impl Game {
    /// Create an empty game. Fails if `streak > size` or either is zero.
    pub fn new(size: usize, streak: usize) -> Result<Self> {
        Self::from_config(GameConfig::new(size, streak))
    }

    /// Create an empty game from a configuration.
    pub fn from_config(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            board: Board::new(config.size),
            terminal: false,
            result: GameResult::Undecided,
            moves: 0,
        })
    }

    /// A new, empty game with the same geometry.
    #[must_use]
    pub fn restarted(&self) -> Self {
        Self {
            config: self.config,
            board: Board::new(self.config.size),
            terminal: false,
            result: GameResult::Undecided,
            moves: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.config.size
    }

    #[must_use]
    pub fn streak(&self) -> usize {
        self.config.streak
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Result as of the last `evaluate`.
    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Number of marks placed so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Check that the target cell is on the board and empty, and that the
    /// action places a real mark.
    #[must_use]
    pub fn is_valid_move(&self, action: &Action) -> bool {
        action.symbol.is_player() && self.board.get(action.coord()) == Some(Symbol::Empty)
    }

    /// Place the action's symbol.
    ///
    /// The caller must have checked [`Game::is_valid_move`]; occupancy is not
    /// re-checked here. Playing into a terminal game returns
    /// [`Error::GameOver`], an off-board coordinate [`Error::OffBoard`].
    pub fn play(&mut self, action: &Action) -> Result<()> {
        if self.terminal {
            return Err(Error::GameOver {
                result: self.result,
            });
        }
        let coord = action.coord();
        if !self.board.contains(coord) {
            return Err(Error::OffBoard {
                coord,
                size: self.config.size,
            });
        }
        debug_assert!(self.is_valid_move(action), "unvalidated move {}", action);

        self.board.set(coord, action.symbol);
        self.moves += 1;
        trace!("played {} (move {})", action, self.moves);
        Ok(())
    }

    /// Empty cells in row-major order. Each call starts a fresh iteration.
    pub fn valid_moves(&self) -> impl Iterator<Item = Coord> + '_ {
        self.board.empty_cells()
    }

    /// Recompute the result from the board.
    ///
    /// X is checked before O. With no streak for either, a full board is a
    /// draw. A terminal game returns its stored result without rescanning.
    pub fn evaluate(&mut self) -> GameResult {
        if self.terminal {
            return self.result;
        }

        let streak = self.config.streak;
        let winner = Symbol::PLAYERS
            .into_iter()
            .find(|&symbol| lines::has_line(&self.board, symbol, streak));

        self.result = match winner {
            Some(symbol) => GameResult::won_by(symbol),
            None if self.board.is_full() => GameResult::Drawn,
            None => GameResult::Undecided,
        };

        if self.result.is_terminal() {
            self.terminal = true;
            debug!(
                "game over after {} moves on {}x{} (streak {}): {}",
                self.moves, self.config.size, self.config.size, streak, self.result
            );
        }
        self.result
    }

    /// Cells of the completed streak when the game was won.
    #[must_use]
    pub fn winning_line(&self) -> Option<WinningLine> {
        let winner = self.result.winner()?;
        lines::find_line(&self.board, winner, self.config.streak)
    }
}
