//! Environment bindings for Python.

use std::collections::HashMap;

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::core::{Action, GameRng, Symbol};
use crate::env::{EnvConfig, Environment, RewardTable};
use crate::opponent::UniformOpponent;

use super::py_core::{board_index, PyAction, PyGameResult, PySymbol};
use super::py_games::PyGame;

/// Python wrapper for Environment.
///
/// `step` returns `(observation, reward, terminal)` with the observation as a
/// flat int8 numpy array of length size².
#[pyclass(name = "Environment")]
pub struct PyEnvironment {
    env: Environment,
    rng: GameRng,
}

#[pymethods]
impl PyEnvironment {
    /// Create a new environment.
    ///
    /// # Arguments
    /// - size: Board side length
    /// - streak: Marks in a row needed to win
    /// - player_symbol: Symbol whose rewards are reported (default X)
    /// - first_to_play: Symbol that opens each game (default X)
    /// - single_player: Whether `step_random` may answer for the opponent
    /// - reward_values: Dict overriding any of valid_move, invalid_move,
    ///   draw, win, loss
    /// - seed: RNG seed for the built-in random opponent
    #[new]
    #[pyo3(signature = (
        size = 3,
        streak = 3,
        player_symbol = None,
        first_to_play = None,
        single_player = true,
        reward_values = None,
        seed = 42
    ))]
    fn new(
        size: usize,
        streak: usize,
        player_symbol: Option<PySymbol>,
        first_to_play: Option<PySymbol>,
        single_player: bool,
        reward_values: Option<HashMap<String, f32>>,
        seed: u64,
    ) -> PyResult<Self> {
        let rewards = match reward_values {
            Some(values) => RewardTable::from_entries(values)?,
            None => RewardTable::default(),
        };
        let config = EnvConfig::new(size, streak)
            .with_player(player_symbol.map_or(Symbol::X, |s| s.0))
            .with_first_to_play(first_to_play.map_or(Symbol::X, |s| s.0))
            .with_single_player(single_player)
            .with_rewards(rewards);

        Ok(Self {
            env: Environment::new(config)?,
            rng: GameRng::new(seed),
        })
    }

    /// Start a new game and return the empty observation.
    fn reset<'py>(&mut self, py: Python<'py>) -> Bound<'py, PyArray1<i8>> {
        PyArray1::from_vec_bound(py, self.env.reset())
    }

    fn observation<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i8>> {
        PyArray1::from_vec_bound(py, self.env.observation())
    }

    /// Reward for the current result.
    fn reward(&self) -> f32 {
        self.env.reward()
    }

    /// Play a move. Raises ValueError on the wrong symbol or after the game ended.
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        row: i64,
        column: i64,
        symbol: PySymbol,
    ) -> PyResult<(Bound<'py, PyArray1<i8>>, f32, bool)> {
        let action = Action::new(board_index(row), board_index(column), symbol.0);
        let (observation, reward, terminal) = self.env.step(action)?.into_tuple();
        Ok((PyArray1::from_vec_bound(py, observation), reward, terminal))
    }

    /// Play a move, then let a uniformly random opponent answer.
    fn step_random<'py>(
        &mut self,
        py: Python<'py>,
        row: i64,
        column: i64,
        symbol: PySymbol,
    ) -> PyResult<(Bound<'py, PyArray1<i8>>, f32, bool)> {
        let action = Action::new(board_index(row), board_index(column), symbol.0);
        let (observation, reward, terminal) = self
            .env
            .step_against(action, &UniformOpponent, &mut self.rng)?
            .into_tuple();
        Ok((PyArray1::from_vec_bound(py, observation), reward, terminal))
    }

    /// Empty cells as (row, column) tuples in row-major order.
    fn valid_moves(&self) -> Vec<(usize, usize)> {
        self.env
            .game()
            .valid_moves()
            .map(|c| (c.row, c.column))
            .collect()
    }

    /// Legal actions for the symbol to play.
    fn valid_actions(&self) -> Vec<PyAction> {
        self.env.valid_actions().into_iter().map(PyAction).collect()
    }

    /// Snapshot of the underlying game.
    fn game(&self) -> PyGame {
        PyGame::from(self.env.game().clone())
    }

    #[getter]
    fn terminal(&self) -> bool {
        self.env.is_terminal()
    }

    #[getter]
    fn result(&self) -> PyGameResult {
        PyGameResult(self.env.result())
    }

    #[getter]
    fn symbol_to_play(&self) -> PySymbol {
        PySymbol(self.env.symbol_to_play())
    }

    #[getter]
    fn player_symbol(&self) -> PySymbol {
        PySymbol(self.env.player_symbol())
    }

    #[getter]
    fn first_to_play(&self) -> PySymbol {
        PySymbol(self.env.config().first_to_play)
    }

    #[getter]
    fn single_player(&self) -> bool {
        self.env.is_single_player()
    }

    /// Length of the flat observation (size²).
    #[getter]
    fn obs_shape(&self) -> usize {
        self.env.observation_len()
    }

    #[getter]
    fn reward_values(&self) -> HashMap<String, f32> {
        self.env
            .reward_table()
            .entries()
            .map(|(kind, value)| (kind.key().to_string(), value))
            .collect()
    }

    fn __repr__(&self) -> String {
        let game = self.env.game();
        format!(
            "Environment(size={}, streak={}, to_play={}, result={})",
            game.size(),
            game.streak(),
            self.env.symbol_to_play(),
            self.env.result()
        )
    }
}
