//! Game engine bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::core::Action;
use crate::rules::Game;

use super::py_core::{board_index, PyGameResult, PySymbol};

/// Python wrapper for the bare game engine.
///
/// Unlike the Rust `Game::play`, `play` here validates the move first and
/// raises `ValueError` for illegal cells.
#[pyclass(name = "Game")]
#[derive(Clone)]
pub struct PyGame {
    game: Game,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - size: Board side length
    /// - streak: Marks in a row needed to win (must not exceed size)
    #[new]
    #[pyo3(signature = (size = 3, streak = 3))]
    fn new(size: usize, streak: usize) -> PyResult<Self> {
        Ok(Self {
            game: Game::new(size, streak)?,
        })
    }

    fn is_valid_move(&self, row: i64, column: i64, symbol: PySymbol) -> bool {
        let action = Action::new(board_index(row), board_index(column), symbol.0);
        self.game.is_valid_move(&action)
    }

    /// Place a mark. Raises ValueError if the cell is illegal or the game is over.
    fn play(&mut self, row: i64, column: i64, symbol: PySymbol) -> PyResult<()> {
        let action = Action::new(board_index(row), board_index(column), symbol.0);
        if !self.game.is_valid_move(&action) {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Invalid move at ({}, {})",
                row, column
            )));
        }
        self.game.play(&action)?;
        Ok(())
    }

    /// Re-evaluate and return the result.
    fn evaluate(&mut self) -> PyGameResult {
        PyGameResult(self.game.evaluate())
    }

    /// Empty cells as (row, column) tuples in row-major order.
    fn valid_moves(&self) -> Vec<(usize, usize)> {
        self.game
            .valid_moves()
            .map(|c| (c.row, c.column))
            .collect()
    }

    /// Cells of the winning streak, if the game was won.
    fn winning_line(&self) -> Option<Vec<(usize, usize)>> {
        self.game
            .winning_line()
            .map(|line| line.cells.iter().map(|c| (c.row, c.column)).collect())
    }

    /// Board as a (size, size) int8 array.
    fn board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let size = self.game.size();
        PyArray1::from_vec_bound(py, self.game.board().to_codes())
            .reshape([size, size])
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
    }

    #[getter]
    fn size(&self) -> usize {
        self.game.size()
    }

    #[getter]
    fn streak(&self) -> usize {
        self.game.streak()
    }

    #[getter]
    fn terminal(&self) -> bool {
        self.game.is_terminal()
    }

    #[getter]
    fn result(&self) -> PyGameResult {
        PyGameResult(self.game.result())
    }

    fn copy(&self) -> Self {
        self.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(size={}, streak={}, moves={}, result={})",
            self.game.size(),
            self.game.streak(),
            self.game.move_count(),
            self.game.result()
        )
    }

    fn __str__(&self) -> String {
        self.game.board().to_string()
    }
}

impl From<Game> for PyGame {
    fn from(game: Game) -> Self {
        Self { game }
    }
}
