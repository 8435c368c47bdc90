//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Action, Symbol};
use crate::rules::GameResult;

/// Python wrapper for Symbol.
#[pyclass(name = "Symbol")]
#[derive(Clone, Copy, Debug)]
pub struct PySymbol(pub Symbol);

#[pymethods]
impl PySymbol {
    /// Decode a board value (-1 = X, 0 = empty, 1 = O).
    #[new]
    fn new(value: i8) -> PyResult<Self> {
        Symbol::from_code(value).map(Self).ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Invalid symbol value {} (expected -1, 0 or 1)",
                value
            ))
        })
    }

    #[classattr]
    #[allow(non_snake_case)]
    fn X() -> Self {
        Self(Symbol::X)
    }

    #[classattr]
    #[allow(non_snake_case)]
    fn O() -> Self {
        Self(Symbol::O)
    }

    #[classattr]
    #[allow(non_snake_case)]
    fn EMPTY() -> Self {
        Self(Symbol::Empty)
    }

    /// Board encoding of this symbol.
    #[getter]
    fn value(&self) -> i8 {
        self.0.code()
    }

    fn opponent(&self) -> Self {
        Self(self.0.opponent())
    }

    fn __repr__(&self) -> String {
        format!("Symbol.{}", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.code() as u64
    }
}

/// Python wrapper for GameResult.
#[pyclass(name = "GameResult")]
#[derive(Clone, Copy, Debug)]
pub struct PyGameResult(pub GameResult);

#[pymethods]
impl PyGameResult {
    #[classattr]
    #[allow(non_snake_case)]
    fn UNDECIDED() -> Self {
        Self(GameResult::Undecided)
    }

    #[classattr]
    #[allow(non_snake_case)]
    fn WON_X() -> Self {
        Self(GameResult::WonX)
    }

    #[classattr]
    #[allow(non_snake_case)]
    fn WON_O() -> Self {
        Self(GameResult::WonO)
    }

    #[classattr]
    #[allow(non_snake_case)]
    fn DRAWN() -> Self {
        Self(GameResult::Drawn)
    }

    fn is_terminal(&self) -> bool {
        self.0.is_terminal()
    }

    /// The winning symbol, or None.
    fn winner(&self) -> Option<PySymbol> {
        self.0.winner().map(PySymbol)
    }

    fn __repr__(&self) -> String {
        format!("GameResult({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 as u64
    }
}

/// Python wrapper for Action.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    #[new]
    fn new(row: usize, column: usize, symbol: PySymbol) -> Self {
        Self(Action::new(row, column, symbol.0))
    }

    #[getter]
    fn row(&self) -> usize {
        self.0.row
    }

    #[getter]
    fn column(&self) -> usize {
        self.0.column
    }

    #[getter]
    fn symbol(&self) -> PySymbol {
        PySymbol(self.0.symbol)
    }

    fn __repr__(&self) -> String {
        format!(
            "Action(row={}, column={}, symbol={})",
            self.0.row, self.0.column, self.0.symbol
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

/// Convert a Python index to a board index. Negative values map to an
/// off-board index so that they are reported as invalid moves.
pub(crate) fn board_index(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
