//! Python bindings for the mnk-env engine.
//!
//! # Quick Start
//!
//! ```python
//! import mnk_env as mnk
//!
//! env = mnk.Environment(size=3, streak=3, player_symbol=mnk.Symbol.X)
//! obs = env.reset()
//!
//! obs, reward, terminal = env.step(1, 1, mnk.Symbol.X)
//! obs, reward, terminal = env.step(0, 0, mnk.Symbol.O)
//!
//! # Or let a random opponent answer each move
//! obs, reward, terminal = env.step_random(2, 2, mnk.Symbol.X)
//! ```

use pyo3::prelude::*;

use crate::error::Error;

mod py_core;
mod py_env;
mod py_games;

pub use py_core::*;
pub use py_env::*;
pub use py_games::*;

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }
}

/// mnk_env: an (m,n,k) tic-tac-toe engine and RL environment.
#[pymodule]
fn mnk_env(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PySymbol>()?;
    m.add_class::<PyGameResult>()?;
    m.add_class::<PyAction>()?;

    // Engine and environment
    m.add_class::<PyGame>()?;
    m.add_class::<PyEnvironment>()?;

    Ok(())
}
