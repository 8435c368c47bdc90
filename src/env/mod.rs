//! Reinforcement-learning environment.
//!
//! Wraps a `Game` in a step/reset protocol:
//!
//! ```
//! use mnk_env::core::{Action, Symbol};
//! use mnk_env::env::Environment;
//!
//! let mut env = Environment::with_size(3, 3).unwrap();
//! let step = env.step(Action::new(1, 1, Symbol::X)).unwrap();
//! assert_eq!(step.observation[4], Symbol::X.code());
//! assert!(!step.terminal);
//! assert_eq!(env.symbol_to_play(), Symbol::O);
//! ```

pub mod config;
pub mod environment;
pub mod reward;

pub use config::EnvConfig;
pub use environment::{Environment, StepResult};
pub use reward::{reward_for, RewardKind, RewardTable};
