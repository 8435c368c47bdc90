//! Tensor encodings for neural-network agents.
//!
//! The crate has no network code. These encoders only describe how a board
//! is laid out for an agent that does.
//!
//! ```
//! use mnk_env::core::Symbol;
//! use mnk_env::nn::{PlanesEncoder, StateEncoder};
//! use mnk_env::rules::Game;
//!
//! let game = Game::new(4, 3).unwrap();
//! let encoded = PlanesEncoder::new(4).encode(&game, Symbol::X);
//! assert_eq!(encoded.shape, vec![3, 4, 4]);
//! ```

pub mod encoded;
pub mod encoder;

pub use encoded::EncodedState;
pub use encoder::{action_to_coord, legal_action_mask, FlatEncoder, PlanesEncoder, StateEncoder};
