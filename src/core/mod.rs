//! Core domain types for the code breaker
//!
//! Codes, their validation and generation, and guess scoring.
//! Everything here is pure apart from the random generator passed in.

mod code;
mod game;
mod score;

pub use code::{CODE_LENGTH, Code, CodeError};
pub use game::{DEFAULT_CHANCES, Game, GameError, GameState, Turn};
pub use score::Score;
