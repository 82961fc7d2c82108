//! Code solving algorithms
//!
//! Narrows down the codes consistent with the feedback so far and picks
//! the next guess with a pluggable strategy.

pub mod candidates;
mod engine;
pub mod minimax;
pub mod strategy;

pub use candidates::{CODE_COUNT, all_codes, filter_candidates};
pub use engine::Solver;
pub use strategy::{FirstStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
