//! Minimax guess selection
//!
//! Worst-case minimization over score groups.

mod calculator;
mod selector;

pub use calculator::calculate_max_remaining;
pub use selector::select_best_guess;
