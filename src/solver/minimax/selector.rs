//! Minimax-based guess selection strategy
//!
//! Selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the guess with the lowest maximum remaining candidates and that
/// value, or `None` if the guess pool is empty. Ties go to guesses that are
/// still candidates themselves (they can win outright), then to the lowest
/// code, so the result is deterministic.
///
/// `candidates` must be sorted ascending.
///
/// # Examples
/// ```
/// use code_breaker::core::Code;
/// use code_breaker::solver::minimax::select_best_guess;
///
/// let pool = vec![Code::parse("9087").unwrap(), Code::parse("1234").unwrap()];
/// let candidates = vec![Code::parse("1243").unwrap(), Code::parse("5678").unwrap()];
///
/// let (best, max_remaining) = select_best_guess(&pool, &candidates).unwrap();
/// assert_eq!(best.value(), 1234);
/// assert_eq!(max_remaining, 1);
/// ```
#[must_use]
pub fn select_best_guess(guess_pool: &[Code], candidates: &[Code]) -> Option<(Code, usize)> {
    guess_pool
        .par_iter()
        .map(|guess| {
            let max_remaining = calculate_max_remaining(guess, candidates);
            let not_candidate = candidates.binary_search(guess).is_err();
            (max_remaining, not_candidate, *guess)
        })
        .min()
        .map(|(max_remaining, _, guess)| (guess, max_remaining))
}
