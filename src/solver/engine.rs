//! Main code solver interface

use super::candidates::filter_candidates;
use super::strategy::Strategy;
use crate::core::{Code, Score};

/// Opening guess; every code is equivalent before any feedback
const OPENING: [u8; 4] = [1, 2, 3, 4];

/// Code solver
///
/// Coordinates the solving process using a given strategy.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    all_codes: &'a [Code],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and code pool
    ///
    /// `all_codes` must be sorted ascending (as `all_codes()` returns it).
    pub const fn new(strategy: S, all_codes: &'a [Code]) -> Self {
        Self {
            strategy,
            all_codes,
        }
    }

    /// Get the opening guess
    ///
    /// Returns 1234 if it is in the pool, otherwise asks the strategy.
    pub fn first_guess(&self) -> Option<Code> {
        Code::from_digits(OPENING)
            .ok()
            .filter(|code| self.all_codes.binary_search(code).is_ok())
            .or_else(|| self.strategy.select_guess(self.all_codes, self.all_codes))
    }

    /// Get the next guess given previous guesses and scores
    ///
    /// Returns None if no candidates remain.
    pub fn next_guess(&self, history: &[(Code, Score)]) -> Option<Code> {
        if history.is_empty() {
            return self.first_guess();
        }

        let candidates = self.filter_candidates(history);

        match candidates.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ => self.strategy.select_guess(self.all_codes, &candidates),
        }
    }

    /// Codes consistent with the guess history
    pub fn filter_candidates(&self, history: &[(Code, Score)]) -> Vec<Code> {
        filter_candidates(self.all_codes, history)
    }

    /// Count how many candidates remain given the history
    pub fn count_candidates(&self, history: &[(Code, Score)]) -> usize {
        self.filter_candidates(history).len()
    }
}
