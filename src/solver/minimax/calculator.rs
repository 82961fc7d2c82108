//! Worst-case calculation for code scores
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible score.

use crate::core::{Code, Score};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each possible score that could result from this guess:
/// - Count how many candidates would produce that score
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use code_breaker::core::Code;
/// use code_breaker::solver::minimax::calculate_max_remaining;
///
/// let guess = Code::parse("1234").unwrap();
/// let candidates = vec![Code::parse("5678").unwrap(), Code::parse("1243").unwrap()];
///
/// assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    let score_counts = group_by_score(guess, candidates);

    score_counts.values().max().copied().unwrap_or(0)
}

/// Group candidates by the score they produce with the guess
fn group_by_score(guess: &Code, candidates: &[Code]) -> FxHashMap<Score, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let score = Score::calculate(guess, candidate);
        *counts.entry(score).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<Code> {
        list.iter().map(|s| Code::parse(s).unwrap()).collect()
    }

    #[test]
    fn max_remaining_perfect_split() {
        // Each candidate lands in its own score group
        let guess = Code::parse("1234").unwrap();
        let candidates = codes(&["1234", "5678", "4321"]);

        assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
    }

    #[test]
    fn max_remaining_all_same_score() {
        // No candidate shares a digit with the guess
        let guess = Code::parse("9087").unwrap();
        let candidates = codes(&["1234", "5612", "3456"]);

        assert_eq!(calculate_max_remaining(&guess, &candidates), 3);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        let guess = Code::parse("1234").unwrap();
        assert_eq!(calculate_max_remaining(&guess, &[]), 0);
    }

    #[test]
    fn group_by_score_counts_everything() {
        let guess = Code::parse("1234").unwrap();
        let candidates = codes(&["1243", "2143", "5678", "5679", "1234"]);

        let groups = group_by_score(&guess, &candidates);

        assert_eq!(groups.values().sum::<usize>(), candidates.len());
        assert_eq!(groups.get(&Score::new(0, 0)), Some(&2));
        assert_eq!(groups.get(&Score::new(2, 2)), Some(&1));
        assert_eq!(groups.get(&Score::new(0, 4)), Some(&1));
        assert_eq!(groups.get(&Score::WIN), Some(&1));
    }
}
