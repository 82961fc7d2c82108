//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Code;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::cell::RefCell;

/// A strategy for selecting the next guess
pub trait Strategy {
    /// Select a guess from the guess pool given the current candidates
    ///
    /// Both slices are sorted ascending. Returns `None` if nothing can be
    /// selected.
    fn select_guess(&self, guess_pool: &[Code], candidates: &[Code]) -> Option<Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Lowest consistent candidate
    First(FirstStrategy),
    /// Random consistent candidate
    Random(RandomStrategy),
    /// Worst-case minimization (default)
    Minimax(MinimaxStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&self, guess_pool: &[Code], candidates: &[Code]) -> Option<Code> {
        match self {
            Self::First(s) => s.select_guess(guess_pool, candidates),
            Self::Random(s) => s.select_guess(guess_pool, candidates),
            Self::Minimax(s) => s.select_guess(guess_pool, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "first", "random", "minimax".
    /// Defaults to minimax if name is unrecognized. `seed` only matters for
    /// the random strategy.
    #[must_use]
    pub fn from_name(name: &str, seed: Option<u64>) -> Self {
        match name {
            "first" => Self::First(FirstStrategy),
            "random" => Self::Random(RandomStrategy::new(seed)),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }
}

/// Always plays the lowest code still consistent with the feedback
pub struct FirstStrategy;

impl Strategy for FirstStrategy {
    fn select_guess(&self, _guess_pool: &[Code], candidates: &[Code]) -> Option<Code> {
        candidates.first().copied()
    }
}

/// Plays a uniformly random consistent candidate
pub struct RandomStrategy {
    rng: RefCell<StdRng>,
}

impl RandomStrategy {
    /// Seeded for reproducible runs, OS entropy otherwise
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            rng: RefCell::new(rng),
        }
    }
}

impl Strategy for RandomStrategy {
    fn select_guess(&self, _guess_pool: &[Code], candidates: &[Code]) -> Option<Code> {
        candidates.choose(&mut *self.rng.borrow_mut()).copied()
    }
}

/// Minimizes the worst-case number of remaining candidates
///
/// Searches the whole guess pool, so it may play a code that is already
/// ruled out when that splits the candidates better.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess(&self, guess_pool: &[Code], candidates: &[Code]) -> Option<Code> {
        super::minimax::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_data() -> (Vec<Code>, Vec<Code>) {
        let pool = ["1234", "1678", "5678", "5687", "9087"]
            .iter()
            .map(|s| Code::parse(s).unwrap())
            .collect();
        let candidates = ["5678", "5687"]
            .iter()
            .map(|s| Code::parse(s).unwrap())
            .collect();
        (pool, candidates)
    }

    #[test]
    fn first_strategy_selects_lowest_candidate() {
        let (pool, candidates) = setup_test_data();
        let guess = FirstStrategy.select_guess(&pool, &candidates).unwrap();
        assert_eq!(guess.value(), 5678);
    }

    #[test]
    fn random_strategy_selects_from_candidates() {
        let (pool, candidates) = setup_test_data();
        let strategy = RandomStrategy::new(Some(3));

        for _ in 0..20 {
            let guess = strategy.select_guess(&pool, &candidates).unwrap();
            assert!(candidates.contains(&guess));
        }
    }

    #[test]
    fn random_strategy_is_reproducible_with_seed() {
        let (pool, candidates) = setup_test_data();
        let a = RandomStrategy::new(Some(11));
        let b = RandomStrategy::new(Some(11));

        for _ in 0..20 {
            assert_eq!(
                a.select_guess(&pool, &candidates),
                b.select_guess(&pool, &candidates)
            );
        }
    }

    #[test]
    fn minimax_strategy_selects_splitting_candidate() {
        let (pool, candidates) = setup_test_data();
        let guess = MinimaxStrategy.select_guess(&pool, &candidates).unwrap();
        assert_eq!(guess.value(), 5678);
    }

    #[test]
    fn strategies_return_none_without_candidates() {
        let (pool, _) = setup_test_data();
        assert!(FirstStrategy.select_guess(&pool, &[]).is_none());
        assert!(RandomStrategy::new(Some(1)).select_guess(&pool, &[]).is_none());
    }

    #[test]
    fn from_name_defaults_to_minimax() {
        assert!(matches!(
            StrategyType::from_name("first", None),
            StrategyType::First(_)
        ));
        assert!(matches!(
            StrategyType::from_name("random", Some(1)),
            StrategyType::Random(_)
        ));
        assert!(matches!(
            StrategyType::from_name("minimax", None),
            StrategyType::Minimax(_)
        ));
        assert!(matches!(
            StrategyType::from_name("nonsense", None),
            StrategyType::Minimax(_)
        ));
    }
}
