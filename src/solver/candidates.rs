//! Candidate enumeration and filtering

use crate::core::{Code, Score};

/// Number of valid codes: 9 leading digits × 9 × 8 × 7
pub const CODE_COUNT: usize = 4536;

/// Every valid code, in ascending order
#[must_use]
pub fn all_codes() -> Vec<Code> {
    (1000..=9999)
        .filter_map(|value| Code::from_value(value).ok())
        .collect()
}

/// Keep the codes that would have produced every observed score
///
/// Preserves the order of `pool`.
#[must_use]
pub fn filter_candidates(pool: &[Code], history: &[(Code, Score)]) -> Vec<Code> {
    pool.iter()
        .filter(|&candidate| {
            history
                .iter()
                .all(|(guess, observed)| Score::calculate(guess, candidate) == *observed)
        })
        .copied()
        .collect()
}
