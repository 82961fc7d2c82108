//! Guess feedback calculation
//!
//! A score counts two kinds of matching digits between a guess and the
//! secret:
//! - exact: same digit in the same position
//! - misplaced: same digit in a different position

use super::Code;
use super::code::CODE_LENGTH;
use std::fmt;

/// Feedback for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    exact: u8,
    misplaced: u8,
}

impl Score {
    /// Every digit in the right place
    pub const WIN: Self = Self {
        exact: CODE_LENGTH as u8,
        misplaced: 0,
    };

    /// Create a score from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if the counts add up to more than 4
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, misplaced: u8) -> Self {
        debug_assert!(
            exact as usize + misplaced as usize <= CODE_LENGTH,
            "Score counts must add up to at most 4"
        );
        Self { exact, misplaced }
    }

    /// Number of digits in the right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of shared digits in the wrong position
    #[inline]
    #[must_use]
    pub const fn misplaced(self) -> u8 {
        self.misplaced
    }

    /// Check if this is a winning score
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// Calculate the score when `guess` is played against `secret`
    ///
    /// Compares every digit of the guess with every digit of the secret.
    /// Equal digits at equal positions count as exact, at different
    /// positions as misplaced. This only gives the right answer because
    /// each code has unique digits, so a guess digit can match at most one
    /// secret digit.
    ///
    /// # Examples
    /// ```
    /// use code_breaker::core::{Code, Score};
    ///
    /// let secret = Code::parse("1234").unwrap();
    /// let guess = Code::parse("1243").unwrap();
    /// let score = Score::calculate(&guess, &secret);
    ///
    /// assert_eq!(score.exact(), 2);
    /// assert_eq!(score.misplaced(), 2);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        debug_assert!(
            guess.has_unique_digits() && secret.has_unique_digits(),
            "scoring requires unique digits"
        );

        let mut exact = 0;
        let mut misplaced = 0;

        for (i, &g) in guess.digits().iter().enumerate() {
            for (j, &s) in secret.digits().iter().enumerate() {
                if g == s {
                    if i == j {
                        exact += 1;
                    } else {
                        misplaced += 1;
                    }
                }
            }
        }

        Self { exact, misplaced }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} misplaced", self.exact, self.misplaced)
    }
}
