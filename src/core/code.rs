//! Secret code representation
//!
//! A Code is exactly 4 distinct decimal digits with a nonzero leading digit.
//! Every constructor validates, so holding a `Code` means holding a valid one.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Number of digits in a code
pub const CODE_LENGTH: usize = 4;

/// A 4-digit code with unique digits and a nonzero leading digit
///
/// Ordering follows the numeric value of the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for invalid codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    InvalidInteger,
    Negative,
    WrongLength(usize),
    RepeatedDigit(u8),
    LeadingZero,
    DigitOutOfRange(u8),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInteger => write!(f, "Please enter a valid integer."),
            Self::Negative => write!(f, "Number must not be negative."),
            Self::WrongLength(_) => write!(f, "Number is not {CODE_LENGTH} digits long."),
            Self::RepeatedDigit(_) => write!(f, "Number does not have unique digits."),
            Self::LeadingZero => write!(f, "Leading digit must not be 0."),
            Self::DigitOutOfRange(digit) => write!(f, "{digit} is not a decimal digit."),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Parse a code from user input
    ///
    /// Surrounding whitespace is ignored. The input must be an integer with
    /// exactly 4 digits, all distinct. Leading zeros are not preserved:
    /// `"0123"` is the integer 123 and is rejected as too short.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The input is not an integer
    /// - The integer is negative
    /// - It does not have exactly 4 digits
    /// - Any digit repeats
    ///
    /// # Examples
    /// ```
    /// use code_breaker::core::{Code, CodeError};
    ///
    /// let code = Code::parse("1234").unwrap();
    /// assert_eq!(code.value(), 1234);
    ///
    /// assert_eq!(Code::parse("12a3"), Err(CodeError::InvalidInteger));
    /// assert_eq!(Code::parse("1123"), Err(CodeError::RepeatedDigit(1)));
    /// ```
    pub fn parse(input: &str) -> Result<Self, CodeError> {
        let value: i64 = input
            .trim()
            .parse()
            .map_err(|_| CodeError::InvalidInteger)?;
        Self::from_value(value)
    }

    /// Create a code from its integer value
    ///
    /// # Errors
    /// Same rules as [`Code::parse`], minus the integer parsing step.
    pub fn from_value(value: i64) -> Result<Self, CodeError> {
        if value < 0 {
            return Err(CodeError::Negative);
        }

        let text = value.to_string();
        if text.len() != CODE_LENGTH {
            return Err(CodeError::WrongLength(text.len()));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, byte) in digits.iter_mut().zip(text.bytes()) {
            *slot = byte - b'0';
        }

        Self::from_digits(digits)
    }

    /// Create a code from its digits, most significant first
    ///
    /// # Errors
    /// Returns `CodeError` if a digit is above 9, the leading digit is 0,
    /// or any digit repeats.
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        if let Some(&digit) = digits.iter().find(|&&d| d > 9) {
            return Err(CodeError::DigitOutOfRange(digit));
        }

        if digits[0] == 0 {
            return Err(CodeError::LeadingZero);
        }

        let mut seen = [false; 10];
        for &digit in &digits {
            if seen[usize::from(digit)] {
                return Err(CodeError::RepeatedDigit(digit));
            }
            seen[usize::from(digit)] = true;
        }

        Ok(Self(digits))
    }

    /// Generate a random code
    ///
    /// Shuffles the ten decimal digits and keeps the first four. A leading 0
    /// is swapped with the last shuffled digit, which is never one of the
    /// four kept.
    ///
    /// # Examples
    /// ```
    /// use code_breaker::core::Code;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let code = Code::random(&mut rng);
    /// assert!((1000..=9999).contains(&code.value()));
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pool: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        pool.shuffle(rng);

        if pool[0] == 0 {
            pool.swap(0, 9);
        }

        Self([pool[0], pool[1], pool[2], pool[3]])
    }

    /// Get the digits, most significant first
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Get the digit at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Get the integer value of the code
    #[must_use]
    pub fn value(&self) -> u16 {
        self.0
            .iter()
            .fold(0u16, |acc, &digit| acc * 10 + u16::from(digit))
    }

    /// Check whether every digit is distinct
    ///
    /// Always true for a constructed code; used to guard the scorer.
    #[must_use]
    pub fn has_unique_digits(&self) -> bool {
        let mut seen = [false; 10];
        self.0.iter().all(|&d| !std::mem::replace(&mut seen[usize::from(d)], true))
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
