//! Code Breaker
//!
//! Guess a secret 4-digit code with unique digits. After each guess you
//! learn how many digits sit in the right place and how many are right
//! but misplaced.
//!
//! # Quick Start
//!
//! ```rust
//! use code_breaker::core::{Code, Score};
//!
//! let secret = Code::parse("1234").unwrap();
//! let guess = Code::parse("1243").unwrap();
//!
//! let score = Score::calculate(&guess, &secret);
//! assert_eq!((score.exact(), score.misplaced()), (2, 2));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive console game
pub mod interactive;
