//! Terminal output formatting
//!
//! Display utilities for game reports and CLI results.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_score_result, print_solve_result, write_score_report,
};
