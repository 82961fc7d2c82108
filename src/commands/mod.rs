//! Command implementations

pub mod benchmark;
pub mod score;
pub mod solve;

pub use benchmark::{BenchmarkResult, generate_secrets, run_benchmark};
pub use score::{ScoreResult, score_codes};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_code};
