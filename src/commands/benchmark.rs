//! Benchmark command
//!
//! Tests solver performance across many random secrets.

use crate::core::{Code, Score};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub hardest: Option<(Code, usize)>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Draw `count` secrets from the generator
pub fn generate_secrets<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Code> {
    (0..count).map(|_| Code::random(rng)).collect()
}

/// Play the solver against each secret
///
/// A secret counts as solved when the solver finds it within `max_guesses`.
/// Averages and extremes only cover solved secrets.
pub fn run_benchmark<S: Strategy>(
    solver: &Solver<S>,
    secrets: &[Code],
    max_guesses: usize,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut solved_counts: Vec<(Code, usize)> = Vec::new();
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for (idx, secret) in secrets.iter().enumerate() {
        if let Some(guesses) = solve_one(solver, secret, max_guesses) {
            solved_counts.push((*secret, guesses));
            *distribution.entry(guesses).or_insert(0) += 1;
        }

        if idx % 10 == 0 && !solved_counts.is_empty() {
            let avg = solved_counts.iter().map(|(_, n)| n).sum::<usize>() as f64
                / solved_counts.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_codes = secrets.len();
    let solved = solved_counts.len();
    let total_guesses: usize = solved_counts.iter().map(|(_, n)| n).sum();

    BenchmarkResult {
        total_codes,
        solved,
        failed: total_codes - solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: solved_counts.iter().map(|(_, n)| *n).min().unwrap_or(0),
        max_guesses: solved_counts.iter().map(|(_, n)| *n).max().unwrap_or(0),
        distribution,
        hardest: solved_counts.iter().copied().max_by_key(|(_, n)| *n),
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Number of guesses needed for one secret, `None` if not solved in time
fn solve_one<S: Strategy>(solver: &Solver<S>, secret: &Code, max_guesses: usize) -> Option<usize> {
    let mut history: Vec<(Code, Score)> = Vec::new();

    for turn in 1..=max_guesses {
        let guess = solver.next_guess(&history)?;
        let score = Score::calculate(&guess, secret);

        if score.is_win() {
            return Some(turn);
        }
        history.push((guess, score));
    }

    None
}
