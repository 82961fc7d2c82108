//! Display functions for game reports and command results

use super::formatters::{create_progress_bar, score_to_pegs};
use crate::commands::{BenchmarkResult, ScoreResult, SolveResult};
use crate::core::Score;
use colored::Colorize;
use std::io::{self, Write};

/// Write the two-line report shown after a wrong guess
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_score_report<W: Write + ?Sized>(out: &mut W, score: Score) -> io::Result<()> {
    writeln!(
        out,
        "- Found {} digits guessed correctly!",
        score.exact()
    )?;
    writeln!(
        out,
        "- Found {} correct numbers, but in the wrong place.",
        score.misplaced()
    )
}

/// Print the result of scoring a guess
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_score_result(result: &ScoreResult) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(
        out,
        "\nSecret {}  Guess {}  {}",
        result.secret.to_string().bright_yellow().bold(),
        result.guess.to_string().bright_white().bold(),
        score_to_pegs(result.score).cyan()
    )?;

    if result.score.is_win() {
        writeln!(out, "{}", "Guessed the right code. You win!".green().bold())
    } else {
        write_score_report(&mut out, result.score)
    }
}

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}  ({})",
            i + 1,
            step.guess,
            score_to_pegs(step.score),
            step.score
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(worst) = step.worst_case {
                println!("  Worst case: {worst} candidates");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.failed > 0 {
        println!(
            "   Failed:           {}",
            format!("{}", result.failed).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    if let Some((code, guesses)) = result.hardest {
        println!("   Hardest code:     {code} ({guesses} guesses)");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    counts.sort_unstable();

    for (guess_count, count) in counts {
        let pct = (count as f64 / result.solved as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
