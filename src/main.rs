//! Code Breaker - CLI
//!
//! Console code breaker with a built-in solver for 4-digit unique-digit codes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use code_breaker::{
    commands::{SolveConfig, generate_secrets, run_benchmark, score_codes, solve_code},
    core::{Code, DEFAULT_CHANCES},
    interactive::{SessionConfig, run_session},
    output::{print_benchmark_result, print_score_result, print_solve_result},
    solver::{Solver, Strategy, StrategyType, all_codes},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "code_breaker",
    about = "Break the secret 4-digit code with unique digits",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the random generator (secrets and the random strategy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_CHANCES)]
    chances: u8,

    /// Solver strategy: minimax (default), first, random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the interactive game (default)
    Play,

    /// Score a guess against a secret
    Score {
        /// The secret code
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Let the solver crack a specific code
    Solve {
        /// The secret code to solve
        secret: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the solver on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.seed, cli.chances),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
        Commands::Solve { secret, verbose } => {
            run_solve_command(&cli.strategy, cli.seed, cli.chances, &secret, verbose)
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(&cli.strategy, cli.seed, cli.chances, count);
            Ok(())
        }
    }
}

fn run_play_command(seed: Option<u64>, chances: u8) -> Result<()> {
    let config = SessionConfig { chances, seed };
    run_session(&config)?;
    Ok(())
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_codes(secret, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result).context("failed to write score")
}

fn run_solve_command(
    strategy_name: &str,
    seed: Option<u64>,
    chances: u8,
    secret: &str,
    verbose: bool,
) -> Result<()> {
    let codes = all_codes();
    let strategy = StrategyType::from_name(strategy_name, seed);
    let solver = Solver::new(strategy, &codes);
    solve_command(secret, chances, verbose, &solver)
}

fn solve_command<S: Strategy>(
    secret: &str,
    chances: u8,
    verbose: bool,
    solver: &Solver<S>,
) -> Result<()> {
    let mut config = SolveConfig::new(secret.to_string());
    config.max_guesses = usize::from(chances);

    let result = solve_code(config, solver).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(strategy_name: &str, seed: Option<u64>, chances: u8, count: usize) {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let secrets: Vec<Code> = generate_secrets(&mut rng, count);

    let codes = all_codes();
    let strategy = StrategyType::from_name(strategy_name, seed);
    let solver = Solver::new(strategy, &codes);

    println!("Running benchmark on {count} random codes with the {strategy_name} strategy...");
    let result = run_benchmark(&solver, &secrets, usize::from(chances), true);
    print_benchmark_result(&result);
}
