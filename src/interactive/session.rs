//! Interactive game session
//!
//! Plays games against random secrets until the player declines a rematch.

use super::console::Console;
use crate::core::{Code, DEFAULT_CHANCES, Game, GameState, Turn};
use crate::output::write_score_report;
use anyhow::Result;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, Write};

/// Configuration for an interactive session
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub chances: u8,
    pub seed: Option<u64>,
}

impl SessionConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chances: DEFAULT_CHANCES,
            seed: None,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How a single game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won { attempts: u8 },
    Lost,
    /// Input ran out mid-game
    Abandoned,
}

/// Running tally across games
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_played: usize,
    pub games_won: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Won { .. } => {
                self.games_played += 1;
                self.games_won += 1;
            }
            GameOutcome::Lost => self.games_played += 1,
            GameOutcome::Abandoned => {}
        }
    }
}

/// Run an interactive session on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error on the console.
pub fn run_session(config: &SessionConfig) -> Result<SessionSummary> {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    play_session(&mut console, &mut rng, config.chances)
}

/// Play games until the player says no
///
/// Each game gets a fresh secret from `rng`.
///
/// # Errors
///
/// Returns an error if there's an I/O error on the console.
pub fn play_session<R, W, G>(
    console: &mut Console<R, W>,
    rng: &mut G,
    chances: u8,
) -> Result<SessionSummary>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut summary = SessionSummary::default();

    loop {
        let outcome = play_game(console, Code::random(rng), chances)?;
        summary.record(outcome);

        if outcome == GameOutcome::Abandoned || !console.read_yes_no()? {
            break;
        }
    }

    writeln!(
        console.output(),
        "\n👋 Thanks for playing! You won {} of {} {}.",
        summary.games_won.to_string().bright_cyan().bold(),
        summary.games_played,
        if summary.games_played == 1 {
            "game"
        } else {
            "games"
        }
    )?;

    Ok(summary)
}

/// Play one game against `secret`
///
/// # Errors
///
/// Returns an error if there's an I/O error on the console.
pub fn play_game<R, W>(
    console: &mut Console<R, W>,
    secret: Code,
    chances: u8,
) -> Result<GameOutcome>
where
    R: BufRead,
    W: Write,
{
    let mut game = Game::new(secret, chances);

    while !game.is_over() {
        writeln!(console.output(), "--------------------")?;
        writeln!(console.output(), "Chances left: {}", game.chances_left())?;

        let Some(guess) = console.read_guess()? else {
            return Ok(GameOutcome::Abandoned);
        };

        match game.submit(guess)? {
            Turn::Won { .. } => {
                writeln!(
                    console.output(),
                    "{}",
                    "Guessed the right code. You win!".bright_green().bold()
                )?;
            }
            Turn::Miss(score) | Turn::OutOfChances(score) => {
                writeln!(console.output(), "That guess wasn't right.")?;
                write_score_report(console.output(), score)?;
            }
        }
    }

    if game.state() == GameState::Won {
        return Ok(GameOutcome::Won {
            attempts: game.attempts(),
        });
    }

    writeln!(
        console.output(),
        "{}",
        "Out of chances. You lose!".red().bold()
    )?;
    writeln!(
        console.output(),
        "The code was: {}",
        secret.to_string().bright_yellow().bold()
    )?;

    Ok(GameOutcome::Lost)
}
