//! One-shot scoring command
//!
//! Scores a guess against a given secret without playing a game.

use crate::core::{Code, Score};

/// Result of scoring a guess
#[derive(Debug)]
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub score: Score,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either input is not a valid code.
pub fn score_codes(secret: &str, guess: &str) -> Result<ScoreResult, String> {
    let secret = Code::parse(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let guess = Code::parse(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    Ok(ScoreResult {
        secret,
        guess,
        score: Score::calculate(&guess, &secret),
    })
}
