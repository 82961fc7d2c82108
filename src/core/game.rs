//! Single round of the code breaker
//!
//! Tracks the secret, the remaining chances and the guesses made so far.
//! The console loop drives it one guess at a time.

use super::{Code, Score};
use std::fmt;

/// Guesses allowed per game unless configured otherwise
pub const DEFAULT_CHANCES: u8 = 8;

/// Where a game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the next guess
    Prompt,
    /// Secret guessed
    Won,
    /// Every chance used without finding the secret
    OutOfChances,
}

/// Result of evaluating one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The guess was the secret
    Won { attempts: u8 },
    /// Wrong guess, chances remain
    Miss(Score),
    /// Wrong guess on the last chance
    OutOfChances(Score),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    Finished,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for GameError {}

/// One game against a fixed secret
#[derive(Debug, Clone)]
pub struct Game {
    secret: Code,
    chances: u8,
    history: Vec<(Code, Score)>,
    state: GameState,
}

impl Game {
    /// Start a game with the given secret and number of chances
    #[must_use]
    pub fn new(secret: Code, chances: u8) -> Self {
        let state = if chances == 0 {
            GameState::OutOfChances
        } else {
            GameState::Prompt
        };

        Self {
            secret,
            chances,
            history: Vec::new(),
            state,
        }
    }

    /// Evaluate a guess and advance the game
    ///
    /// # Errors
    /// Returns `GameError::Finished` once the game has been won or lost.
    pub fn submit(&mut self, guess: Code) -> Result<Turn, GameError> {
        if self.state != GameState::Prompt {
            return Err(GameError::Finished);
        }

        let score = Score::calculate(&guess, &self.secret);
        self.history.push((guess, score));

        let turn = if score.is_win() {
            self.state = GameState::Won;
            Turn::Won {
                attempts: self.attempts(),
            }
        } else if self.chances_left() == 0 {
            self.state = GameState::OutOfChances;
            Turn::OutOfChances(score)
        } else {
            Turn::Miss(score)
        };

        Ok(turn)
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> Code {
        self.secret
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != GameState::Prompt
    }

    /// Number of guesses made so far
    #[must_use]
    pub fn attempts(&self) -> u8 {
        self.history.len() as u8
    }

    #[must_use]
    pub fn chances_left(&self) -> u8 {
        self.chances.saturating_sub(self.attempts())
    }

    /// Guesses made so far, with their scores
    #[must_use]
    pub fn history(&self) -> &[(Code, Score)] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        Code::parse(s).unwrap()
    }

    #[test]
    fn new_game_prompts() {
        let game = Game::new(code("1234"), DEFAULT_CHANCES);
        assert_eq!(game.state(), GameState::Prompt);
        assert_eq!(game.chances_left(), 8);
        assert_eq!(game.attempts(), 0);
        assert!(!game.is_over());
    }

    #[test]
    fn correct_guess_wins() {
        let mut game = Game::new(code("1234"), DEFAULT_CHANCES);
        assert_eq!(game.submit(code("5678")), Ok(Turn::Miss(Score::new(0, 0))));
        assert_eq!(game.submit(code("1234")), Ok(Turn::Won { attempts: 2 }));
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.chances_left(), 6);
    }

    #[test]
    fn wrong_guesses_exhaust_chances() {
        let mut game = Game::new(code("1234"), DEFAULT_CHANCES);
        for _ in 0..7 {
            assert!(matches!(game.submit(code("1243")), Ok(Turn::Miss(_))));
        }
        assert_eq!(
            game.submit(code("1243")),
            Ok(Turn::OutOfChances(Score::new(2, 2)))
        );
        assert_eq!(game.state(), GameState::OutOfChances);
        assert_eq!(game.chances_left(), 0);
        assert_eq!(game.history().len(), 8);
    }

    #[test]
    fn win_on_last_chance() {
        let mut game = Game::new(code("1234"), 2);
        assert!(matches!(game.submit(code("4321")), Ok(Turn::Miss(_))));
        assert_eq!(game.submit(code("1234")), Ok(Turn::Won { attempts: 2 }));
    }

    #[test]
    fn submit_after_finish_is_rejected() {
        let mut game = Game::new(code("1234"), 1);
        assert!(matches!(
            game.submit(code("5678")),
            Ok(Turn::OutOfChances(_))
        ));
        assert_eq!(game.submit(code("1234")), Err(GameError::Finished));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn zero_chances_is_already_lost() {
        let mut game = Game::new(code("1234"), 0);
        assert_eq!(game.state(), GameState::OutOfChances);
        assert_eq!(game.submit(code("1234")), Err(GameError::Finished));
    }
}
