//! Interactive console game
//!
//! Plain stdin/stdout play: prompt for guesses, report scores, offer a
//! rematch.

mod console;
mod session;

pub use console::Console;
pub use session::{
    GameOutcome, SessionConfig, SessionSummary, play_game, play_session, run_session,
};
