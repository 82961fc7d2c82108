//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Score};

/// Format a score as pegs: ● exact, ○ misplaced, · miss
#[must_use]
pub fn score_to_pegs(score: Score) -> String {
    let exact = usize::from(score.exact());
    let misplaced = usize::from(score.misplaced());
    let misses = CODE_LENGTH.saturating_sub(exact + misplaced);

    format!(
        "{}{}{}",
        "●".repeat(exact),
        "○".repeat(misplaced),
        "·".repeat(misses)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_win() {
        assert_eq!(score_to_pegs(Score::WIN), "●●●●");
    }

    #[test]
    fn pegs_mixed() {
        assert_eq!(score_to_pegs(Score::new(1, 2)), "●○○·");
        assert_eq!(score_to_pegs(Score::new(0, 0)), "····");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
