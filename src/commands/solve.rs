//! Code solving command
//!
//! Solves a specific secret and returns the solution path.

use crate::core::{Code, DEFAULT_CHANCES, Score};
use crate::solver::minimax::calculate_max_remaining;
use crate::solver::{Solver, Strategy};

/// Configuration for solving a code
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: DEFAULT_CHANCES as usize,
        }
    }
}

/// Result of solving a code
#[derive(Debug)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Code,
}

/// A single guess step in the solution
#[derive(Debug)]
pub struct GuessStep {
    pub guess: Code,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub worst_case: Option<usize>,
}

/// Solve a specific code using the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid code
/// - The solver runs out of candidates
pub fn solve_code<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, String> {
    let target = Code::parse(&config.target).map_err(|e| format!("Invalid target code: {e}"))?;

    let mut history: Vec<(Code, Score)> = Vec::new();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates = solver.filter_candidates(&history);
        let candidates_before = candidates.len();

        let guess = solver
            .next_guess(&history)
            .ok_or_else(|| "No candidates remaining".to_string())?;

        let worst_case =
            (candidates_before > 1).then(|| calculate_max_remaining(&guess, &candidates));

        let score = Score::calculate(&guess, &target);
        history.push((guess, score));

        let candidates_after = solver.count_candidates(&history);

        guesses.push(GuessStep {
            guess,
            score,
            candidates_before,
            candidates_after,
            worst_case,
        });

        if score.is_win() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FirstStrategy, MinimaxStrategy, all_codes};

    #[test]
    fn solve_code_succeeds_with_minimax() {
        let codes = all_codes();
        let solver = Solver::new(MinimaxStrategy, &codes);

        for target in ["1234", "9876", "5038", "7410", "2695"] {
            let result = solve_code(SolveConfig::new(target.to_string()), &solver).unwrap();

            assert!(result.success, "failed to solve {target}");
            assert!(result.guesses.len() <= usize::from(DEFAULT_CHANCES));
            assert_eq!(
                result.guesses.last().map(|step| step.guess),
                Some(result.target)
            );
        }
    }

    #[test]
    fn solve_records_history() {
        let codes = all_codes();
        let solver = Solver::new(FirstStrategy, &codes);

        let result = solve_code(SolveConfig::new("3857".to_string()), &solver).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
        assert_eq!(result.guesses[0].guess.value(), 1234);
        assert_eq!(result.guesses[0].candidates_before, codes.len());
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let codes = all_codes();
        let solver = Solver::new(FirstStrategy, &codes);

        let result = solve_code(SolveConfig::new("0123".to_string()), &solver);
        assert!(result.is_err());
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let codes = all_codes();
        let solver = Solver::new(FirstStrategy, &codes);
        let mut config = SolveConfig::new("9876".to_string());
        config.max_guesses = 1;

        let result = solve_code(config, &solver).unwrap();

        assert!(!result.success);
        assert_eq!(result.guesses.len(), 1);
    }

    #[test]
    fn solve_worst_case_recorded_when_ambiguous() {
        let codes = all_codes();
        let solver = Solver::new(FirstStrategy, &codes);

        let result = solve_code(SolveConfig::new("1234".to_string()), &solver).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.len(), 1);
        let step = &result.guesses[0];
        assert_eq!(step.candidates_after, 1);
        assert!(step.worst_case.is_some());
    }
}
