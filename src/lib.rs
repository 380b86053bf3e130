//! Exhaustive solver for the Countdown numbers game.
//!
//! Given six numbers drawn from the game's big ({25, 50, 75, 100}, once
//! each) and little ({1..=10}, twice each) pools and a three-digit target,
//! the solver finds every distinct arithmetic expression over +, -, *, /
//! that evaluates exactly to the target, using each number at most once and
//! never passing through a negative or fractional intermediate.

pub mod combinations;
pub mod expression;
pub mod ops;
pub mod pool;
pub mod puzzle;
pub mod solver;
pub mod wire;

// Re-export the main public API
pub use expression::{hanging_plus_or_minus, Expr, ExpressionError};
pub use ops::Op;
pub use puzzle::{Puzzle, PuzzleRequest, RuleViolation};
pub use solver::CountdownSolver;

/// Find every distinct expression over `numbers` that evaluates to `target`.
///
/// This is a convenience function that validates the input and runs the
/// full search. An empty result means no exact solution exists; it is not
/// an error.
///
/// # Errors
///
/// Returns the list of rule violations when the target is not a three-digit
/// number or the six numbers do not form a legal Countdown draw.
///
/// # Examples
///
/// ```
/// let solutions = countdown_solver::solve(150, &[100, 50, 25, 9, 8, 1]).expect("valid puzzle");
/// assert!(solutions.iter().any(|s| s == "100+50"));
/// ```
pub fn solve(target: i64, numbers: &[i64]) -> Result<Vec<String>, Vec<RuleViolation>> {
    let request = PuzzleRequest {
        target: Some(target),
        numbers: Some(numbers.to_vec()),
        ..PuzzleRequest::default()
    };
    let mut rng = rand::thread_rng();
    let puzzle = puzzle::resolve(&request, &mut rng)?;
    Ok(CountdownSolver::new(&puzzle).solve())
}
