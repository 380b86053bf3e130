//! JSON shapes of the historical solver endpoint, kept wire-compatible.

use serde::Serialize;

use crate::puzzle::{Puzzle, RuleViolation};

pub const NO_SOLUTIONS_MESSAGE: &str = "No exact solutions were found.";

/// Successful response: the puzzle as solved plus every solution found, or
/// a human-readable fallback string when the list is empty.
#[derive(Debug, Serialize)]
pub struct SolveResponse {
    pub target: u64,
    pub numbers: Vec<u64>,
    pub solutions: Solutions,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Solutions {
    Found(Vec<String>),
    Fallback(String),
}

/// Validation failure: the list of rule violation messages.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errors: Vec<String>,
}

impl SolveResponse {
    pub fn new(puzzle: &Puzzle, solutions: Vec<String>) -> Self {
        let solutions = if solutions.is_empty() {
            Solutions::Fallback(NO_SOLUTIONS_MESSAGE.to_string())
        } else {
            Solutions::Found(solutions)
        };
        SolveResponse {
            target: puzzle.target,
            numbers: puzzle.numbers.to_vec(),
            solutions,
        }
    }
}

impl ErrorResponse {
    pub fn new(violations: &[RuleViolation]) -> Self {
        ErrorResponse {
            errors: violations.iter().map(ToString::to_string).collect(),
        }
    }
}
