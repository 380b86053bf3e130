//! Puzzle intake: rule validation of submitted targets and numbers, and
//! random draws from the big/little tile pools for anything unspecified.

mod draw;
mod errors;
mod validate;

pub use draw::{draw_numbers, draw_target, BIG, LITTLE};
pub use errors::RuleViolation;
pub use validate::{resolve, Puzzle, PuzzleRequest};

#[cfg(test)]
mod tests;
