use std::collections::HashMap;

use log::warn;
use rand::Rng;

use super::draw::{draw_numbers, draw_target};
use super::errors::RuleViolation;

/// A validated puzzle: a three-digit target and six numbers, descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub target: u64,
    pub numbers: [u64; 6],
}

/// A raw request, before validation. Target and numbers travel together, as
/// do the big/little draw counts; anything left unspecified is drawn at
/// random once the rest validates.
#[derive(Debug, Clone, Default)]
pub struct PuzzleRequest {
    pub target: Option<i64>,
    pub numbers: Option<Vec<i64>>,
    pub big: Option<u32>,
    pub little: Option<u32>,
}

const DEFAULT_BIG: u32 = 2;
const DEFAULT_LITTLE: u32 = 4;

/// Validate `request` and fill in anything missing from a random draw.
///
/// # Errors
///
/// Returns the accumulated rule violations, each carrying its
/// human-readable message, when the request breaks the game rules.
pub fn resolve<R: Rng>(request: &PuzzleRequest, rng: &mut R) -> Result<Puzzle, Vec<RuleViolation>> {
    let violations = check(request);
    if !violations.is_empty() {
        warn!("rejected puzzle request: {violations:?}");
        return Err(violations);
    }

    let target = match request.target {
        Some(target) => target as u64,
        None => draw_target(rng),
    };
    let numbers = match &request.numbers {
        Some(numbers) => {
            let mut out = [0u64; 6];
            for (slot, &n) in out.iter_mut().zip(numbers) {
                *slot = n as u64;
            }
            out.sort_unstable_by(|a, b| b.cmp(a));
            out
        }
        None => {
            let big = request.big.unwrap_or(DEFAULT_BIG);
            let little = request.little.unwrap_or(DEFAULT_LITTLE);
            draw_numbers(rng, big, little)
        }
    };
    Ok(Puzzle { target, numbers })
}

fn check(request: &PuzzleRequest) -> Vec<RuleViolation> {
    if request.big.is_some() != request.little.is_some()
        || request.target.is_some() != request.numbers.is_some()
    {
        return vec![RuleViolation::MismatchedArguments];
    }

    let mut violations = Vec::new();
    if let (Some(big), Some(little)) = (request.big, request.little) {
        if big > 4 {
            violations.push(RuleViolation::TooManyBig);
        }
        if big.checked_add(little) != Some(6) {
            violations.push(RuleViolation::WrongCount);
        }
    }
    if let Some(target) = request.target {
        if !(101..=999).contains(&target) {
            violations.push(RuleViolation::TargetOutOfRange);
        }
    }
    if let Some(numbers) = &request.numbers {
        check_numbers(numbers, &mut violations);
    }
    violations
}

fn check_numbers(numbers: &[i64], violations: &mut Vec<RuleViolation>) {
    if numbers.len() != 6 {
        violations.push(RuleViolation::WrongCount);
        return;
    }
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for &n in numbers {
        if !(1..=100).contains(&n) || (n > 10 && n % 25 != 0) {
            violations.push(RuleViolation::NumberOutOfPool);
            return;
        }
        let seen = counts.entry(n).or_insert(0);
        if n > 10 && *seen > 0 {
            violations.push(RuleViolation::BigNumberReused);
            return;
        }
        if *seen > 1 {
            violations.push(RuleViolation::SmallNumberOverused);
            return;
        }
        *seen += 1;
    }
}
