use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn explicit(target: i64, numbers: &[i64]) -> PuzzleRequest {
    PuzzleRequest {
        target: Some(target),
        numbers: Some(numbers.to_vec()),
        ..PuzzleRequest::default()
    }
}

#[test]
fn accepts_a_valid_puzzle_and_sorts_descending() {
    let puzzle = resolve(&explicit(499, &[4, 100, 8, 8, 1, 75]), &mut rng()).unwrap();
    assert_eq!(puzzle.target, 499);
    assert_eq!(puzzle.numbers, [100, 75, 8, 8, 4, 1]);
}

#[test]
fn rejects_target_out_of_range() {
    for bad in [100, 1000, 0, -4] {
        let err = resolve(&explicit(bad, &[100, 75, 8, 8, 4, 1]), &mut rng()).unwrap_err();
        assert!(err.contains(&RuleViolation::TargetOutOfRange));
    }
}

#[test]
fn rejects_wrong_number_count() {
    let err = resolve(&explicit(499, &[100, 75, 8, 8, 4]), &mut rng()).unwrap_err();
    assert_eq!(err, vec![RuleViolation::WrongCount]);
}

#[test]
fn rejects_numbers_outside_the_pools() {
    for bad in [0, 11, 30, 101, -5] {
        let err = resolve(&explicit(499, &[bad, 75, 8, 8, 4, 1]), &mut rng()).unwrap_err();
        assert_eq!(err, vec![RuleViolation::NumberOutOfPool], "for {bad}");
    }
}

#[test]
fn rejects_a_repeated_big_number() {
    let err = resolve(&explicit(499, &[100, 100, 8, 8, 4, 1]), &mut rng()).unwrap_err();
    assert_eq!(err, vec![RuleViolation::BigNumberReused]);
}

#[test]
fn rejects_a_small_number_used_three_times() {
    let err = resolve(&explicit(499, &[8, 8, 8, 4, 2, 1]), &mut rng()).unwrap_err();
    assert_eq!(err, vec![RuleViolation::SmallNumberOverused]);
}

#[test]
fn accumulates_independent_violations() {
    let err = resolve(&explicit(1000, &[100, 75, 8, 8, 4]), &mut rng()).unwrap_err();
    assert_eq!(
        err,
        vec![RuleViolation::TargetOutOfRange, RuleViolation::WrongCount]
    );
}

#[test]
fn rejects_half_specified_requests() {
    let lone_target = PuzzleRequest {
        target: Some(499),
        ..PuzzleRequest::default()
    };
    let err = resolve(&lone_target, &mut rng()).unwrap_err();
    assert_eq!(err, vec![RuleViolation::MismatchedArguments]);

    let lone_big = PuzzleRequest {
        big: Some(3),
        ..PuzzleRequest::default()
    };
    let err = resolve(&lone_big, &mut rng()).unwrap_err();
    assert_eq!(err, vec![RuleViolation::MismatchedArguments]);
}

#[test]
fn rejects_bad_draw_counts() {
    let request = PuzzleRequest {
        big: Some(5),
        little: Some(1),
        ..PuzzleRequest::default()
    };
    let err = resolve(&request, &mut rng()).unwrap_err();
    assert_eq!(err, vec![RuleViolation::TooManyBig]);

    let request = PuzzleRequest {
        big: Some(3),
        little: Some(2),
        ..PuzzleRequest::default()
    };
    let err = resolve(&request, &mut rng()).unwrap_err();
    assert_eq!(err, vec![RuleViolation::WrongCount]);
}

#[test]
fn rejects_oversized_draw_counts_without_panicking() {
    let request = PuzzleRequest {
        big: Some(u32::MAX),
        little: Some(1),
        ..PuzzleRequest::default()
    };
    let err = resolve(&request, &mut rng()).unwrap_err();
    assert!(err.contains(&RuleViolation::TooManyBig));
    assert!(err.contains(&RuleViolation::WrongCount));
}

#[test]
fn draws_respect_pool_multiplicities() {
    let request = PuzzleRequest {
        big: Some(3),
        little: Some(3),
        ..PuzzleRequest::default()
    };
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let puzzle = resolve(&request, &mut rng).unwrap();
        assert!((101..=999).contains(&puzzle.target));
        let bigs: Vec<u64> = puzzle
            .numbers
            .iter()
            .copied()
            .filter(|n| BIG.contains(n))
            .collect();
        assert_eq!(bigs.len(), 3);
        for n in puzzle.numbers {
            if BIG.contains(&n) {
                assert_eq!(puzzle.numbers.iter().filter(|&&m| m == n).count(), 1);
            } else {
                assert!((1..=10).contains(&n));
                assert!(puzzle.numbers.iter().filter(|&&m| m == n).count() <= 2);
            }
        }
        let mut sorted = puzzle.numbers;
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(sorted, puzzle.numbers, "numbers come back descending");
    }
}

#[test]
fn fully_random_requests_draw_everything() {
    let puzzle = resolve(&PuzzleRequest::default(), &mut rng()).unwrap();
    assert!((101..=999).contains(&puzzle.target));
    assert_eq!(puzzle.numbers.len(), 6);
}
