use thiserror::Error;

/// A rule the submitted puzzle breaks. These are reported as a list of
/// human-readable messages, never as a fatal error; the caller is expected
/// to re-submit. The wording matches the historical wire responses.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("The parameters you've submitted are not allowed.")]
    MismatchedArguments,
    #[error("There are only four big numbers available.")]
    TooManyBig,
    #[error("You must have six total numbers.")]
    WrongCount,
    #[error("The target number must be between 101 and 999.")]
    TargetOutOfRange,
    #[error("Your numbers must be either from 1-10 or 25, 50, 75 or 100.")]
    NumberOutOfPool,
    #[error("25, 50, 75 and 100 can each only be used once.")]
    BigNumberReused,
    #[error("Small numbers can only be used twice")]
    SmallNumberOverused,
}
