use thiserror::Error;

/// Errors that can occur when re-evaluating an expression tree.
///
/// The search itself never produces these: operator legality is checked
/// before a tree is built. They exist for the standalone `Expr::evaluate`,
/// which audits trees under plain arithmetic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division with a remainder")]
    NonIntegerDivision,
    #[error("Negative intermediate result")]
    NegativeResult,
    #[error("Arithmetic overflow")]
    Overflow,
}
