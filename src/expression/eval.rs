use crate::ops::Op;

use super::ast::Expr;
use super::errors::ExpressionError;

impl Expr {
    /// Evaluate the tree under plain integer arithmetic, without the
    /// search-space pruning rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree divides by zero, divides with a
    /// remainder, produces a negative intermediate, or overflows `u64`.
    pub fn evaluate(&self) -> Result<u64, ExpressionError> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Binary(op, left, right) => {
                let a = left.evaluate()?;
                let b = right.evaluate()?;
                match op {
                    Op::Add => a.checked_add(b).ok_or(ExpressionError::Overflow),
                    Op::Sub => a.checked_sub(b).ok_or(ExpressionError::NegativeResult),
                    Op::Mul => a.checked_mul(b).ok_or(ExpressionError::Overflow),
                    Op::Div => {
                        if b == 0 {
                            Err(ExpressionError::DivisionByZero)
                        } else if a % b != 0 {
                            Err(ExpressionError::NonIntegerDivision)
                        } else {
                            Ok(a / b)
                        }
                    }
                }
            }
        }
    }
}
