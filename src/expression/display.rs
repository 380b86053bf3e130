use std::fmt;

use crate::ops::Op;

use super::ast::Expr;

/// Whether `expr` carries a loose top-level `+` or `-` and therefore needs
/// wrapping before it can serve as a multiplicand, divisor or subtrahend.
///
/// Strips every lazy parenthetical span (from each `(` up to the *next*
/// `)`), then tests the remainder for a `+` or `-`. The lazy strip is
/// deliberately conservative: a span never reaches past the true matching
/// parenthesis, so a loose operator is never hidden, while an operator at
/// depth one can leak and cause a redundant (but harmless) pair of
/// parentheses.
pub fn hanging_plus_or_minus(expr: &str) -> bool {
    let bytes = expr.as_bytes();
    let mut stripped = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'(' {
            if let Some(off) = bytes[i + 1..].iter().position(|&b| b == b')') {
                i += off + 2;
                continue;
            }
        }
        stripped.push(bytes[i]);
        i += 1;
    }
    stripped.iter().any(|&b| b == b'+' || b == b'-')
}

fn is_bare_number(expr: &str) -> bool {
    !expr.is_empty() && expr.bytes().all(|b| b.is_ascii_digit())
}

fn wrap_if(expr: String, needed: bool) -> String {
    if needed {
        format!("({expr})")
    } else {
        expr
    }
}

fn render(expr: &Expr) -> String {
    match expr {
        Expr::Number(n) => n.to_string(),
        Expr::Binary(op, left, right) => {
            let left = render(left);
            let right = render(right);
            match op {
                Op::Add => format!("{left}+{right}"),
                Op::Sub => {
                    let wrap = hanging_plus_or_minus(&right);
                    format!("{left}-{}", wrap_if(right, wrap))
                }
                Op::Mul => {
                    let wrap_left = hanging_plus_or_minus(&left);
                    let wrap_right = hanging_plus_or_minus(&right);
                    format!(
                        "{}*{}",
                        wrap_if(left, wrap_left),
                        wrap_if(right, wrap_right)
                    )
                }
                Op::Div => {
                    let wrap_left = hanging_plus_or_minus(&left);
                    // any compound divisor binds wrong without parentheses
                    let wrap_right = !is_bare_number(&right);
                    format!(
                        "{}/{}",
                        wrap_if(left, wrap_left),
                        wrap_if(right, wrap_right)
                    )
                }
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render(self))
    }
}
