use std::collections::HashSet;

use crate::expression::Expr;
use crate::ops::Op;

use super::table::Possibility;

/// How two operators fold three operands.
#[derive(Debug, Clone, Copy)]
enum Shape {
    /// `(x op1 y) op2 z`
    Chained,
    /// `x op1 (y op2 z)`
    Wrapped,
}

use Op::{Add, Div, Mul, Sub};
use Shape::{Chained, Wrapped};

/// The algebraically distinct ways of collapsing three operands `a >= b >= c`
/// with two binary operators, up to the symmetries that make forms
/// numerically identical (commutativity of + and *, and the operand ordering
/// the legality rules enforce for - and /). Slot indices select from
/// `[a, b, c]`. Fixed once; evaluated per triple.
const FORMS: [(Shape, [usize; 3], Op, Op); 40] = [
    (Chained, [0, 1, 2], Add, Add), // a+b+c
    (Chained, [0, 1, 2], Add, Sub), // a+b-c
    (Chained, [0, 1, 2], Sub, Add), // a-b+c
    (Chained, [0, 1, 2], Sub, Sub), // a-b-c
    (Chained, [1, 2, 0], Add, Sub), // b+c-a
    (Chained, [0, 1, 2], Add, Mul), // (a+b)*c
    (Wrapped, [0, 1, 2], Add, Mul), // a+b*c
    (Chained, [0, 1, 2], Add, Div), // (a+b)/c
    (Wrapped, [0, 1, 2], Add, Div), // a+b/c
    (Chained, [0, 1, 2], Sub, Div), // (a-b)/c
    (Wrapped, [0, 1, 2], Sub, Div), // a-b/c
    (Chained, [0, 1, 2], Sub, Mul), // (a-b)*c
    (Wrapped, [0, 1, 2], Sub, Mul), // a-b*c
    (Chained, [0, 1, 2], Mul, Add), // a*b+c
    (Wrapped, [0, 1, 2], Mul, Add), // a*(b+c)
    (Chained, [0, 1, 2], Mul, Sub), // a*b-c
    (Wrapped, [0, 1, 2], Mul, Sub), // a*(b-c)
    (Chained, [0, 1, 2], Div, Add), // a/b+c
    (Wrapped, [0, 1, 2], Div, Add), // a/(b+c)
    (Chained, [0, 1, 2], Div, Sub), // a/b-c
    (Wrapped, [0, 1, 2], Div, Sub), // a/(b-c)
    (Chained, [0, 2, 1], Add, Div), // (a+c)/b
    (Chained, [0, 2, 1], Sub, Div), // (a-c)/b
    (Chained, [0, 2, 1], Add, Mul), // (a+c)*b
    (Chained, [0, 2, 1], Sub, Mul), // (a-c)*b
    (Chained, [0, 2, 1], Mul, Add), // a*c+b
    (Chained, [0, 2, 1], Div, Add), // a/c+b
    (Chained, [0, 2, 1], Mul, Sub), // a*c-b
    (Chained, [0, 2, 1], Div, Sub), // a/c-b
    (Chained, [1, 2, 0], Add, Div), // (b+c)/a
    (Chained, [1, 2, 0], Mul, Sub), // b*c-a
    (Wrapped, [1, 0, 2], Sub, Div), // b-a/c
    (Wrapped, [1, 0, 2], Div, Sub), // b/(a-c)
    (Wrapped, [2, 0, 1], Sub, Div), // c-a/b
    (Wrapped, [2, 0, 1], Div, Sub), // c/(a-b)
    (Chained, [0, 1, 2], Mul, Mul), // a*b*c
    (Chained, [0, 1, 2], Div, Div), // a/b/c
    (Chained, [0, 1, 2], Div, Mul), // a/b*c
    (Chained, [0, 1, 2], Mul, Div), // a*b/c
    (Chained, [1, 2, 0], Div, Mul), // b/c*a
];

/// Every legal possibility for the triple `a >= b >= c`.
///
/// When operands repeat, distinct catalog forms can collapse to the same
/// rendered expression; those are deduplicated here, once, at build time.
pub(crate) fn triple_possibilities(a: u64, b: u64, c: u64) -> Vec<Possibility> {
    debug_assert!(a >= b && b >= c);
    let operands = [a, b, c];
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for (shape, [i, j, k], op1, op2) in FORMS {
        let (x, y, z) = (operands[i], operands[j], operands[k]);
        let formed = match shape {
            Shape::Chained => op1.apply(x, y).and_then(|inner| op2.apply(inner, z)).map(
                |value| Possibility {
                    value,
                    expr: Expr::binary(
                        op2,
                        Expr::binary(op1, Expr::number(x), Expr::number(y)),
                        Expr::number(z),
                    ),
                },
            ),
            Shape::Wrapped => op2.apply(y, z).and_then(|inner| op1.apply(x, inner)).map(
                |value| Possibility {
                    value,
                    expr: Expr::binary(
                        op1,
                        Expr::number(x),
                        Expr::binary(op2, Expr::number(y), Expr::number(z)),
                    ),
                },
            ),
        };
        if let Some(possibility) = formed {
            if seen.insert(possibility.expr.to_string()) {
                out.push(possibility);
            }
        }
    }
    out
}
