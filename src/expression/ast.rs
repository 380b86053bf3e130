use std::rc::Rc;

use crate::ops::Op;

/// An arithmetic expression over the puzzle numbers.
///
/// Trees are immutable and shared via `Rc`, so extending a running
/// expression during the search never copies or re-renders the part already
/// built. Rendering to an infix string happens lazily (see `display`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(u64),
    Binary(Op, Rc<Expr>, Rc<Expr>),
}

impl Expr {
    pub fn number(value: u64) -> Rc<Self> {
        Rc::new(Expr::Number(value))
    }

    pub fn binary(op: Op, left: Rc<Self>, right: Rc<Self>) -> Rc<Self> {
        Rc::new(Expr::Binary(op, left, right))
    }

    /// The numeric leaves in textual order. Used to audit that no input
    /// number is consumed more often than its multiplicity allows.
    pub fn leaves(&self) -> Vec<u64> {
        fn walk(expr: &Expr, out: &mut Vec<u64>) {
            match expr {
                Expr::Number(n) => out.push(*n),
                Expr::Binary(_, left, right) => {
                    walk(left, out);
                    walk(right, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(self, &mut out);
        out
    }
}
