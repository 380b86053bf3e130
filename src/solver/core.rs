use std::rc::Rc;

use log::info;

use crate::combinations::{CombinationTable, SourceKey};
use crate::expression::Expr;
use crate::ops::Op;
use crate::pool::Pool;
use crate::puzzle::Puzzle;

use super::solutions::SolutionSet;

/// Depth-first search over every way of reducing the six numbers toward the
/// target. Each branch owns its pool and running expression; the tables are
/// read-only throughout, and the result is returned by value.
pub struct CountdownSolver {
    target: u64,
    full: Pool,
    table: CombinationTable,
}

impl CountdownSolver {
    pub fn new(puzzle: &Puzzle) -> Self {
        let table = CombinationTable::build(&puzzle.numbers);
        CountdownSolver {
            target: puzzle.target,
            full: Pool::new(&puzzle.numbers),
            table,
        }
    }

    /// Run the full search, returning every distinct expression that hits
    /// the target, in discovery order.
    pub fn solve(&self) -> Vec<String> {
        info!(
            "searching for {} over {:?}",
            self.target,
            self.full.values()
        );
        let mut found = SolutionSet::new();
        for (key, possibilities) in self.table.iter() {
            let Some(pool) = self.full.without_all(key.members()) else {
                continue;
            };
            for possibility in possibilities {
                self.descend(&pool, possibility.value, &possibility.expr, &mut found);
            }
        }
        info!("search finished with {} distinct solutions", found.len());
        found.into_vec()
    }

    fn descend(&self, pool: &Pool, value: u64, expr: &Rc<Expr>, found: &mut SolutionSet) {
        debug_assert_eq!(expr.evaluate().ok(), Some(value));
        if value == self.target {
            found.insert(expr.to_string());
        }
        if pool.is_empty() {
            return;
        }

        // single leftover numbers
        for operand in pool.distinct() {
            if let Some(rest) = pool.without(operand) {
                self.combine(value, expr, operand, &Expr::number(operand), &rest, found);
            }
        }
        // pairs drawn from the leftover pool, via the precomputed table
        for (x, y) in pool.pairs() {
            if let Some(rest) = pool.without_all(&[x, y]) {
                for possibility in self.table.get(&SourceKey::pair(x, y)) {
                    self.combine(
                        value,
                        expr,
                        possibility.value,
                        &possibility.expr,
                        &rest,
                        found,
                    );
                }
            }
        }
        // the whole pool as a triple, once only three numbers remain
        if let Some([x, y, z]) = pool.as_triple() {
            let empty = Pool::new(&[]);
            for possibility in self.table.get(&SourceKey::triple(x, y, z)) {
                self.combine(
                    value,
                    expr,
                    possibility.value,
                    &possibility.expr,
                    &empty,
                    found,
                );
            }
        }
    }

    /// Try all four operators on the running value and one operand, then
    /// recurse on every legal result.
    fn combine(
        &self,
        value: u64,
        expr: &Rc<Expr>,
        operand_value: u64,
        operand: &Rc<Expr>,
        rest: &Pool,
        found: &mut SolutionSet,
    ) {
        let running_is_larger = value >= operand_value;
        let (hi, lo) = if running_is_larger {
            (value, operand_value)
        } else {
            (operand_value, value)
        };
        for op in Op::ALL {
            let Some(result) = op.apply(hi, lo) else {
                continue;
            };
            let combined = match op {
                // commutative: keep the running expression first textually
                Op::Add | Op::Mul => Expr::binary(op, expr.clone(), operand.clone()),
                // the larger side must come first for legality
                Op::Sub | Op::Div if running_is_larger => {
                    Expr::binary(op, expr.clone(), operand.clone())
                }
                Op::Sub | Op::Div => Expr::binary(op, operand.clone(), expr.clone()),
            };
            self.descend(rest, result, &combined, found);
        }
    }
}
