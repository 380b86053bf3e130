//! The four Countdown operators and their legality rules.
//!
//! Beyond the game's own rules (no negative intermediates, no non-integer
//! division), each operator rejects combinations that cannot yield a value
//! the pool does not already offer: subtracting a number from its double,
//! multiplying or dividing by 1, and dividing a perfect square by its root.
//! Pruning those keeps the search space tractable without losing solutions.

/// A binary operator over two positive integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Fixed enumeration order used by the table builder and the search.
    pub const ALL: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

    /// Combine `a` and `b`, with `a` the larger operand.
    ///
    /// Returns `None` when the combination is illegal or useless under the
    /// game rules. Callers are expected to order the operands, but `Sub` and
    /// `Div` stay total for any input.
    pub fn apply(self, a: u64, b: u64) -> Option<u64> {
        match self {
            Op::Add => a.checked_add(b),
            Op::Sub => {
                if a > b && a - b != b {
                    Some(a - b)
                } else {
                    None
                }
            }
            Op::Mul => {
                if a > 1 && b > 1 {
                    a.checked_mul(b)
                } else {
                    None
                }
            }
            Op::Div => {
                if b > 1 && a % b == 0 && a / b != b {
                    Some(a / b)
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_is_always_legal() {
        assert_eq!(Op::Add.apply(100, 75), Some(175));
        assert_eq!(Op::Add.apply(1, 1), Some(2));
    }

    #[test]
    fn subtraction_rejects_equal_operands() {
        assert_eq!(Op::Sub.apply(8, 8), None);
    }

    #[test]
    fn subtraction_rejects_halving() {
        // 10 - 5 = 5 just reproduces an operand
        assert_eq!(Op::Sub.apply(10, 5), None);
        assert_eq!(Op::Sub.apply(10, 4), Some(6));
    }

    #[test]
    fn subtraction_rejects_smaller_minuend() {
        assert_eq!(Op::Sub.apply(4, 10), None);
    }

    #[test]
    fn multiplication_rejects_one() {
        assert_eq!(Op::Mul.apply(75, 1), None);
        assert_eq!(Op::Mul.apply(1, 75), None);
        assert_eq!(Op::Mul.apply(75, 8), Some(600));
    }

    #[test]
    fn division_requires_exact_quotient() {
        assert_eq!(Op::Div.apply(100, 75), None);
        assert_eq!(Op::Div.apply(100, 50), Some(2));
    }

    #[test]
    fn division_rejects_one_as_divisor() {
        assert_eq!(Op::Div.apply(75, 1), None);
    }

    #[test]
    fn division_rejects_perfect_square_no_op() {
        // 16 / 4 = 4 just reproduces an operand
        assert_eq!(Op::Div.apply(16, 4), None);
        assert_eq!(Op::Div.apply(50, 2), Some(25));
    }

    #[test]
    fn dividing_equal_operands_yields_one() {
        assert_eq!(Op::Div.apply(8, 8), Some(1));
    }
}
