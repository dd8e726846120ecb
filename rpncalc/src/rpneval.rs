use crate::ops::{BinaryOp, Op, UnaryOp};

/// Outcome of reducing an operation stack from its top.
#[derive(Debug, PartialEq)]
pub struct Reduction<'a> {
    pub result: Option<f64>,
    /// Bottom of the stack left unconsumed by the reduction.
    pub remaining: &'a [Op],
}

// Operators waiting for their operands. The usize is the stack length the
// operator saw, which becomes the unconsumed part if its operands fail.
enum Frame {
    Unary(UnaryOp, usize),
    FirstOperand(BinaryOp, usize),
    SecondOperand(BinaryOp, f64, usize),
}

/// Reduce `ops` starting at the last element, consuming operands towards
/// the bottom. Operators pull their operands from whatever is directly
/// below them; constants and operands stand on their own.
///
/// When an operator can't get all its operands the reduction fails and
/// nothing that operator saw is consumed.
pub fn reduce(ops: &[Op]) -> Reduction<'_> {
    let mut frames = Vec::new();
    let mut end = ops.len();
    loop {
        // descend until hitting a leaf or the bottom of the stack
        let (mut result, mut rest) = loop {
            if end == 0 {
                break (None, 0);
            }
            match ops[end - 1] {
                Op::Operand(x) => break (Some(x), end - 1),
                Op::Constant(c) => break (Some(c.value()), end - 1),
                Op::Unary(u) => frames.push(Frame::Unary(u, end)),
                Op::Binary(b) => frames.push(Frame::FirstOperand(b, end)),
            }
            end -= 1;
        };
        // feed the reduced value to pending operators
        loop {
            match frames.pop() {
                None => {
                    return Reduction {
                        result,
                        remaining: &ops[..rest],
                    }
                }
                Some(Frame::Unary(u, seen)) => match result {
                    Some(x) => result = Some(u.apply(x)),
                    None => rest = seen,
                },
                Some(Frame::FirstOperand(b, seen)) => match result {
                    Some(x) => {
                        frames.push(Frame::SecondOperand(b, x, seen));
                        end = rest;
                        break;
                    }
                    None => rest = seen,
                },
                Some(Frame::SecondOperand(b, first, seen)) => match result {
                    Some(y) => result = Some(b.apply(first, y)),
                    None => rest = seen,
                },
            }
        }
    }
}
