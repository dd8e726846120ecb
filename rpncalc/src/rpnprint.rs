use crate::ops::{BinaryOp, Op, UnaryOp};

#[derive(PartialEq, Debug, Clone, Copy)]
enum Assoc {
    Left,
    Right,
    None,
}

fn precedence(op: &Op) -> (usize, Assoc) {
    match *op {
        Op::Binary(BinaryOp::Add) | Op::Binary(BinaryOp::Subtract) => (2, Assoc::Left),
        Op::Binary(BinaryOp::Multiply) | Op::Binary(BinaryOp::Divide) => (3, Assoc::Left),
        Op::Unary(UnaryOp::Negate) => (5, Assoc::Right),
        // negative literals print like a negation
        Op::Operand(x) if x.is_sign_negative() => (5, Assoc::Right),
        Op::Unary(UnaryOp::Square) | Op::Unary(UnaryOp::Cube) => (6, Assoc::Left),
        Op::Unary(_) => (7, Assoc::Left), // function call style
        _ => (99, Assoc::None),
    }
}

type Rendered = (String, (usize, Assoc));

fn missing() -> Rendered {
    ("?".to_string(), (99, Assoc::None))
}

// Unparenthesized left parts are extended in place so long chains such as
// `1 + 1 + 1 ...` don't get copied over and over.
fn render_unary(op: &Op, u: UnaryOp, arg: Rendered) -> Rendered {
    let (prec, assoc) = precedence(op);
    let (mut text, (arg_prec, _)) = arg;
    match u {
        UnaryOp::Negate if prec >= arg_prec => text = format!("-({})", text),
        UnaryOp::Negate => text.insert(0, '-'),
        UnaryOp::Square | UnaryOp::Cube => {
            if prec > arg_prec {
                text = format!("({})", text);
            }
            text.push_str(u.symbol());
        }
        _ => text = format!("{}({})", u.symbol().trim_end_matches("()"), text),
    }
    (text, (prec, assoc))
}

fn render_binary(op: &Op, lhs: Rendered, rhs: Rendered) -> Rendered {
    let (prec, assoc) = precedence(op);
    let (lhs, (lhs_prec, _)) = lhs;
    let (rhs, (rhs_prec, _)) = rhs;
    let mut text = if prec > lhs_prec || (prec == lhs_prec && assoc != Assoc::Left) {
        format!("({})", lhs)
    } else {
        lhs
    };
    text.push(' ');
    text.push_str(&op.to_string());
    text.push(' ');
    if prec > rhs_prec || (prec == rhs_prec && assoc != Assoc::Right) {
        text.push('(');
        text.push_str(&rhs);
        text.push(')');
    } else {
        text.push_str(&rhs);
    }
    (text, (prec, assoc))
}

/// Render an operation stack as infix math, eg: `3 4 + ^2` as `(3 + 4)^2`.
/// Independent expressions are separated by commas, missing operands show
/// up as `?`.
pub fn infix(ops: &[Op]) -> String {
    // rendered subexpressions, bottom of the stack first
    let mut exprs: Vec<Rendered> = Vec::new();
    for op in ops.iter() {
        let rendered = match *op {
            Op::Operand(_) | Op::Constant(_) => (op.to_string(), precedence(op)),
            Op::Unary(u) => {
                let arg = exprs.pop().unwrap_or_else(missing);
                render_unary(op, u, arg)
            }
            Op::Binary(_) => {
                let rhs = exprs.pop().unwrap_or_else(missing);
                let lhs = exprs.pop().unwrap_or_else(missing);
                render_binary(op, lhs, rhs)
            }
        };
        exprs.push(rendered);
    }
    exprs
        .into_iter()
        .map(|(text, _)| text)
        .collect::<Vec<String>>()
        .join(", ")
}
