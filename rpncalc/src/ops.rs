use std::fmt;

/// Operators taking a single operand off the stack.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UnaryOp {
    Square,
    Cube,
    Sin,
    Cos,
    Tan,
    Negate,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 6] = [
        UnaryOp::Square,
        UnaryOp::Cube,
        UnaryOp::Sin,
        UnaryOp::Cos,
        UnaryOp::Tan,
        UnaryOp::Negate,
    ];

    pub fn symbol(&self) -> &'static str {
        match *self {
            UnaryOp::Square => "^2",
            UnaryOp::Cube => "^3",
            UnaryOp::Sin => "sin()",
            UnaryOp::Cos => "cos()",
            UnaryOp::Tan => "tan()",
            UnaryOp::Negate => "+/−",
        }
    }

    pub fn apply(&self, x: f64) -> f64 {
        match *self {
            UnaryOp::Square => x.powi(2),
            UnaryOp::Cube => x.powi(3),
            UnaryOp::Sin => x.sin(),
            UnaryOp::Cos => x.cos(),
            UnaryOp::Tan => x.sin() / x.cos(),
            UnaryOp::Negate => -x,
        }
    }
}

/// Operators taking two operands off the stack.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BinaryOp {
    Multiply,
    Divide,
    Add,
    Subtract,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 4] = [
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Add,
        BinaryOp::Subtract,
    ];

    pub fn symbol(&self) -> &'static str {
        match *self {
            BinaryOp::Multiply => "✕",
            BinaryOp::Divide => "÷",
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "−",
        }
    }

    /// `first` is the operand nearest the top of the stack (popped first),
    /// `second` the one below it. Pushing `a b −` computes `a - b`.
    pub fn apply(&self, first: f64, second: f64) -> f64 {
        match *self {
            BinaryOp::Multiply => first * second,
            BinaryOp::Divide => second / first,
            BinaryOp::Add => first + second,
            BinaryOp::Subtract => second - first,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Constant {
    Pi,
}

impl Constant {
    pub const ALL: [Constant; 1] = [Constant::Pi];

    pub fn symbol(&self) -> &'static str {
        match *self {
            Constant::Pi => "π",
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            Constant::Pi => std::f64::consts::PI,
        }
    }
}

/// A single entry on the operation stack.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Op {
    Operand(f64),
    Unary(UnaryOp),
    Binary(BinaryOp),
    Constant(Constant),
}

impl Op {
    /// Registry key for named operations, `None` for operands.
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            Op::Operand(_) => None,
            Op::Unary(ref u) => Some(u.symbol()),
            Op::Binary(ref b) => Some(b.symbol()),
            Op::Constant(ref c) => Some(c.symbol()),
        }
    }
}

impl From<f64> for Op {
    fn from(x: f64) -> Self {
        Op::Operand(x)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Op::Operand(x) => write!(f, "{}", x),
            Op::Unary(ref u) => write!(f, "{}", u.symbol()),
            Op::Binary(ref b) => write!(f, "{}", b.symbol()),
            Op::Constant(ref c) => write!(f, "{}", c.symbol()),
        }
    }
}
