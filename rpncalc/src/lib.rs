pub use brain::{CalculatorBrain, HISTORY_LIMIT};
pub use ops::{BinaryOp, Constant, Op, UnaryOp};
pub use program::Program;
pub use registry::OpRegistry;
pub use rpneval::{reduce, Reduction};

mod brain;
#[cfg(test)]
mod brain_test;

pub mod ops;
mod program;

mod registry;

mod rpneval;

mod rpnprint;
