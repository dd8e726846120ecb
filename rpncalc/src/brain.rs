use crate::ops::Op;
use crate::program::Program;
use crate::registry::OpRegistry;
use crate::rpneval::reduce;
use crate::rpnprint::infix;

/// Most recent evaluations kept in the history log.
pub const HISTORY_LIMIT: usize = 100;

/// Stack based calculator. Operands and operators are pushed in postfix
/// order and the whole stack is re-evaluated after every push.
///
/// ```
/// use rpncalc::CalculatorBrain;
///
/// let mut brain = CalculatorBrain::new();
/// brain.push_operand(10.0);
/// brain.push_operand(2.0);
/// assert_eq!(brain.perform_operation("−"), Some(8.0));
/// assert_eq!(brain.stack_description(), "10 2 −");
/// ```
#[derive(Clone, Debug)]
pub struct CalculatorBrain {
    stack: Vec<Op>,
    known_ops: OpRegistry,
    history: Vec<String>,
}

impl CalculatorBrain {
    pub fn new() -> Self {
        Self::with_registry(OpRegistry::builtin())
    }

    pub fn with_registry(known_ops: OpRegistry) -> Self {
        CalculatorBrain {
            stack: Vec::new(),
            known_ops,
            history: Vec::new(),
        }
    }

    pub fn registry(&self) -> &OpRegistry {
        &self.known_ops
    }

    pub fn push_operand(&mut self, operand: f64) -> Option<f64> {
        self.stack.push(operand.into());
        self.evaluate()
    }

    /// Push the operation registered as `symbol` and evaluate. Unknown
    /// symbols leave the stack alone but still evaluate it.
    pub fn perform_operation(&mut self, symbol: &str) -> Option<f64> {
        match self.known_ops.get(symbol) {
            Some(op) => self.stack.push(*op),
            None => log::debug!("ignoring unknown operation {:?}", symbol),
        }
        self.evaluate()
    }

    /// Reduce the stack from its top. `None` when it can't be reduced.
    pub fn evaluate(&mut self) -> Option<f64> {
        let description = self.stack_description();
        let reduction = reduce(&self.stack);
        log::debug!(
            "{} = {:?} with {:?} left over",
            description,
            reduction.result,
            describe(reduction.remaining)
        );
        let result = reduction.result;
        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push(description);
        result
    }

    /// Symbols of the stack bottom first, suitable for `deserialize`.
    pub fn serialize(&self) -> Program {
        self.stack.iter().map(|op| op.to_string()).collect()
    }

    /// Replace the stack with `symbols`. Each one is trimmed, looked up in
    /// the registry and otherwise parsed as a finite decimal number.
    /// Anything else is dropped.
    pub fn deserialize<I, S>(&mut self, symbols: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stack = Vec::new();
        for symbol in symbols {
            let symbol = symbol.as_ref().trim();
            if let Some(op) = self.known_ops.get(symbol) {
                stack.push(*op);
            } else if let Some(operand) = parse_operand(symbol) {
                stack.push(Op::Operand(operand));
            } else {
                log::debug!("skipping unrecognized symbol {:?}", symbol);
            }
        }
        self.stack = stack;
    }

    pub fn stack_description(&self) -> String {
        describe(&self.stack)
    }

    /// Stack rendered as infix math, eg: `(3 + 4)^2`.
    pub fn infix_description(&self) -> String {
        infix(&self.stack)
    }

    /// Empties the stack. Known operations and history are kept.
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Stack descriptions seen by the last `HISTORY_LIMIT` evaluations,
    /// oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl Default for CalculatorBrain {
    fn default() -> Self {
        Self::new()
    }
}

// inf, NaN and overflowing literals aren't numbers a user could type
fn parse_operand(symbol: &str) -> Option<f64> {
    symbol.parse::<f64>().ok().filter(|x| x.is_finite())
}

fn describe(ops: &[Op]) -> String {
    ops.iter()
        .map(|op| op.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}
