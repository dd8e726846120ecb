use crate::ops::{BinaryOp, Constant, Op, UnaryOp};
use std::collections::HashMap;

/// Table of named operations the calculator knows about, keyed by symbol.
#[derive(Clone, Debug)]
pub struct OpRegistry {
    known: HashMap<String, Op>,
}

impl OpRegistry {
    /// An empty registry. Only operands can be evaluated against it.
    pub fn empty() -> Self {
        OpRegistry { known: HashMap::new() }
    }

    /// Registry pre-loaded with the arithmetic, trig and constant operations.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for b in BinaryOp::ALL.iter() {
            registry.learn(Op::Binary(*b));
        }
        for u in UnaryOp::ALL.iter() {
            registry.learn(Op::Unary(*u));
        }
        for c in Constant::ALL.iter() {
            registry.learn(Op::Constant(*c));
        }
        registry
    }

    /// Register `op` under its symbol, replacing any previous entry.
    /// Operands have no symbol of their own and are ignored.
    pub fn learn(&mut self, op: Op) {
        if let Some(name) = op.name() {
            self.known.insert(name.to_string(), op);
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&Op> {
        self.known.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.known.contains_key(symbol)
    }

    /// Known symbols in sorted order.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.known.keys().map(|s| s.as_str()).collect();
        symbols.sort();
        symbols
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

impl Default for OpRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
