use crate::brain::{CalculatorBrain, HISTORY_LIMIT};
use crate::program::Program;
use crate::registry::OpRegistry;
use crate::ops::{Op, UnaryOp};

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

#[test]
fn push_yields_operand() {
    let mut brain = CalculatorBrain::new();
    for x in [1.5, -3.0, 0.0, 1e30, 42.0] {
        assert_eq!(brain.push_operand(x), Some(x));
    }
    assert_eq!(brain.len(), 5);
}

#[test]
fn add_then_square() {
    let mut brain = CalculatorBrain::new();
    assert_eq!(brain.push_operand(3.0), Some(3.0));
    assert_eq!(brain.push_operand(4.0), Some(4.0));
    assert_eq!(brain.perform_operation("+"), Some(7.0));
    assert_eq!(brain.perform_operation("^2"), Some(49.0));
    assert_eq!(brain.stack_description(), "3 4 + ^2");
}

#[test]
fn operand_order() {
    let mut brain = CalculatorBrain::new();
    brain.push_operand(10.0);
    brain.push_operand(2.0);
    assert_eq!(brain.perform_operation("−"), Some(8.0));

    brain.clear();
    brain.push_operand(10.0);
    brain.push_operand(2.0);
    assert_eq!(brain.perform_operation("÷"), Some(5.0));
}

#[test]
fn empty_and_cleared() {
    let mut brain = CalculatorBrain::new();
    assert_eq!(brain.evaluate(), None);
    brain.push_operand(2.0);
    brain.perform_operation("π");
    brain.clear();
    assert!(brain.is_empty());
    assert_eq!(brain.evaluate(), None);
    assert_eq!(brain.stack_description(), "");
    assert_eq!(brain.registry().len(), 11);
}

#[test]
fn unknown_operation_is_ignored() {
    let mut brain = CalculatorBrain::new();
    brain.push_operand(6.0);
    brain.push_operand(7.0);
    assert_eq!(brain.perform_operation("sqrt"), Some(7.0));
    assert_eq!(brain.perform_operation("-"), Some(7.0));
    assert_eq!(brain.stack_description(), "6 7");

    let mut brain = CalculatorBrain::new();
    assert_eq!(brain.perform_operation("nope"), None);
    assert!(brain.is_empty());
}

#[test]
fn failed_operation_stays_pushed() {
    let mut brain = CalculatorBrain::new();
    brain.push_operand(3.0);
    assert_eq!(brain.perform_operation("+"), None);
    assert_eq!(brain.stack_description(), "3 +");
    // the dangling '+' still blocks later results
    assert_eq!(brain.push_operand(4.0), Some(4.0));
    assert_eq!(brain.perform_operation("✕"), None);
}

#[test]
fn trig_and_constants() {
    let mut brain = CalculatorBrain::new();
    brain.perform_operation("π");
    fuzzy_eq!(brain.perform_operation("cos()").unwrap(), -1.0);
    brain.push_operand(0.345);
    fuzzy_eq!(brain.perform_operation("tan()").unwrap(), 0.345f64.tan());
    brain.push_operand(2.0);
    fuzzy_eq!(brain.perform_operation("^3").unwrap(), 8.0);
    fuzzy_eq!(brain.perform_operation("+/−").unwrap(), -8.0);
}

#[test]
fn serialize_round_trip() {
    let mut brain = CalculatorBrain::new();
    brain.push_operand(0.1);
    brain.push_operand(2.5);
    brain.perform_operation("✕");
    brain.perform_operation("sin()");
    brain.perform_operation("π");
    brain.perform_operation("+");
    let expected = brain.evaluate();
    let program = brain.serialize();
    assert_eq!(&program[..], &["0.1", "2.5", "✕", "sin()", "π", "+"]);

    let mut fresh = CalculatorBrain::new();
    fresh.deserialize(&program);
    assert_eq!(fresh.serialize(), program);
    assert_eq!(fresh.evaluate(), expected);
}

#[test]
fn deserialize_via_json() {
    let program = Program::from_json(r#"["10", "2", "−", "^2"]"#).unwrap();
    let mut brain = CalculatorBrain::new();
    brain.deserialize(&program);
    assert_eq!(brain.evaluate(), Some(64.0));
}

#[test]
fn deserialize_skips_garbage() {
    let mut brain = CalculatorBrain::new();
    brain.push_operand(99.0);
    brain.deserialize(vec!["3", "banana", " 4 ", "", "+", "sqrt"]);
    assert_eq!(brain.stack_description(), "3 4 +");
    assert_eq!(brain.evaluate(), Some(7.0));

    brain.deserialize(Vec::<String>::new());
    assert!(brain.is_empty());
}

#[test]
fn deserialize_needs_the_registry() {
    let mut brain = CalculatorBrain::with_registry(OpRegistry::empty());
    brain.deserialize(vec!["3", "^2"]);
    assert_eq!(brain.stack_description(), "3");

    let mut registry = OpRegistry::empty();
    registry.learn(Op::Unary(UnaryOp::Square));
    let mut brain = CalculatorBrain::with_registry(registry);
    brain.deserialize(vec!["3", "^2", "+"]);
    assert_eq!(brain.evaluate(), Some(9.0));
}

#[test]
fn history_tracks_evaluations() {
    let mut brain = CalculatorBrain::new();
    brain.push_operand(3.0);
    brain.push_operand(4.0);
    brain.perform_operation("+");
    brain.clear();
    brain.evaluate();
    assert_eq!(brain.history(), &["3", "3 4", "3 4 +", ""]);
}

#[test]
fn infix_description() {
    let mut brain = CalculatorBrain::new();
    brain.deserialize(vec!["3", "4", "+", "^2"]);
    assert_eq!(brain.infix_description(), "(3 + 4)^2");
}

#[test]
fn deserialize_trims_every_token() {
    let mut brain = CalculatorBrain::new();
    brain.deserialize(vec![" 3", "4 ", " + ", "\t^2\n"]);
    assert_eq!(brain.stack_description(), "3 4 + ^2");
    assert_eq!(brain.evaluate(), Some(49.0));
}

#[test]
fn deserialize_rejects_non_finite() {
    let mut brain = CalculatorBrain::new();
    brain.deserialize(vec!["inf", "-infinity", "NaN", "1e999", "2", "1e3", "-0.5"]);
    assert_eq!(brain.stack_description(), "2 1000 -0.5");
}

#[test]
fn history_is_bounded() {
    let mut brain = CalculatorBrain::new();
    for i in 0..HISTORY_LIMIT + 5 {
        brain.push_operand(i as f64);
    }
    assert_eq!(brain.history().len(), HISTORY_LIMIT);
    assert_eq!(brain.history()[0], "0 1 2 3 4 5");
    assert!(brain.history()[HISTORY_LIMIT - 1].ends_with(" 103 104"));
}
