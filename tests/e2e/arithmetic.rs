//! Arithmetic end-to-end tests
//!
//! The generated program must compute what the expression means.

use crate::common::fixtures::VALUED_EXPRESSIONS;
use crate::common::*;
use exprc::eval::{EvalError, evaluate};
use exprc::machine::{MachineError, run};

#[test]
fn precedence() {
    assert_eq!(run_expr("1+2*3"), 7);
    assert_eq!(run_expr("(1+2)*3"), 9);
}

#[test]
fn left_associativity() {
    assert_eq!(run_expr("10-2-3"), 5);
    assert_eq!(run_expr("100/10/2"), 5);
}

#[test]
fn unary_chaining() {
    assert_eq!(run_expr("-3+5"), 2);
    assert_eq!(run_expr("--3"), 3);
    assert_eq!(run_expr("---3"), -3);
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(run_expr("7/2"), 3);
    assert_eq!(run_expr("-7/2"), -3);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(run_expr("1 + 2"), run_expr("1+2"));
}

#[test]
fn arithmetic_wraps_like_the_machine() {
    assert_eq!(run_expr("9223372036854775807+1"), i64::MIN);
    assert_eq!(run_expr("-9223372036854775807-1"), i64::MIN);
}

#[test]
fn division_by_zero_traps_at_runtime() {
    let asm = compile_success("1/0");
    assert_eq!(run(&asm), Err(MachineError::DivideError));
}

#[test]
fn division_faults_match_evaluator() {
    let ast = compile_to_ast("1/0").unwrap();
    assert!(matches!(evaluate(&ast), Err(EvalError::DivisionByZero { .. })));
    assert_eq!(run(&compile_success("1/0")), Err(MachineError::DivideError));

    let source = "(-9223372036854775807-1)/-1";
    let ast = compile_to_ast(source).unwrap();
    assert!(matches!(evaluate(&ast), Err(EvalError::DivisionOverflow { .. })));
    assert_eq!(run(&compile_success(source)), Err(MachineError::DivideOverflow));
}

#[test]
fn fixtures_compute_expected_values() {
    for (source, expected) in VALUED_EXPRESSIONS {
        assert_eq!(run_expr(source), *expected, "value of {:?}", source);
    }
}

#[test]
fn program_agrees_with_evaluator() {
    for (source, _) in VALUED_EXPRESSIONS {
        let ast = compile_to_ast(source).unwrap();
        assert_eq!(
            evaluate(&ast).ok(),
            Some(run_expr(source)),
            "evaluator and program disagree on {:?}",
            source
        );
    }
}
