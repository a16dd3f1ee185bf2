//! Error tests - malformed input must be rejected with a diagnostic
//!
//! Categories:
//! - Lexical errors
//! - Parse errors
//! - Caret rendering

use crate::common::fixtures::MALFORMED_EXPRESSIONS;
use crate::common::*;

// ============================================================================
// LEXICAL ERRORS
// ============================================================================

#[test]
fn invalid_character() {
    assert_fails_at("1@2", "lex");
    assert_eq!(compile_error("1@2"), "1@2\n ^ invalid token");
}

#[test]
fn non_ascii_character() {
    // caret counts characters, not bytes
    assert_eq!(compile_error("1+é"), "1+é\n  ^ invalid token");
}

#[test]
fn literal_too_large() {
    let error = compile_error("1+18446744073709551616");
    assert_error_contains(&error, "number out of range");
    assert!(error.ends_with("\n  ^ number out of range: 18446744073709551616"));
}

// ============================================================================
// PARSE ERRORS
// ============================================================================

#[test]
fn missing_operand() {
    assert_fails_at("1+", "parse");
    assert_eq!(compile_error("1+"), "1+\n  ^ expected a number or '('");
}

#[test]
fn unterminated_group() {
    assert_fails_at("(1+2", "parse");
    assert_eq!(compile_error("(1+2"), "(1+2\n    ^ expected ')'");
}

#[test]
fn extra_token() {
    assert_fails_at("1 2", "parse");
    assert_eq!(compile_error("1 2"), "1 2\n  ^ extra token");
}

#[test]
fn closer_expected_at_wrong_token() {
    assert_eq!(compile_error("(1 2)"), "(1 2)\n   ^ expected ')'");
}

#[test]
fn all_malformed_inputs_rejected() {
    for (source, phase) in MALFORMED_EXPRESSIONS {
        assert_fails_at(source, phase);
    }
}

// ============================================================================
// NESTING LIMITS
// ============================================================================

#[test]
fn deep_parentheses_rejected() {
    let source = format!("{}1{}", "(".repeat(3000), ")".repeat(3000));
    assert_fails_at(&source, "parse");

    let error = compile_error(&source);
    let caret = format!("\n{}^ expression nests too deeply", " ".repeat(exprc::parser::MAX_NESTING));
    assert!(error.ends_with(&caret), "caret not at the first group past the limit");
}

#[test]
fn long_sign_run_rejected() {
    let source = format!("{}1", "-".repeat(50_000));
    assert_fails_at(&source, "parse");
    assert_error_contains(&compile_error(&source), "expression nests too deeply");
}

#[test]
fn long_operator_chain_rejected() {
    let source = format!("{}1", "1+".repeat(100_000));
    assert_fails_at(&source, "parse");
    assert_error_contains(&compile_error(&source), "expression nests too deeply");
}

// ============================================================================
// CARET RENDERING
// ============================================================================

#[test]
fn embedded_newline_echoed_on_one_line() {
    assert_eq!(compile_error("1+\n@"), "1+ @\n   ^ invalid token");
    assert_eq!(compile_error("1 +\n"), "1 + \n    ^ expected a number or '('");
}
