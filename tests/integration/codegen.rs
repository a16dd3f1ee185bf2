//! Code generation integration tests
//!
//! Verifies the shape of the emitted assembly.

use crate::common::*;

#[test]
fn program_has_entry_point_and_ret() {
    let asm = compile_success("1");

    assert!(asm.starts_with("  .global main\nmain:\n"));
    assert!(asm.ends_with("  ret\n"));
    assert_asm_order(&asm, "main:", "ret");
}

#[test]
fn literal_needs_no_stack() {
    let asm = compile_success("42");

    assert_eq!(extract_instructions(&asm), vec!["mov $42, %rax", "ret"]);
}

#[test]
fn right_operand_is_pushed_first() {
    let asm = compile_success("10-4");

    assert_eq!(
        extract_instructions(&asm),
        vec![
            "mov $4, %rax",
            "push %rax",
            "mov $10, %rax",
            "pop %rdi",
            "sub %rdi, %rax",
            "ret",
        ]
    );
}

#[test]
fn division_uses_signed_divide() {
    let asm = compile_success("9/3");

    assert_asm_order(&asm, "pop %rdi", "cqo");
    assert_asm_order(&asm, "cqo", "idiv %rdi");
}

#[test]
fn every_operator_maps_to_its_instruction() {
    assert_asm_contains(&compile_success("1+2"), "add %rdi, %rax");
    assert_asm_contains(&compile_success("1-2"), "sub %rdi, %rax");
    assert_asm_contains(&compile_success("1*2"), "imul %rdi, %rax");
    assert_asm_contains(&compile_success("1/2"), "idiv %rdi");
    assert_asm_contains(&compile_success("-1"), "neg %rax");
}

#[test]
fn pushes_match_pops() {
    for source in [
        "1",
        "1+2",
        "1+2*3-4/5",
        "((1+2)*(3+4))/((5-6)*(7-8))",
        "-(-(-(1+2)))*3",
    ] {
        let asm = compile_success(source);
        assert_stack_balanced(&asm);
        assert_eq!(count_pattern(&asm, "push"), count_pattern(&asm, "pop"));
    }
}

#[test]
fn one_push_per_binary_operator() {
    let asm = compile_success("1+2+3+4");
    assert_eq!(count_pattern(&asm, "push %rax"), 3);
}

#[test]
fn output_is_deterministic() {
    let source = "(1+2)*-3/4-5";
    assert_eq!(compile_success(source), compile_success(source));
}

#[test]
fn whitespace_does_not_change_output() {
    assert_eq!(compile_success("1 + 2"), compile_success("1+2"));
}
