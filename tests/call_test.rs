mod common;
use common::*;
use sd::lang::ErrorCode;

#[test]
fn test_call_and_return() {
    assert_eq!(exec("{5r}Af Ac h"), "5");
    assert_eq!(exec("{5r}AfAc7r"), "5 7");
}

#[test]
fn test_nested_calls() {
    assert_eq!(exec("{2r}Bf{1rBc3r}AfAc"), "1 2 3");
}

#[test]
fn test_repeated_calls() {
    assert_eq!(exec("{1a}Af0AcAcAcr"), "3");
}

#[test]
fn test_redefinition_overwrites() {
    assert_eq!(exec("{1r}Af{2r}AfAc"), "2");
}

#[test]
fn test_definition_order_is_execution_order() {
    assert_eq!(exec("Ac{1r}Af"), "\n?UNKNOWN SUBROUTINE AT 1");
    assert_eq!(exec("{Bc}Af{7r}BfAc"), "7");
}

#[test]
fn test_jump_by_name_pushes_no_return() {
    assert_eq!(exec("{5r}Af Aj 7r"), "5");
}

#[test]
fn test_relative_jump_skips_default_advance() {
    assert_eq!(exec("3j1r2r"), "2");
    assert_eq!(exec("3j9r"), "");
}

#[test]
fn test_jump_type_error() {
    assert_eq!(exec("{}j"), "\n?TYPE ERROR AT 2");
}

#[test]
fn test_call_requires_symbol() {
    assert_eq!(exec("1c"), "\n?TYPE ERROR AT 1");
}

#[test]
fn test_define_type_errors() {
    assert_eq!(exec("A{}f"), "\n?TYPE ERROR AT 3");
    assert_eq!(exec("{}1f"), "\n?TYPE ERROR AT 3");
    assert_eq!(exec("1Af"), "\n?TYPE ERROR AT 2");
}

#[test]
fn test_unknown_subroutine_keeps_prior_output() {
    let err = sd::run("1rAc2r").unwrap_err();
    assert_eq!(err.code(), ErrorCode::SubroutineError);
    assert_eq!(err.position(), Some(3));
    assert_eq!(exec("1rAc2r"), "1\n?UNKNOWN SUBROUTINE AT 3");
    assert_eq!(exec("1rZj2r"), "1\n?UNKNOWN SUBROUTINE AT 3");
}

#[test]
fn test_infinite_loop() {
    assert_eq!(exec("{Aj}AfAj"), "\n5000 Execution cycles exceeded.");
}
