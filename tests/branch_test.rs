mod common;
use common::*;

const BRANCHES: &str = "{1r}Tf{0r}Ff";

#[test]
fn test_branch_call_selects() {
    assert_eq!(exec(&format!("{}5TFi", BRANCHES)), "1");
    assert_eq!(exec(&format!("{}0TFi", BRANCHES)), "0");
    assert_eq!(exec(&format!("{}02sTFi", BRANCHES)), "1");
    assert_eq!(exec(&format!("{}5TFi0TFi", BRANCHES)), "1 0");
}

#[test]
fn test_branch_call_returns() {
    assert_eq!(exec(&format!("{}1TFi9r", BRANCHES)), "1 9");
}

#[test]
fn test_branch_call_rejects_numbers() {
    assert_eq!(exec("{1r}Tf1T3i"), "\n?TYPE ERROR AT 9");
    assert_eq!(exec("{1r}TfT1Ti"), "\n?TYPE ERROR AT 9");
}

#[test]
fn test_branch_call_unselected_may_be_undefined() {
    assert_eq!(exec("{1r}Tf1TZi"), "1");
    assert_eq!(exec("{1r}Tf0TZi"), "\n?UNKNOWN SUBROUTINE AT 9");
}

#[test]
fn test_branch_jump_by_name_is_tail_jump() {
    assert_eq!(exec("{1r}Tf 1T0k 9r"), "1");
}

#[test]
fn test_branch_jump_relative() {
    assert_eq!(exec("0T3k9r8r"), "8");
    assert_eq!(exec("13Tk9r8r"), "8");
}

#[test]
fn test_countdown_loop() {
    assert_eq!(exec("3r1sw08s1k"), "3 2 1");
}

#[test]
fn test_branch_jump_type_errors() {
    assert_eq!(exec("1{}0k"), "\n?TYPE ERROR AT 4");
    assert_eq!(exec("AT0k"), "\n?TYPE ERROR AT 3");
}
