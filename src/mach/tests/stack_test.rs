use crate::lang::ErrorCode;
use crate::mach::Stack;

#[test]
fn test_underflow_is_state_error() {
    let mut stack: Stack<i64> = Stack::new("FULL");
    assert_eq!(stack.pop().unwrap_err().code(), ErrorCode::StateError);
    assert_eq!(stack.peek().unwrap_err().code(), ErrorCode::StateError);
}

#[test]
fn test_inclusive_boundary() {
    let mut stack: Stack<i64> = Stack::new("FULL");
    stack.push(7).unwrap();
    stack.push(8).unwrap();
    assert_eq!(stack.get_inclusive(1), Ok(Some(&8)));
    assert_eq!(stack.get_inclusive(2), Ok(None));
    assert!(stack.get_inclusive(3).is_err());
    stack.set(2, 9).unwrap();
    assert_eq!(stack.len(), 3);
    stack.set(0, 1).unwrap();
    assert_eq!(stack.get(0), Some(&1));
    assert_eq!(stack.set(4, 0).unwrap_err().code(), ErrorCode::StateError);
}

#[test]
fn test_overflow_is_out_of_memory() {
    let mut stack: Stack<u8> = Stack::new("FULL");
    let mut result = Ok(());
    for _ in 0..=u16::max_value() as usize + 1 {
        result = stack.push(0);
        if result.is_err() {
            break;
        }
    }
    let err = result.unwrap_err();
    assert_eq!(err.code(), ErrorCode::OutOfMemory);
    assert_eq!(err.to_string(), "OUT OF MEMORY; FULL");
}
