//! # SD
//!
//! A tiny stack machine driven by single-character opcodes.
//!
//! Digits push numbers, capital letters push symbols, `{...}` pushes a
//! block without running it, and lowercase letters operate on the stack.
//! The only result of a program is the list of numbers it records.
//!
//! ```
//! // Define A as a block that records 5, call it, then halt.
//! assert_eq!(sd::run("{5r}Af Ac h").unwrap(), vec![5]);
//! ```
//!
//! Run `sd program.sd` to execute a file, `sd -` to read the program
//! from standard input, or `sd` alone for an interactive prompt.

#[path = "doc/instructions.rs"]
#[allow(non_snake_case)]
pub mod _Instructions;

pub mod lang;
pub mod mach;
pub mod term;

use lang::Error;
use mach::{Event, Number, Runtime};

/// Runs `code` to completion and returns the recorded numbers.
pub fn run(code: &str) -> Result<Vec<Number>, Error> {
    let mut runtime = Runtime::new(code);
    loop {
        match runtime.execute(usize::max_value()) {
            Event::Stopped => return Ok(runtime.take_output()),
            Event::Error(error) => return Err(error),
            Event::Running | Event::Trace(..) => {}
        }
    }
}
