/*!
## Rust Machine Module

This Rust module is the stack machine that runs decoded programs.

*/

pub type Address = usize;
pub type Number = i64;

mod operation;
mod program;
mod runtime;
mod stack;
mod val;

pub use operation::Operation;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;

#[cfg(test)]
mod tests;
