/*!
# Rust Language Module

This Rust module decodes program text into instruction tokens
and defines the errors reported while running them.

*/

#[macro_use]
mod error;
mod lex;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use token::Token;
