use super::{Address, Number};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack values
///
/// `Empty` is what a load from the slot just past the top yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Val {
    Number(Number),
    Symbol(char),
    Block(Address),
    Empty,
}

impl Val {
    pub fn number(self) -> Result<Number> {
        match self {
            Val::Number(n) => Ok(n),
            _ => Err(error!(TypeError)),
        }
    }
    pub fn symbol(self) -> Result<char> {
        match self {
            Val::Symbol(s) => Ok(s),
            _ => Err(error!(TypeError)),
        }
    }
    pub fn block(self) -> Result<Address> {
        match self {
            Val::Block(addr) => Ok(addr),
            _ => Err(error!(TypeError)),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            Number(n) => write!(f, "{}", n),
            Symbol(s) => write!(f, "{}", s),
            Block(addr) => write!(f, "{{{}}}", addr),
            Empty => write!(f, "_"),
        }
    }
}
