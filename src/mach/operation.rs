use super::{Number, Val};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        match l.checked_add(r) {
            Some(n) => Ok(Val::Number(n)),
            None => Err(error!(Overflow)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        match l.checked_sub(r) {
            Some(n) => Ok(Val::Number(n)),
            None => Err(error!(Overflow)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        match l.checked_mul(r) {
            Some(n) => Ok(Val::Number(n)),
            None => Err(error!(Overflow)),
        }
    }

    /// Floor division: the quotient rounds toward negative infinity.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        if r == 0 {
            return Err(error!(DivisionByZero));
        }
        match l.checked_div(r) {
            Some(q) => {
                if l % r != 0 && (l < 0) != (r < 0) {
                    Ok(Val::Number(q - 1))
                } else {
                    Ok(Val::Number(q))
                }
            }
            None => Err(error!(Overflow)),
        }
    }

    fn numbers(lhs: Val, rhs: Val) -> Result<(Number, Number)> {
        Ok((lhs.number()?, rhs.number()?))
    }
}
