use super::Address;
use crate::lang::{lex, Token};

/// ## Decoded program text

#[derive(Debug, Default)]
pub struct Program {
    tokens: Vec<Token>,
}

impl Program {
    pub fn new(code: &str) -> Program {
        Program { tokens: lex(code) }
    }
    pub fn len(&self) -> usize {
        self.tokens.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
    pub fn get(&self, addr: Address) -> Option<Token> {
        self.tokens.get(addr).copied()
    }

    /// Finds the `}` balancing the `{` at `open`, counting nested blocks.
    /// Returns `None` when the program ends first.
    pub fn skip(&self, open: Address) -> Option<Address> {
        debug_assert!(self.tokens.get(open).map_or(false, Token::is_block_open));
        let mut level = 1;
        for (addr, token) in self.tokens.iter().enumerate().skip(open + 1) {
            if token.is_block_open() {
                level += 1;
            } else if token.is_block_close() {
                level -= 1;
                if level == 0 {
                    return Some(addr);
                }
            }
        }
        None
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
