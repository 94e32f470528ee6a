use super::token::Token;

/// Decodes every character of `s` into one token.
///
/// Positions are preserved: token N is character N of the program,
/// so addresses in the machine are character offsets.
pub fn lex(s: &str) -> Vec<Token> {
    s.chars().map(Token::from).collect()
}
