/// ## Instruction tokens
///
/// Every character of a program is exactly one token. Characters
/// outside the instruction set decode to `Unknown` and do nothing.

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    Unknown(char),
    /// `0`-`9`
    Digit(u8),
    /// `A`-`Z`
    Symbol(char),
    /// `{` pushes a block and skips its body.
    BlockOpen,
    /// `}` returns to the caller or halts.
    Return,
    Word(Word),
}

/// The lowercase instructions.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Add,
    Call,
    Divide,
    Swap,
    Define,
    Halt,
    BranchCall,
    Jump,
    BranchJump,
    Multiply,
    Drop,
    Record,
    Subtract,
    Exchange,
    Duplicate,
    Load,
    Store,
    Mark,
}

impl Token {
    pub fn is_block_open(&self) -> bool {
        *self == Token::BlockOpen
    }
    pub fn is_block_close(&self) -> bool {
        *self == Token::Return
    }
}

impl From<char> for Token {
    fn from(ch: char) -> Token {
        match ch {
            '0'..='9' => Token::Digit(ch as u8 - b'0'),
            'A'..='Z' => Token::Symbol(ch),
            '{' => Token::BlockOpen,
            '}' => Token::Return,
            _ => match Word::from_char(ch) {
                Some(word) => Token::Word(word),
                None => Token::Unknown(ch),
            },
        }
    }
}

impl Word {
    pub fn from_char(ch: char) -> Option<Word> {
        use Word::*;
        Some(match ch {
            'a' => Add,
            'c' => Call,
            'd' => Divide,
            'e' => Swap,
            'f' => Define,
            'h' => Halt,
            'i' => BranchCall,
            'j' => Jump,
            'k' => BranchJump,
            'm' => Multiply,
            'q' => Drop,
            'r' => Record,
            's' => Subtract,
            't' => Exchange,
            'w' => Duplicate,
            'x' => Load,
            'y' => Store,
            'z' => Mark,
            _ => return None,
        })
    }

    pub fn to_char(self) -> char {
        use Word::*;
        match self {
            Add => 'a',
            Call => 'c',
            Divide => 'd',
            Swap => 'e',
            Define => 'f',
            Halt => 'h',
            BranchCall => 'i',
            Jump => 'j',
            BranchJump => 'k',
            Multiply => 'm',
            Drop => 'q',
            Record => 'r',
            Subtract => 's',
            Exchange => 't',
            Duplicate => 'w',
            Load => 'x',
            Store => 'y',
            Mark => 'z',
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(ch) => write!(f, "{}", ch),
            Digit(n) => write!(f, "{}", n),
            Symbol(ch) => write!(f, "{}", ch),
            BlockOpen => write!(f, "{{"),
            Return => write!(f, "}}"),
            Word(w) => write!(f, "{}", w),
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
