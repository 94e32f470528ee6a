use crate::mach::Address;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    position: Option<Address>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $pos:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_position($pos)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $pos:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_position($pos)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            position: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn position(&self) -> Option<Address> {
        self.position
    }

    pub fn in_position(&self, position: Address) -> Error {
        debug_assert!(self.position.is_none());
        Error {
            code: self.code,
            position: Some(position),
            message: self.message.clone(),
        }
    }

    /// Attach a position unless the error already carries one.
    pub fn at(self, position: Address) -> Error {
        match self.position {
            Some(_) => self,
            None => self.in_position(position),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            position: self.position,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Break = 1,
    TypeError = 2,
    SubroutineError = 3,
    StateError = 4,
    DivisionByZero = 5,
    Overflow = 6,
    OutOfMemory = 7,
    InternalError = 51,
    FileNotFound = 53,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = match self {
            Break => "BREAK",
            TypeError => "TYPE ERROR",
            SubroutineError => "UNKNOWN SUBROUTINE",
            StateError => "STATE ERROR",
            DivisionByZero => "DIVISION BY ZERO",
            Overflow => "OVERFLOW",
            OutOfMemory => "OUT OF MEMORY",
            InternalError => "INTERNAL ERROR",
            FileNotFound => "FILE NOT FOUND",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)?;
        if let Some(position) = self.position {
            write!(f, " AT {}", position)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
