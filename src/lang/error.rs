use super::LineNumber;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: 0,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn is_direct(&self) -> bool {
        self.line_number == 0
    }

    pub fn is_break(&self) -> bool {
        self.code == ErrorCode::Break
    }

    /// Attaches a line number unless one is already present.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number != 0 {
            return self;
        }
        Error {
            code: self.code,
            line_number: line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Syntax = 1,
    DivisionByZero = 2,
    ArrayIndexOutOfRange = 3,
    BadParameter = 4,
    ControlStackOverflow = 5,
    NothingToResume = 6,
    UnresolvedLabel = 7,
    NotInRunMode = 8,
    ProgramAreaOverflow = 9,
    ProgramEmpty = 10,
    NoMatchingLoop = 11,
    NoMatchingEndif = 12,
    ExpressionTooDeep = 13,
    LineTooLong = 14,
    UnexpectedNext = 20,
    UnexpectedReturn = 21,
    UnexpectedLoop = 22,
    UnexpectedExit = 23,
    UnexpectedContinue = 24,
    UnexpectedRead = 25,
    Break = 255,
}

impl ErrorCode {
    fn is_unexpected(self) -> bool {
        (self as u8) >= (ErrorCode::UnexpectedNext as u8) && self != ErrorCode::Break
    }

    fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            Syntax => "Syntax",
            DivisionByZero => "Division by 0",
            ArrayIndexOutOfRange => "Array index over",
            BadParameter => "Parameter",
            ControlStackOverflow => "Stack overflow",
            NothingToResume => "Can't resume",
            UnresolvedLabel => "Label not found",
            NotInRunMode => "Run mode",
            ProgramAreaOverflow => "PG area overflow",
            ProgramEmpty => "PG empty",
            NoMatchingLoop => "Loop not found",
            NoMatchingEndif => "Endif not found",
            ExpressionTooDeep => "Expression too deep",
            LineTooLong => "Line too long",
            UnexpectedNext => "Next",
            UnexpectedReturn => "Return",
            UnexpectedLoop => "Loop",
            UnexpectedExit => "Exit",
            UnexpectedContinue => "Continue",
            UnexpectedRead => "Read",
            Break => "Break",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.code.is_unexpected() {
            write!(f, "Unexpected ")?;
        }
        write!(f, "{}", self.code.as_str())?;
        if !self.is_break() {
            write!(f, " error")?;
        }
        if self.line_number != 0 {
            write!(f, " in {}", self.line_number)?;
        }
        Ok(())
    }
}
