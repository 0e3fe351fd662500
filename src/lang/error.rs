use super::{Column, LineNumber};
use std::rc::Rc;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    column: Column,
    message: String,
    source: Option<Rc<str>>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: 0..0,
            message: String::new(),
            source: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    /// Source text of the line the error happened in, when known.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The first line number given wins; later calls are ignored.
    pub fn in_line_number(mut self, line: LineNumber) -> Error {
        if self.line_number.is_none() {
            self.line_number = line;
        }
        self
    }

    /// The innermost column wins; later calls are ignored.
    pub fn in_column(mut self, column: &Column) -> Error {
        if self.column == (0..0) {
            self.column = column.clone();
        }
        self
    }

    pub fn message(mut self, message: &str) -> Error {
        self.message = message.to_string();
        self
    }

    pub fn in_source(mut self, source: &Rc<str>) -> Error {
        if self.source.is_none() {
            self.source = Some(source.clone());
        }
        self
    }

    /// Text of the second line of the report, without the prefix.
    pub fn detail(&self) -> String {
        let mut s = String::from(self.code.as_str());
        if let Some(line_number) = self.line_number {
            s.push_str(&format!(" IN {}", line_number));
        }
        if !self.message.is_empty() {
            s.push_str(&format!("; {}", self.message));
        }
        s
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    UnterminatedString,
    UnexpectedCharacter,
    SyntaxError,
    DirectStatementInFile,
    TypeMismatch,
    DivisionByZero,
    IllegalFunctionCall,
    UndefinedLine,
    NextWithoutFor,
    ReturnWithoutGosub,
    OutOfData,
    CantContinue,
    FileNotFound,
    IoError,
    Overflow,
    SubscriptOutOfRange,
    OutOfMemory,
    InternalError,
}

/// Error taxonomy. Each kind has a fixed prefix shown to the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorKind {
    Scan,
    Parse,
    RuntimeExpression,
    RuntimeStatement,
    ValueOutOfRange,
    Resource,
    Internal,
}

impl ErrorKind {
    pub fn prefix(&self) -> &'static str {
        use ErrorKind::*;
        match self {
            Scan | Parse => "WHAT?",
            RuntimeExpression | RuntimeStatement | ValueOutOfRange => "HOW?",
            Resource => "SORRY",
            Internal => "PROGRAM ERROR",
        }
    }
}

impl ErrorCode {
    pub fn kind(&self) -> ErrorKind {
        use ErrorCode::*;
        match self {
            UnterminatedString | UnexpectedCharacter => ErrorKind::Scan,
            SyntaxError | DirectStatementInFile => ErrorKind::Parse,
            TypeMismatch | DivisionByZero | IllegalFunctionCall => ErrorKind::RuntimeExpression,
            UndefinedLine | NextWithoutFor | ReturnWithoutGosub | OutOfData | CantContinue
            | FileNotFound | IoError => ErrorKind::RuntimeStatement,
            Overflow | SubscriptOutOfRange => ErrorKind::ValueOutOfRange,
            OutOfMemory => ErrorKind::Resource,
            InternalError => ErrorKind::Internal,
        }
    }

    fn as_str(&self) -> &'static str {
        use ErrorCode::*;
        match self {
            UnterminatedString => "UNTERMINATED STRING",
            UnexpectedCharacter => "UNEXPECTED CHARACTER",
            SyntaxError => "SYNTAX ERROR",
            DirectStatementInFile => "DIRECT STATEMENT IN FILE",
            TypeMismatch => "TYPE MISMATCH",
            DivisionByZero => "DIVISION BY ZERO",
            IllegalFunctionCall => "ILLEGAL FUNCTION CALL",
            UndefinedLine => "UNDEFINED LINE",
            NextWithoutFor => "NEXT WITHOUT FOR",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            OutOfData => "OUT OF DATA",
            CantContinue => "CAN'T CONTINUE",
            FileNotFound => "FILE NOT FOUND",
            IoError => "I/O ERROR",
            Overflow => "OVERFLOW",
            SubscriptOutOfRange => "SUBSCRIPT OUT OF RANGE",
            OutOfMemory => "OUT OF MEMORY",
            InternalError => "INTERNAL ERROR",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Error {{ {:?} {} ({}..{}) }}",
            self.code,
            self.detail(),
            self.column.start,
            self.column.end
        )
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}\n{}", self.kind().prefix(), self.detail())
    }
}

impl std::error::Error for Error {}
