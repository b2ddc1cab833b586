use std::fmt;

/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing
/// source text. Parse errors keep the offending token and its position even
/// though the rendered program outcome is always `SYNTAX ERROR`.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// parameters, unknown functions, arity mismatches and arithmetic faults.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::{ArithmeticFault, RuntimeError};

/// The outcome of a failed run, as seen from outside the engine.
///
/// Renders to exactly one of the result lines a program can produce:
/// `SYNTAX ERROR` for any parse failure, or the runtime error line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpreterError {
    /// The source is not a well-formed program.
    Parse(ParseError),
    /// Evaluation of a well-formed program failed.
    Runtime(RuntimeError),
}

impl InterpreterError {
    /// Returns `true` if the failure happened before evaluation started.
    #[must_use]
    pub const fn is_syntax_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<ParseError> for InterpreterError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for InterpreterError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl fmt::Display for InterpreterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(_) => write!(f, "SYNTAX ERROR"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for InterpreterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
