use std::fmt;

/// The integer operation that failed inside a binary expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticFault {
    /// Division or remainder with a zero divisor.
    DivisionByZero,
    /// The result does not fit in a 64-bit signed integer.
    Overflow,
}

impl fmt::Display for ArithmeticFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::Overflow => write!(f, "integer overflow"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Each variant renders to one fixed result line ending in `:<row>`.
pub enum RuntimeError {
    /// An identifier is not a parameter of the function being evaluated.
    ParameterNotFound {
        /// The name of the identifier.
        name: String,
        /// The source row of the identifier.
        row:  usize,
    },
    /// A call names a function that was never defined.
    FunctionNotFound {
        /// The name of the function.
        name: String,
        /// The source row of the call.
        row:  usize,
    },
    /// A call supplies a different number of arguments than the function
    /// declares.
    ArgumentNumberMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source row of the call.
        row:      usize,
    },
    /// The operator of a binary expression failed.
    Arithmetic {
        /// Canonical rendering of the failing binary expression.
        expression: String,
        /// What went wrong.
        fault:      ArithmeticFault,
        /// The source row of the binary expression.
        row:        usize,
    },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParameterNotFound { name, row } => write!(f, "PARAMETER NOT FOUND {name}:{row}"),
            Self::FunctionNotFound { name, row } => write!(f, "FUNCTION NOT FOUND {name}:{row}"),
            Self::ArgumentNumberMismatch { name, row, .. } => {
                write!(f, "ARGUMENT NUMBER MISMATCH {name}:{row}")
            },
            Self::Arithmetic { expression, row, .. } => write!(f, "RUNTIME ERROR {expression}:{row}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
