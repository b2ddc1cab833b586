use crate::ast::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// What the grammar required at this point.
        expected: &'static str,
        /// The token encountered.
        token:    String,
        /// Position of the offending token.
        pos:      Position,
    },
    /// Reached the end of input while more tokens were required.
    UnexpectedEndOfInput {
        /// Position of the last token, if there was any.
        pos: Option<Position>,
    },
    /// An operator other than `-` was used in unary position.
    UnsupportedUnaryOperator {
        /// The operator character.
        op:  char,
        /// Position of the operator.
        pos: Position,
    },
    /// No expression starts with the encountered token.
    NothingParsed {
        /// The token encountered.
        token: String,
        /// Position of the token.
        pos:   Position,
    },
    /// Found tokens other than line ends after the top-level expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// Position of the token.
        pos:   Position,
    },
    /// An integer literal does not fit in a 64-bit signed integer.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// Position of the literal.
        pos:     Position,
    },
}

impl ParseError {
    /// Returns the position the error refers to, when one is known.
    #[must_use]
    pub const fn pos(&self) -> Option<Position> {
        match self {
            Self::UnexpectedToken { pos, .. }
            | Self::UnsupportedUnaryOperator { pos, .. }
            | Self::NothingParsed { pos, .. }
            | Self::UnexpectedTrailingTokens { pos, .. }
            | Self::LiteralTooLarge { pos, .. } => Some(*pos),
            Self::UnexpectedEndOfInput { pos } => *pos,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, token, pos } => {
                write!(f, "Error at {pos}: Expected {expected}, found {token}.")
            },

            Self::UnexpectedEndOfInput { pos: Some(pos) } => {
                write!(f, "Error after {pos}: Unexpected end of input.")
            },
            Self::UnexpectedEndOfInput { pos: None } => write!(f, "Error: Empty input."),

            Self::UnsupportedUnaryOperator { op, pos } => {
                write!(f, "Error at {pos}: Unsupported unary operation '{op}'.")
            },

            Self::NothingParsed { token, pos } => {
                write!(f, "Error at {pos}: No expression starts with {token}.")
            },

            Self::UnexpectedTrailingTokens { token, pos } => write!(f,
                                                                    "Error at {pos}: Extra tokens after expression, starting with {token}."),

            Self::LiteralTooLarge { literal, pos } => {
                write!(f, "Error at {pos}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
