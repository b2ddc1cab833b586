use std::fmt;

use logos::Logos;

use crate::{
    ast::{BinaryOperator, Position},
    error::ParseError,
};

/// Represents a lexical token in the source input.
///
/// Digits and letters never share a token: `ab12` lexes as the identifier
/// `ab` followed by the number `12`. Any character not listed here is
/// dropped without an error.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Number(i64),
    /// Identifier tokens; parameter or function names such as `x` or `fib`.
    #[regex(r"[a-zA-Z_]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// One of `+ - * / % < >`.
    #[regex(r"[-+*/%<>]", parse_operator)]
    Operator(BinaryOperator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
    /// Line feed. Terminates function definitions.
    #[token("\n")]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Operator(op) => write!(f, "'{op}'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::Question => write!(f, "'?'"),
            Self::Colon => write!(f, "':'"),
            Self::Equals => write!(f, "'='"),
            Self::Comma => write!(f, "','"),
            Self::NewLine => write!(f, "end of line"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// A token paired with its source position.
pub type Spanned = (Token, Position);

/// Failures reported by the generated lexer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// A character outside the language. Skipped by [`tokenize`].
    #[default]
    Unrecognized,
    /// A digit run that does not fit in an `i64`.
    LiteralTooLarge,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current row and the last resolved column, so byte offsets turn
/// into 1-based character columns without rescanning the line for every
/// token.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current row in the source being tokenized.
    pub row:     usize,
    /// Byte offset of the last resolved position.
    last_offset: usize,
    /// Column of the last resolved position.
    last_column: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { row:         1,
               last_offset: 0,
               last_column: 1, }
    }
}

impl LexerExtras {
    /// Resolves a byte offset on the current row into a position.
    ///
    /// Offsets never decrease: [`tokenize`] resolves each token's start or
    /// end, in source order.
    fn position(&mut self, source: &str, offset: usize) -> Position {
        self.last_column += source[self.last_offset..offset].chars().count();
        self.last_offset = offset;

        Position::new(self.row, self.last_column)
    }

    /// Moves to the row following the line feed that ends at `offset`.
    const fn next_row(&mut self, offset: usize) {
        self.row += 1;
        self.last_offset = offset;
        self.last_column = 1;
    }
}

/// Converts source text into positioned tokens.
///
/// Numbers and identifiers are positioned at the character that ended them,
/// or one past the last character when they run to the end of input. All
/// other tokens are positioned at their own character.
///
/// # Errors
/// Returns [`ParseError::LiteralTooLarge`] for a digit run that does not fit
/// in an `i64`. This is the only way tokenizing can fail: every other input,
/// including characters outside the language, tokenizes. Oversized literals
/// are rejected here rather than truncated so the program is never silently
/// changed.
///
/// # Example
/// ```
/// use parenval::{
///     ast::{BinaryOperator, Position},
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("(x+12)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::LParen, Position::new(1, 1)),
///                 (Token::Identifier("x".into()), Position::new(1, 3)),
///                 (Token::Operator(BinaryOperator::Add), Position::new(1, 3)),
///                 (Token::Number(12), Position::new(1, 6)),
///                 (Token::RParen, Position::new(1, 6))]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        match token {
            Ok(Token::NewLine) => {
                let pos = lexer.extras.position(source, span.start);
                tokens.push((Token::NewLine, pos));
                lexer.extras.next_row(span.end);
            },
            Ok(tok @ (Token::Number(_) | Token::Identifier(_))) => {
                let pos = lexer.extras.position(source, span.end);
                tokens.push((tok, pos));
            },
            Ok(tok) => {
                let pos = lexer.extras.position(source, span.start);
                tokens.push((tok, pos));
            },
            Err(LexError::LiteralTooLarge) => {
                let pos = lexer.extras.position(source, span.end);
                return Err(ParseError::LiteralTooLarge { literal: lexer.slice().to_string(),
                                                         pos });
            },
            Err(LexError::Unrecognized) => {},
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Ok(i64)`: The parsed value.
/// - `Err(LexError::LiteralTooLarge)`: The digits exceed `i64::MAX`.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::LiteralTooLarge)
}

/// Parses the operator character of the current token slice.
fn parse_operator(lex: &logos::Lexer<Token>) -> Option<BinaryOperator> {
    lex.slice().chars().next().and_then(|c| BinaryOperator::try_from(c).ok())
}
