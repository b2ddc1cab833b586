use crate::{
    ast::Position,
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::core::ParseResult,
    },
};

/// A position in a token slice.
///
/// The cursor is `Copy`: taking a checkpoint copies it, and restoring assigns
/// the copy back. Lookahead functions take a cursor by value and leave the
/// caller's cursor untouched.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    tokens: &'a [Spanned],
    index:  usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Spanned]) -> Self {
        Self { tokens, index: 0 }
    }

    /// Returns the next token without consuming it.
    ///
    /// # Errors
    /// [`ParseError::UnexpectedEndOfInput`] if no tokens remain.
    pub fn peek(&self) -> ParseResult<&'a Spanned> {
        self.tokens.get(self.index).ok_or_else(|| self.end_of_input())
    }

    /// Consumes and returns the next token.
    ///
    /// # Errors
    /// [`ParseError::UnexpectedEndOfInput`] if no tokens remain.
    pub fn advance(&mut self) -> ParseResult<&'a Spanned> {
        let token = self.peek()?;
        self.index += 1;
        Ok(token)
    }

    /// Consumes the next token if it equals `expected`.
    ///
    /// # Parameters
    /// - `expected`: The required token.
    /// - `description`: How the requirement reads in error messages.
    ///
    /// # Returns
    /// The position of the consumed token.
    ///
    /// # Errors
    /// - [`ParseError::UnexpectedToken`] if a different token is next.
    /// - [`ParseError::UnexpectedEndOfInput`] if no tokens remain.
    pub fn expect(&mut self, expected: &Token, description: &'static str) -> ParseResult<Position> {
        let (token, pos) = self.advance()?;
        if token == expected {
            Ok(*pos)
        } else {
            Err(ParseError::UnexpectedToken { expected: description,
                                              token:    token.to_string(),
                                              pos:      *pos, })
        }
    }

    /// Returns `true` once every token has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    /// Saves the current position.
    #[must_use]
    pub const fn checkpoint(&self) -> Self {
        *self
    }

    /// Returns to a position saved with [`Cursor::checkpoint`].
    pub fn restore(&mut self, checkpoint: Self) {
        *self = checkpoint;
    }

    fn end_of_input(&self) -> ParseError {
        ParseError::UnexpectedEndOfInput { pos: self.tokens.last().map(|(_, pos)| *pos) }
    }
}
