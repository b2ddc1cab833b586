use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_binary, conditional::parse_conditional, cursor::Cursor,
            unary::{parse_identifier_or_call, parse_negation},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// The grammar is LL(1): every construct is recognized by its first token,
/// and grouping is always explicit, so no precedence handling is needed.
///
/// Grammar:
/// ```text
///     expression := binary          "(" ...
///                 | NUMBER
///                 | conditional     "[" ...
///                 | negation        "-" ...
///                 | identifier_or_call
/// ```
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - [`ParseError::NothingParsed`] if no expression starts with the next
///   token.
/// - [`ParseError::UnexpectedEndOfInput`] if the tokens run out.
/// - Propagates any errors from the sub-expression parsers.
pub fn parse_expression(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let (token, pos) = cursor.peek()?;

    match token {
        Token::LParen => parse_binary(cursor),
        Token::Number(value) => {
            cursor.advance()?;
            Ok(Expr::Constant { value: *value,
                                pos:   *pos, })
        },
        Token::LBracket => parse_conditional(cursor),
        Token::Operator(_) => parse_negation(cursor),
        Token::Identifier(_) => parse_identifier_or_call(cursor),
        tok => Err(ParseError::NothingParsed { token: tok.to_string(),
                                               pos:   *pos, }),
    }
}
