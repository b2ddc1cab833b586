use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            cursor::Cursor,
            utils::{parse_identifier, parse_list},
        },
    },
};

/// Parses a unary negation.
///
/// Only `-` is a unary operator. It applies either to an integer literal or
/// to an identifier-or-call; anything else after it is a syntax error, so
/// `-(1+2)` and `--1` are rejected.
///
/// Grammar: `negation := "-" (NUMBER | identifier_or_call)`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the operator.
///
/// # Returns
/// An `Expr::Negate` node positioned at the `-`.
///
/// # Errors
/// - [`ParseError::UnsupportedUnaryOperator`] for any operator other than `-`.
/// - `UnexpectedToken` if the operand is neither a number nor an identifier.
pub fn parse_negation(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let pos = match cursor.advance()? {
        (Token::Operator(BinaryOperator::Sub), pos) => *pos,
        (Token::Operator(op), pos) => {
            return Err(ParseError::UnsupportedUnaryOperator { op:  op.symbol(),
                                                              pos: *pos, });
        },
        (tok, pos) => {
            return Err(ParseError::UnexpectedToken { expected: "'-'",
                                                     token:    tok.to_string(),
                                                     pos:      *pos, });
        },
    };

    let operand = match cursor.peek()? {
        (Token::Number(value), number_pos) => {
            cursor.advance()?;
            Expr::Constant { value: *value,
                             pos:   *number_pos, }
        },
        (Token::Identifier(_), _) => parse_identifier_or_call(cursor)?,
        (tok, pos) => {
            return Err(ParseError::UnexpectedToken { expected: "a number or an identifier after '-'",
                                                     token:    tok.to_string(),
                                                     pos:      *pos, });
        },
    };

    Ok(Expr::Negate { expr: Box::new(operand),
                      pos })
}

/// Parses a parameter reference or a function call.
///
/// An identifier directly followed by `(` starts a call whose arguments are
/// parsed with [`parse_list`]; otherwise the identifier is a parameter
/// reference. Some token must follow the identifier, so a program cannot end
/// on a bare identifier.
///
/// Grammar: `identifier_or_call := IDENTIFIER ("(" expression* ")")?`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the identifier.
///
/// # Returns
/// An `Expr::Call` or `Expr::Identifier` node positioned at the identifier.
///
/// # Errors
/// - [`ParseError::UnexpectedEndOfInput`] if the identifier is the last
///   token.
/// - Propagates any errors from argument parsing.
pub fn parse_identifier_or_call(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let (name, pos) = parse_identifier(cursor)?;

    if let (Token::LParen, _) = cursor.peek()? {
        cursor.advance()?;
        let arguments = parse_list(cursor, parse_expression, &Token::RParen)?;
        return Ok(Expr::Call { name, arguments, pos });
    }

    Ok(Expr::Identifier { name, pos })
}
