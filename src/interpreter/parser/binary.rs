use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            cursor::Cursor,
        },
    },
};

/// Parses a binary expression.
///
/// Grammar: `binary := "(" expression OPERATOR expression ")"`
///
/// The node takes the position of its left operand.
///
/// # Parameters
/// - `cursor`: Cursor positioned at `(`.
///
/// # Returns
/// An `Expr::Binary` node.
///
/// # Errors
/// - `UnexpectedToken` if the parentheses or the operator are missing.
/// - Propagates any errors from operand parsing.
pub fn parse_binary(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    cursor.expect(&Token::LParen, "'('")?;
    let left = parse_expression(cursor)?;

    let op = match cursor.advance()? {
        (Token::Operator(op), _) => *op,
        (tok, pos) => {
            return Err(ParseError::UnexpectedToken { expected: "an operator",
                                                     token:    tok.to_string(),
                                                     pos:      *pos, });
        },
    };

    let right = parse_expression(cursor)?;
    cursor.expect(&Token::RParen, "')'")?;

    let pos = left.pos();
    Ok(Expr::Binary { op,
                      left: Box::new(left),
                      right: Box::new(right),
                      pos })
}
