use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            cursor::Cursor,
        },
    },
};

/// Parses a conditional expression.
///
/// Grammar:
/// ```text
///     conditional := "[" expression "]" "?" "{" expression "}" ":" "{" expression "}"
/// ```
/// Every bracket and brace is mandatory. The node takes the position of its
/// condition.
///
/// # Parameters
/// - `cursor`: Cursor positioned at `[`.
///
/// # Returns
/// An `Expr::Conditional` node.
///
/// # Errors
/// - `UnexpectedToken` on the first missing or mismatched delimiter.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_conditional(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    cursor.expect(&Token::LBracket, "'['")?;
    let condition = parse_expression(cursor)?;
    cursor.expect(&Token::RBracket, "']'")?;
    cursor.expect(&Token::Question, "'?'")?;

    let if_branch = parse_braced(cursor)?;
    cursor.expect(&Token::Colon, "':'")?;
    let else_branch = parse_braced(cursor)?;

    let pos = condition.pos();
    Ok(Expr::Conditional { condition: Box::new(condition),
                           if_branch: Box::new(if_branch),
                           else_branch: Box::new(else_branch),
                           pos })
}

/// Parses `"{" expression "}"`.
pub(in crate::interpreter::parser) fn parse_braced(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    cursor.expect(&Token::LBrace, "'{'")?;
    let expr = parse_expression(cursor)?;
    cursor.expect(&Token::RBrace, "'}'")?;
    Ok(expr)
}
