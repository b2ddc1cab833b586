use crate::{
    ast::Position,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, cursor::Cursor},
    },
};

/// Parses a list of items up to and including a closing token.
///
/// Shared by parameter lists and call arguments. Items are separated by
/// optional commas: a single comma after any item is skipped, so `f(a,b)`,
/// `f(a,b,)` and `f(a b)` all read the same. A comma before the first item
/// is not accepted. An immediately encountered closing token produces an
/// empty list.
///
/// Grammar (simplified): `list := (item ","?)* closing`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
///
/// # Returns
/// The parsed items in source order.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or the tokens run out
/// before the closing token.
pub(in crate::interpreter::parser) fn parse_list<T>(cursor: &mut Cursor<'_>,
                                                    parse_item: impl Fn(&mut Cursor<'_>) -> ParseResult<T>,
                                                    closing: &Token)
                                                    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();

    while cursor.peek()?.0 != *closing {
        items.push(parse_item(cursor)?);
        if let (Token::Comma, _) = cursor.peek()? {
            cursor.advance()?;
        }
    }
    cursor.advance()?;

    Ok(items)
}

/// Parses a plain identifier and returns its name and position.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier(cursor: &mut Cursor<'_>)
                                                       -> ParseResult<(String, Position)> {
    match cursor.advance()? {
        (Token::Identifier(name), pos) => Ok((name.clone(), *pos)),
        (tok, pos) => Err(ParseError::UnexpectedToken { expected: "an identifier",
                                                        token:    tok.to_string(),
                                                        pos:      *pos, }),
    }
}

/// Parses a function or parameter name, discarding its position.
pub(in crate::interpreter::parser) fn parse_parameter(cursor: &mut Cursor<'_>) -> ParseResult<String> {
    parse_identifier(cursor).map(|(name, _)| name)
}
