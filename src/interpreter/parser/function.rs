use crate::{
    ast::{FunctionDef, FunctionTable},
    interpreter::{
        lexer::Token,
        parser::{
            conditional::parse_braced,
            core::ParseResult,
            cursor::Cursor,
            utils::{parse_list, parse_parameter},
        },
    },
};

/// Parses the definitions at the start of a program into a function table.
///
/// Definitions are recognized one at a time with [`is_function_definition`].
/// The first position that does not start a definition ends the list and is
/// left unconsumed for the top-level expression. A later definition of a
/// name replaces an earlier one.
///
/// # Parameters
/// - `cursor`: Cursor positioned at the start of the program.
///
/// # Returns
/// The function table.
///
/// # Errors
/// Propagates errors from the lookahead and from definition parsing.
pub fn parse_function_definitions(cursor: &mut Cursor<'_>) -> ParseResult<FunctionTable> {
    let mut functions = FunctionTable::new();

    loop {
        let checkpoint = cursor.checkpoint();
        let is_definition = is_function_definition(cursor)?;
        cursor.restore(checkpoint);

        if !is_definition {
            break;
        }

        let def = parse_function_definition(cursor)?;
        functions.insert(def.name.clone(), def);
    }

    Ok(functions)
}

/// Decides whether a function definition starts at the cursor.
///
/// This function identifies a definition by checking:
/// 1. The next token is an identifier.
/// 2. It is immediately followed by `(`.
/// 3. A matching `)` exists (nested parentheses are counted).
/// 4. The token after the closing `)` is `=`.
///
/// A call such as `f(1)` in the top-level expression passes the first three
/// checks and fails the fourth. The cursor is advanced by an unspecified
/// amount; callers restore a checkpoint afterwards.
///
/// # Errors
/// Returns a `ParseError` if the tokens run out before the matching `)`.
fn is_function_definition(cursor: &mut Cursor<'_>) -> ParseResult<bool> {
    if !matches!(cursor.advance(), Ok((Token::Identifier(_), _))) {
        return Ok(false);
    }
    if !matches!(cursor.advance(), Ok((Token::LParen, _))) {
        return Ok(false);
    }

    let mut parens = 1;
    while parens > 0 {
        match cursor.advance()? {
            (Token::LParen, _) => parens += 1,
            (Token::RParen, _) => parens -= 1,
            _ => {},
        }
    }

    Ok(matches!(cursor.advance(), Ok((Token::Equals, _))))
}

/// Parses a function definition.
///
/// Grammar:
/// ```text
///     definition := IDENTIFIER "(" (IDENTIFIER ","?)* ")" "=" "{" expression "}" NEWLINE
/// ```
/// The line end after the closing brace is mandatory, so a definition can
/// never be the last line of a program.
///
/// # Parameters
/// - `cursor`: Cursor positioned at the function name.
///
/// # Returns
/// The parsed [`FunctionDef`].
///
/// # Errors
/// Returns a `ParseError` on the first missing or unexpected token.
fn parse_function_definition(cursor: &mut Cursor<'_>) -> ParseResult<FunctionDef> {
    let name = parse_parameter(cursor)?;
    cursor.expect(&Token::LParen, "'('")?;
    let params = parse_list(cursor, parse_parameter, &Token::RParen)?;
    cursor.expect(&Token::Equals, "'='")?;
    let body = parse_braced(cursor)?;
    cursor.expect(&Token::NewLine, "end of line after function definition")?;

    Ok(FunctionDef { name, params, body })
}
