use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::{ParseResult, parse_expression},
            cursor::Cursor,
            function::parse_function_definitions,
        },
    },
};

/// Parses a complete program.
///
/// A program is a list of function definitions followed by exactly one
/// expression. Only line ends may follow the expression.
///
/// Grammar: `program := definition* expression NEWLINE*`
///
/// # Parameters
/// - `tokens`: The full token sequence produced by the lexer.
///
/// # Returns
/// The [`Program`] holding the function table and the top-level expression.
///
/// # Errors
/// - [`ParseError::UnexpectedTrailingTokens`] if anything but line ends
///   follows the top-level expression.
/// - Any error from definition or expression parsing.
///
/// # Example
/// ```
/// use parenval::interpreter::{lexer::tokenize, parser::program::parse_program};
///
/// let tokens = tokenize("sq(x)={(x*x)}\nsq(7)\n").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert!(program.functions.contains_key("sq"));
/// assert_eq!(program.expression.to_string(), "sq(7,)");
/// ```
pub fn parse_program(tokens: &[Spanned]) -> ParseResult<Program> {
    let mut cursor = Cursor::new(tokens);

    let functions = parse_function_definitions(&mut cursor)?;
    let expression = parse_expression(&mut cursor)?;

    while !cursor.is_at_end() {
        match cursor.advance()? {
            (Token::NewLine, _) => {},
            (tok, pos) => {
                return Err(ParseError::UnexpectedTrailingTokens { token: tok.to_string(),
                                                                  pos:   *pos, });
            },
        }
    }

    Ok(Program { functions, expression })
}
