//! # parenval
//!
//! parenval is an interpreter for a small, fully parenthesized, integer
//! valued expression language with recursive functions and a ternary
//! conditional.
//!
//! A program is a list of function definitions, one per line, followed by a
//! single expression:
//!
//! ```text
//! g(x)={(f(x)+f((x/2)))}
//! f(x)={[(x>1)]?{(f((x-1))+f((x-2)))}:{x}}
//! g(10)
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::InterpreterError,
    interpreter::{lexer::tokenize, parser::program::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum, function definitions and the
/// program produced by the parser, together with the canonical text
/// rendering used in runtime error messages.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines one error enum per phase, carrying names and positions.
/// - Renders the fixed result lines seen by callers.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
pub mod interpreter;

/// Tokenizes, parses and evaluates a program.
///
/// # Errors
/// - [`InterpreterError::Parse`] if the source is not a well-formed program.
/// - [`InterpreterError::Runtime`] if evaluation fails.
///
/// # Examples
/// ```
/// use parenval::get_result;
///
/// assert_eq!(get_result("(2+((3*4)/5))"), Ok(4));
///
/// let err = get_result("g(a,b)={(a/b)}\ng(10,0)").unwrap_err();
/// assert_eq!(err.to_string(), "RUNTIME ERROR (a/b):1");
///
/// let err = get_result("1 + 2 + 3").unwrap_err();
/// assert_eq!(err.to_string(), "SYNTAX ERROR");
/// ```
pub fn get_result(source: &str) -> Result<i64, InterpreterError> {
    let tokens = tokenize(source)?;
    let program = parse_program(&tokens)?;
    Ok(program.evaluate()?)
}

/// Runs a program and renders its outcome as a single line.
///
/// The line is either the resulting integer or the error line, without a
/// trailing newline.
///
/// # Examples
/// ```
/// use parenval::run;
///
/// assert_eq!(run("[((10+20)>(20+10))]?{1}:{0}"), "0");
/// assert_eq!(run("f(x)={y}\nf(10)"), "PARAMETER NOT FOUND y:1");
/// ```
#[must_use]
pub fn run(source: &str) -> String {
    match get_result(source) {
        Ok(value) => value.to_string(),
        Err(e) => e.to_string(),
    }
}
