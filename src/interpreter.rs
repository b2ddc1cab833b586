/// The evaluator module computes the integer value of a parsed program.
///
/// The evaluator walks the AST against the function table and a per-call
/// symbol table. It is pure: it performs no I/O and keeps no state between
/// evaluations.
///
/// # Responsibilities
/// - Evaluates constants, negations, binary operations and conditionals.
/// - Resolves parameters in the current call frame and calls in the function
///   table.
/// - Reports runtime errors such as unknown names, arity mismatches and
///   division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces positioned tokens:
/// numbers, identifiers, operators, punctuation and line ends. Characters
/// outside the language are skipped.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser collects the leading function definitions into a function
/// table and then parses the single top-level expression.
///
/// # Responsibilities
/// - Recognizes function definitions with a checkpointed lookahead.
/// - Converts tokens into expression nodes by recursive descent.
/// - Rejects any grammar violation without attempting recovery.
pub mod parser;
