/// Token cursor with checkpoint/restore.
///
/// A `Copy` view into the token slice. Lookahead copies the cursor, so
/// restoring a checkpoint is an assignment.
pub mod cursor;

/// Expression dispatch.
///
/// Chooses the grammar rule from the first token of an expression.
pub mod core;

/// Binary expressions, `(<expr><op><expr>)`.
pub mod binary;

/// Conditional expressions, `[<expr>]?{<expr>}:{<expr>}`.
pub mod conditional;

/// Unary negation and identifier-or-call expressions.
pub mod unary;

/// Function definitions.
///
/// Recognizes definitions with a speculative lookahead and collects them into
/// the function table.
pub mod function;

/// Whole programs: the definition list, the top-level expression and the
/// trailing line ends.
pub mod program;

/// Shared helpers for lists and identifiers.
pub mod utils;
