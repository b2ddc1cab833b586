/// Binary operator evaluation logic.
///
/// Evaluates both operands, applies checked integer arithmetic and turns
/// arithmetic faults into runtime errors quoting the failing expression.
pub mod binary;

/// Unary negation.
pub mod unary;

/// Conditional expressions.
pub mod conditional;

/// Core evaluation logic and context management.
///
/// Contains the evaluation entry points, the runtime context and the
/// dispatch over expression kinds.
pub mod core;

/// Function evaluation.
///
/// Resolves calls against the function table, checks arity, evaluates the
/// arguments and runs the body in a fresh call frame.
pub mod function;
