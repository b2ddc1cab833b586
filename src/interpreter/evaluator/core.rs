use std::collections::HashMap;

use crate::{
    ast::{Expr, FunctionTable, Program},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// One call frame: parameter names bound to already computed values.
///
/// A frame holds only the parameters of the function being evaluated. It is
/// built fresh for each call and never sees the caller's frame.
pub type SymbolTable = HashMap<String, i64>;

/// Stores the runtime evaluation context.
///
/// The context gives every evaluation step access to the global function
/// table. It holds no mutable state, so evaluating the same expression twice
/// yields the same result or the same error.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// A mapping from function names to their definitions.
    pub functions: &'a FunctionTable,
}

impl<'a> Context<'a> {
    /// Creates a context over a function table.
    #[must_use]
    pub const fn new(functions: &'a FunctionTable) -> Self {
        Self { functions }
    }

    /// Evaluates an expression and returns the resulting integer.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant: constants, negations, binary
    /// operations, conditionals, parameter references and calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `symbols`: The current call frame.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Errors
    /// The first [`RuntimeError`] raised anywhere in the expression.
    pub fn eval(&self, expr: &Expr, symbols: &SymbolTable) -> EvalResult<i64> {
        match expr {
            Expr::Constant { value, .. } => Ok(*value),
            Expr::Negate { expr, .. } => self.eval_negate(expr, symbols),
            Expr::Binary { op, left, right, .. } => {
                self.eval_binary_op(expr, *op, left, right, symbols)
            },
            Expr::Conditional { condition,
                                if_branch,
                                else_branch,
                                .. } => self.eval_conditional(condition, if_branch, else_branch, symbols),
            Expr::Identifier { name, pos } => Self::eval_identifier(name, pos.row, symbols),
            Expr::Call { name, arguments, pos } => {
                self.eval_function_call(name, arguments, pos.row, symbols)
            },
        }
    }

    /// Looks up a parameter in the current call frame.
    ///
    /// # Errors
    /// [`RuntimeError::ParameterNotFound`] if the frame has no such
    /// parameter.
    fn eval_identifier(name: &str, row: usize, symbols: &SymbolTable) -> EvalResult<i64> {
        symbols.get(name)
               .copied()
               .ok_or_else(|| RuntimeError::ParameterNotFound { name: name.to_string(),
                                                                row })
    }
}

/// Evaluates an expression against a function table and a call frame.
///
/// # Errors
/// The first [`RuntimeError`] raised during evaluation.
///
/// # Example
/// ```
/// use parenval::{
///     ast::FunctionTable,
///     interpreter::{
///         evaluator::core::{SymbolTable, evaluate},
///         lexer::tokenize,
///         parser::program::parse_program,
///     },
/// };
///
/// let program = parse_program(&tokenize("[(x>2)]?{(x*10)}:{x}").unwrap()).unwrap();
///
/// let mut symbols = SymbolTable::new();
/// symbols.insert("x".to_string(), 3);
/// assert_eq!(evaluate(&program.expression, &FunctionTable::new(), &symbols), Ok(30));
///
/// symbols.insert("x".to_string(), 1);
/// assert_eq!(evaluate(&program.expression, &FunctionTable::new(), &symbols), Ok(1));
/// ```
pub fn evaluate(expr: &Expr, functions: &FunctionTable, symbols: &SymbolTable) -> EvalResult<i64> {
    Context::new(functions).eval(expr, symbols)
}

impl Program {
    /// Evaluates the top-level expression with an empty call frame.
    ///
    /// # Errors
    /// The first [`RuntimeError`] raised during evaluation.
    pub fn evaluate(&self) -> EvalResult<i64> {
        evaluate(&self.expression, &self.functions, &SymbolTable::new())
    }
}
