use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult, SymbolTable},
};

impl Context<'_> {
    /// Evaluates a call of a user-defined function.
    ///
    /// The function is looked up and its arity checked before any argument
    /// is evaluated. Arguments are then evaluated in order in the caller's
    /// frame, bound to the parameters in declaration order in a new frame,
    /// and the body is evaluated in that frame alone. When a parameter name
    /// repeats, the later argument wins.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `row`: Row of the call for error reporting.
    /// - `symbols`: The caller's frame.
    ///
    /// # Errors
    /// - [`RuntimeError::FunctionNotFound`] for an undefined name.
    /// - [`RuntimeError::ArgumentNumberMismatch`] for a wrong argument count.
    /// - Any error raised by the arguments or the body.
    pub(crate) fn eval_function_call(&self,
                                     name: &str,
                                     arguments: &[Expr],
                                     row: usize,
                                     symbols: &SymbolTable)
                                     -> EvalResult<i64> {
        let func = self.functions
                       .get(name)
                       .ok_or_else(|| RuntimeError::FunctionNotFound { name: name.to_string(),
                                                                       row })?;

        if arguments.len() != func.arity() {
            return Err(RuntimeError::ArgumentNumberMismatch { name: name.to_string(),
                                                              expected: func.arity(),
                                                              found: arguments.len(),
                                                              row });
        }

        let mut frame = SymbolTable::with_capacity(func.arity());
        for (param, argument) in func.params.iter().zip(arguments) {
            let value = self.eval(argument, symbols)?;
            frame.insert(param.clone(), value);
        }

        self.eval(&func.body, &frame)
    }
}
