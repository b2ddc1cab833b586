use crate::{
    ast::Expr,
    interpreter::evaluator::core::{Context, EvalResult, SymbolTable},
};

impl Context<'_> {
    /// Evaluates `-<expr>`.
    ///
    /// Negation wraps, so `i64::MIN` negates to itself.
    pub(crate) fn eval_negate(&self, expr: &Expr, symbols: &SymbolTable) -> EvalResult<i64> {
        Ok(self.eval(expr, symbols)?.wrapping_neg())
    }
}
