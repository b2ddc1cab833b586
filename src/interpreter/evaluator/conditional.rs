use crate::{
    ast::Expr,
    interpreter::evaluator::core::{Context, EvalResult, SymbolTable},
};

impl Context<'_> {
    /// Evaluates `[<condition>]?{<if_branch>}:{<else_branch>}`.
    ///
    /// Any nonzero condition selects the if-branch. Only the selected branch
    /// is evaluated, so the other one may fail or recurse without bound.
    pub(crate) fn eval_conditional(&self,
                                   condition: &Expr,
                                   if_branch: &Expr,
                                   else_branch: &Expr,
                                   symbols: &SymbolTable)
                                   -> EvalResult<i64> {
        if self.eval(condition, symbols)? != 0 {
            self.eval(if_branch, symbols)
        } else {
            self.eval(else_branch, symbols)
        }
    }
}
