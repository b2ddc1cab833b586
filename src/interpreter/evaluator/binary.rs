use crate::{
    ast::{BinaryOperator, Expr},
    error::{ArithmeticFault, RuntimeError},
    interpreter::evaluator::core::{Context, EvalResult, SymbolTable},
};

impl Context<'_> {
    /// Evaluates a binary expression node.
    ///
    /// Both operands are always evaluated, left first. Errors raised inside
    /// the operands propagate unchanged; a failure of this node's own
    /// operator is reported as [`RuntimeError::Arithmetic`] quoting `node`
    /// and its row.
    ///
    /// # Parameters
    /// - `node`: The whole binary expression, used for the error text.
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `symbols`: The current call frame.
    pub(crate) fn eval_binary_op(&self,
                                 node: &Expr,
                                 op: BinaryOperator,
                                 left: &Expr,
                                 right: &Expr,
                                 symbols: &SymbolTable)
                                 -> EvalResult<i64> {
        let left = self.eval(left, symbols)?;
        let right = self.eval(right, symbols)?;

        Self::eval_binary(op, left, right).map_err(|fault| RuntimeError::Arithmetic {
            expression: node.to_string(),
            fault,
            row: node.row(),
        })
    }

    /// Applies an operator to two integers.
    ///
    /// `/` truncates toward zero and `%` takes the sign of the dividend.
    /// `<` and `>` yield `1` for true and `0` for false.
    ///
    /// # Errors
    /// - [`ArithmeticFault::DivisionByZero`] for `/` or `%` with a zero
    ///   divisor.
    /// - [`ArithmeticFault::Overflow`] if the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use parenval::{ast::BinaryOperator, error::ArithmeticFault, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, -7, 2), Ok(-3));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mod, -7, 2), Ok(-1));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Less, 1, 2), Ok(1));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mod, 1, 0),
    ///            Err(ArithmeticFault::DivisionByZero));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: i64, right: i64) -> Result<i64, ArithmeticFault> {
        use BinaryOperator::{Add, Div, Greater, Less, Mod, Mul, Sub};

        match op {
            Add => left.checked_add(right).ok_or(ArithmeticFault::Overflow),
            Sub => left.checked_sub(right).ok_or(ArithmeticFault::Overflow),
            Mul => left.checked_mul(right).ok_or(ArithmeticFault::Overflow),
            Div | Mod if right == 0 => Err(ArithmeticFault::DivisionByZero),
            Div => left.checked_div(right).ok_or(ArithmeticFault::Overflow),
            Mod => left.checked_rem(right).ok_or(ArithmeticFault::Overflow),
            Less => Ok(i64::from(left < right)),
            Greater => Ok(i64::from(left > right)),
        }
    }
}
