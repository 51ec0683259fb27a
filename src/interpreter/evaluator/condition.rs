use crate::{
    ast::{ComparisonOperator, Condition},
    interpreter::evaluator::core::{EvalResult, Interpreter},
};

impl Interpreter {
    /// Evaluates an `if`/`while` condition to a boolean.
    ///
    /// Both operands are evaluated and must be numbers; the single comparison
    /// between them is what reduces the header to a boolean. A non-numeric
    /// operand is a type mismatch (conditions compare numbers, never text or
    /// arrays).
    ///
    /// # Parameters
    /// - `condition`: The condition node from an `if`/`while` header.
    ///
    /// # Returns
    /// The truth of the comparison.
    ///
    /// # Errors
    /// - `UndefinedVariable` from operand evaluation.
    /// - `TypeMismatch` when an operand is not a number.
    pub(crate) fn eval_condition(&self, condition: &Condition) -> EvalResult<bool> {
        let left = self.eval_expression(&condition.left)?
                       .as_number(condition.position)?;
        let right = self.eval_expression(&condition.right)?
                        .as_number(condition.position)?;

        Ok(match condition.op {
               ComparisonOperator::Less => left < right,
               ComparisonOperator::Greater => left > right,
               ComparisonOperator::LessEqual => left <= right,
               ComparisonOperator::GreaterEqual => left >= right,
               ComparisonOperator::Equal => left == right,
               ComparisonOperator::NotEqual => left != right,
           })
    }
}
