use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{Value, format_number},
    },
};

impl Interpreter {
    /// Evaluates a binary operation between two values.
    ///
    /// `+` is overloaded: between two numbers it adds, and as soon as either
    /// operand is text it concatenates, rendering a numeric operand with the
    /// canonical decimal form. The remaining operators (`-`, `*`, `/`)
    /// require numbers on both sides.
    ///
    /// Division follows IEEE float semantics: dividing by zero yields an
    /// infinity or NaN, never an error.
    ///
    /// Arrays take part in no binary operation; using one is a type
    /// mismatch.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source offset for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use petit::{
    ///     Interpreter,
    ///     ast::BinaryOperator,
    ///     interpreter::value::Value,
    /// };
    ///
    /// let sum = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                    &Value::Number(3.0),
    ///                                    &Value::Number(4.0),
    ///                                    1).unwrap();
    /// assert_eq!(sum, Value::Number(7.0));
    ///
    /// let text = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                     &Value::from("n = "),
    ///                                     &Value::Number(2.0),
    ///                                     1).unwrap();
    /// assert_eq!(text, Value::from("n = 2.0"));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::Number;

        match op {
            Add => match (left, right) {
                (Number(a), Number(b)) => Ok(Number(a + b)),
                (Value::Text(_), _) | (_, Value::Text(_)) => {
                    let mut text = concat_fragment(left, position)?;
                    text.push_str(&concat_fragment(right, position)?);
                    Ok(Value::Text(text))
                },
                _ => Err(type_mismatch(op, left, right, position)),
            },

            Sub | Mul | Div => match (left, right) {
                (Number(a), Number(b)) => Ok(Number(match op {
                                                        Sub => a - b,
                                                        Mul => a * b,
                                                        Div => a / b,
                                                        Add => unreachable!(),
                                                    })),
                _ => Err(type_mismatch(op, left, right, position)),
            },
        }
    }
}

/// Renders one concatenation operand as text.
///
/// Numbers use the canonical decimal rendering, text passes through, and
/// arrays cannot be spliced into text.
fn concat_fragment(value: &Value, position: usize) -> EvalResult<String> {
    match value {
        Value::Number(n) => Ok(format_number(*n)),
        Value::Text(s) => Ok(s.clone()),
        Value::Array(_) => {
            Err(RuntimeError::TypeMismatch { details:
                                                 "an array cannot be concatenated into text"
                                                     .to_string(),
                                             position })
        },
    }
}

/// Builds the type mismatch error for an inapplicable operator.
fn type_mismatch(op: BinaryOperator, left: &Value, right: &Value, position: usize) -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to {} and {}",
                                                  left.kind_name(),
                                                  right.kind_name()),
                                 position }
}
