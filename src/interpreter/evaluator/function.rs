use crate::{
    ast::MathFunction,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Resolves a called name against the builtin math functions.
///
/// The language has no user-defined functions; these four names are the only
/// callable ones, and the parser consults this table when it sees an
/// identifier followed by `(`.
///
/// # Parameters
/// - `name`: The called identifier.
///
/// # Returns
/// The matching [`MathFunction`], or `None` for any other name.
///
/// # Example
/// ```
/// use petit::{ast::MathFunction, interpreter::evaluator::function::math_function_from_name};
///
/// assert_eq!(math_function_from_name("sqrt"), Some(MathFunction::Sqrt));
/// assert_eq!(math_function_from_name("carre"), None);
/// ```
#[must_use]
pub fn math_function_from_name(name: &str) -> Option<MathFunction> {
    match name {
        "sin" => Some(MathFunction::Sin),
        "cos" => Some(MathFunction::Cos),
        "tan" => Some(MathFunction::Tan),
        "sqrt" => Some(MathFunction::Sqrt),
        _ => None,
    }
}

/// Applies a builtin math function to its evaluated argument.
///
/// The argument must be a number; the standard `f64` function is applied
/// directly, so domain edges follow IEEE semantics (`sqrt(-1)` is NaN, not an
/// error).
///
/// # Parameters
/// - `function`: The builtin to apply.
/// - `argument`: The evaluated argument value.
/// - `position`: Source offset for error reporting.
///
/// # Returns
/// The numeric result.
///
/// # Errors
/// `TypeMismatch` when the argument is not a number.
///
/// # Example
/// ```
/// use petit::{
///     ast::MathFunction,
///     interpreter::{evaluator::function::apply_math_function, value::Value},
/// };
///
/// let r = apply_math_function(MathFunction::Sqrt, &Value::Number(16.0), 1).unwrap();
///
/// assert_eq!(r, Value::Number(4.0));
/// ```
pub fn apply_math_function(function: MathFunction,
                           argument: &Value,
                           position: usize)
                           -> EvalResult<Value> {
    let x = argument.as_number(position)?;

    let result = match function {
        MathFunction::Sin => x.sin(),
        MathFunction::Cos => x.cos(),
        MathFunction::Tan => x.tan(),
        MathFunction::Sqrt => x.sqrt(),
    };

    Ok(Value::Number(result))
}
