use std::rc::Rc;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// This enum models the three kinds a variable slot can hold: numbers, text,
/// and arrays. Values are immutable once produced; assignment replaces the
/// binding in the environment, never the value in place. Arrays share their
/// storage through `Rc`, so rebinding and copying bindings stays cheap.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A piece of text produced by a string literal or concatenation.
    Text(String),
    /// An ordered sequence of values, produced by an array literal.
    Array(Rc<Vec<Self>>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `position`: Source byte offset for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::TypeMismatch)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use petit::interpreter::value::Value;
    ///
    /// let x = Value::Number(10.0);
    ///
    /// assert_eq!(x.as_number(42).unwrap(), 10.0);
    /// assert!(Value::from("dix").as_number(42).is_err());
    /// ```
    pub fn as_number(&self, position: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::TypeMismatch { details: format!("expected a number, found {}",
                                                                   self.kind_name()),
                                                  position }),
        }
    }

    /// Borrows the value's elements, or returns an error if not an array.
    ///
    /// # Parameters
    /// - `position`: Source byte offset for error reporting.
    ///
    /// # Returns
    /// - `Ok(&[Value])`: The elements, if the value is an array.
    /// - `Err(RuntimeError::NotAnArray)`: Otherwise.
    pub fn as_array(&self, position: usize) -> EvalResult<&[Self]> {
        match self {
            Self::Array(elements) => Ok(elements.as_slice()),
            _ => Err(RuntimeError::NotAnArray { found: self.kind_name(),
                                                position }),
        }
    }

    /// Renders the value the way `afficher` must print it.
    ///
    /// Numbers use the canonical decimal rendering of [`format_number`], text
    /// is emitted verbatim, and arrays are not directly printable.
    ///
    /// # Parameters
    /// - `position`: Source byte offset for error reporting.
    ///
    /// # Returns
    /// - `Ok(String)`: The output text.
    /// - `Err(RuntimeError::TypeMismatch)`: If the value is an array.
    ///
    /// # Example
    /// ```
    /// use petit::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(2.0).to_output_text(0).unwrap(), "2.0");
    /// assert_eq!(Value::from("yes").to_output_text(0).unwrap(), "yes");
    /// assert!(Value::from(vec![Value::Number(1.0)]).to_output_text(0).is_err());
    /// ```
    pub fn to_output_text(&self, position: usize) -> EvalResult<String> {
        match self {
            Self::Number(n) => Ok(format_number(*n)),
            Self::Text(s) => Ok(s.clone()),
            Self::Array(_) => {
                Err(RuntimeError::TypeMismatch { details: "an array cannot be printed directly"
                                                              .to_string(),
                                                 position })
            },
        }
    }

    /// Names the kind of this value for error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(..) => "number",
            Self::Text(..) => "text",
            Self::Array(..) => "array",
        }
    }

    /// Returns `true` if the value is [`Number`](Self::Number).
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`Text`](Self::Text).
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(..))
    }

    /// Returns `true` if the value is [`Array`](Self::Array).
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Text(s) => write!(f, "{s}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}

/// Renders a number in the language's canonical decimal form.
///
/// Finite values with no fractional part keep one decimal place, so `1050`
/// renders as `1050.0` and array elements print as `2.0`. Every other finite
/// value uses the shortest round-trip `f64` form. Division by zero is legal
/// in the language, so the non-finite renderings `inf`, `-inf` and `NaN` are
/// reachable.
///
/// # Example
/// ```
/// use petit::interpreter::value::format_number;
///
/// assert_eq!(format_number(1050.0), "1050.0");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
