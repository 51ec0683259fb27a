#[derive(Debug)]
/// Represents all errors that can occur during execution.
pub enum RuntimeError {
    /// An expression referenced a variable with no binding.
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Byte offset in the source where the error occurred.
        position: usize,
    },
    /// An operator, function or print statement received a value of an
    /// incompatible kind.
    TypeMismatch {
        /// Details about the mismatch.
        details:  String,
        /// Byte offset in the source where the error occurred.
        position: usize,
    },
    /// An indexing expression was applied to a value that is not an array.
    NotAnArray {
        /// The kind of value that was actually indexed.
        found:    &'static str,
        /// Byte offset in the source where the error occurred.
        position: usize,
    },
    /// An array was indexed outside `[0, length)`.
    IndexOutOfBounds {
        /// The length of the indexed array.
        len:      usize,
        /// The index that was requested.
        found:    i64,
        /// Byte offset in the source where the error occurred.
        position: usize,
    },
    /// The optional safety cap on loop iterations was exceeded.
    IterationLimitExceeded {
        /// The configured iteration limit.
        limit:    u64,
        /// Byte offset of the offending loop.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, position } => {
                write!(f, "Error at offset {position}: Undefined variable '{name}'.")
            },

            Self::TypeMismatch { details, position } => {
                write!(f, "Error at offset {position}: Type mismatch: {details}.")
            },

            Self::NotAnArray { found, position } => write!(f,
                                                           "Error at offset {position}: Tried to index a {found}, which is not an array."),

            Self::IndexOutOfBounds { len, found, position } => write!(f,
                                                                      "Error at offset {position}: Index out of bounds. The array has length {len}, but index {found} was requested."),

            Self::IterationLimitExceeded { limit, position } => write!(f,
                                                                       "Error at offset {position}: Loop exceeded the configured limit of {limit} iterations."),
        }
    }
}

impl std::error::Error for RuntimeError {}
