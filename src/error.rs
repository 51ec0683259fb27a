/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing a program:
/// unrecognized characters, unterminated strings, unknown instructions, and
/// malformed or invalid `if`/`while` headers.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution: undefined
/// variables, type mismatches, bad array accesses, and the optional loop
/// iteration cap.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Classifies every failure a `run` call can return.
///
/// Hosts that want to branch on the cause of a failure (rather than display
/// its message) match on this, obtained through [`InterpreterError::kind`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognized character or unterminated string literal.
    LexError,
    /// A statement matches none of the recognized forms.
    UnknownInstruction,
    /// An expression referenced a name absent from the environment.
    UndefinedVariable,
    /// Operator/function applied to an incompatible value kind.
    TypeMismatch,
    /// Indexing a value that is not an array.
    NotAnArray,
    /// Array index outside `[0, length)`.
    IndexOutOfBounds,
    /// An `if`/`while` header contains no comparison operator.
    InvalidCondition,
    /// Missing or unbalanced parentheses/braces on `if`/`while`.
    MalformedBlock,
    /// The optional loop safety cap was exceeded.
    IterationLimitExceeded,
}

/// The single error type surfaced by [`Interpreter::run`].
///
/// A `run` call aborts at the first fault, and the fault is returned as one
/// `InterpreterError` wrapping either the parse-phase or the execution-phase
/// error. The message is its `Display` output; [`kind`](Self::kind) and
/// [`position`](Self::position) expose the taxonomy and source offset as
/// data.
///
/// [`Interpreter::run`]: crate::interpreter::evaluator::core::Interpreter::run
#[derive(Debug)]
pub enum InterpreterError {
    /// A fault detected while lexing or parsing.
    Parse(ParseError),
    /// A fault detected while executing.
    Runtime(RuntimeError),
}

impl InterpreterError {
    /// Returns the kind of this error.
    ///
    /// ## Example
    /// ```
    /// use petit::error::{ErrorKind, InterpreterError, RuntimeError};
    ///
    /// let error = InterpreterError::from(RuntimeError::UndefinedVariable { name:     "Z".to_string(),
    ///                                                                      position: 0, });
    ///
    /// assert_eq!(error.kind(), ErrorKind::UndefinedVariable);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => match e {
                ParseError::UnrecognizedCharacter { .. } | ParseError::UnterminatedString { .. } => {
                    ErrorKind::LexError
                },
                ParseError::UnknownInstruction { .. } => ErrorKind::UnknownInstruction,
                ParseError::MalformedBlock { .. } => ErrorKind::MalformedBlock,
                ParseError::InvalidCondition { .. } => ErrorKind::InvalidCondition,
            },
            Self::Runtime(e) => match e {
                RuntimeError::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
                RuntimeError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
                RuntimeError::NotAnArray { .. } => ErrorKind::NotAnArray,
                RuntimeError::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
                RuntimeError::IterationLimitExceeded { .. } => ErrorKind::IterationLimitExceeded,
            },
        }
    }

    /// Returns the source byte offset the error points at, when known.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Parse(e) => match e {
                ParseError::UnrecognizedCharacter { position, .. }
                | ParseError::UnterminatedString { position }
                | ParseError::UnknownInstruction { position, .. }
                | ParseError::MalformedBlock { position, .. }
                | ParseError::InvalidCondition { position, .. } => Some(*position),
            },
            Self::Runtime(e) => match e {
                RuntimeError::UndefinedVariable { position, .. }
                | RuntimeError::TypeMismatch { position, .. }
                | RuntimeError::NotAnArray { position, .. }
                | RuntimeError::IndexOutOfBounds { position, .. }
                | RuntimeError::IterationLimitExceeded { position, .. } => Some(*position),
            },
        }
    }
}

impl std::fmt::Display for InterpreterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for InterpreterError {}

impl From<ParseError> for InterpreterError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for InterpreterError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
