//! # petit
//!
//! petit is an interpreter for a small didactic imperative language:
//! assignment, arithmetic and string expressions, arrays, conditionals,
//! loops, and the `afficher` print statement.
//!
//! The crate is the interpretation engine only. A host — CLI, GUI, test
//! harness — hands a program to [`Interpreter::run`] and renders the returned
//! output records or the error; the engine itself never touches stdout.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr`, `Condition` and `Statement` types that
/// represent the syntactic structure of a program as a tree. The AST is built
/// by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression, condition and statement types for all language
///   constructs.
/// - Attaches source offsets to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or executing a program, and the single [`InterpreterError`] a `run` call
/// surfaces, with its kind taxonomy and source offset.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source offsets and detailed messages.
/// - Exposes the error taxonomy as data through [`ErrorKind`].
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the value model,
/// and the variable environment to provide a complete runtime for the
/// language. It exposes the public API for interpreting programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment.
/// - Provides the `run` entry points and output records.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::{
    error::{ErrorKind, InterpreterError},
    interpreter::evaluator::core::{Interpreter, OutputRecord},
    interpreter::value::Value,
};

/// Runs a program on a fresh interpreter and returns its outputs.
///
/// This is the one-shot convenience for hosts and tests that do not need
/// variables to persist between programs. Anything that runs several
/// programs against shared state should create an [`Interpreter`] and call
/// [`run`](Interpreter::run) on it repeatedly instead.
///
/// # Errors
/// Returns the first lexing, parsing or execution fault as an
/// [`InterpreterError`].
///
/// # Examples
/// ```
/// use petit::run_program;
///
/// let outputs = run_program(r#"afficher("Hello" + " " + "World");"#).unwrap();
/// assert_eq!(outputs[0].text, "Hello World");
///
/// // An undefined variable is an error, and produces no output.
/// let result = run_program("afficher(Z + 1);");
/// assert!(result.is_err());
/// ```
pub fn run_program(source: &str) -> Result<Vec<OutputRecord>, InterpreterError> {
    Interpreter::new().run(source)
}
