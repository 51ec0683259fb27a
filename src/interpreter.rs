/// The environment module holds the variable store.
///
/// One flat, mutable name → value mapping per interpreter instance: the
/// language has a single global scope, assignment is last-write-wins, and
/// bindings persist for the life of the instance.
///
/// # Responsibilities
/// - Stores and retrieves variable bindings by name.
/// - Enforces the single-scope model (no nesting, no shadowing).
pub mod env;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, executes
/// statements against the environment, and produces the ordered output
/// records of a run. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates expressions, conditions and math calls.
/// - Executes assignment, print, branching and loops.
/// - Reports runtime errors such as undefined variables or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw program text and produces a stream of tokens,
/// each paired with its byte offset. This single linear pass replaces any
/// text-splitting tricks: keywords, identifiers and multi-character
/// operators are matched longest-first, so no name can be confused with a
/// substring of another.
///
/// # Responsibilities
/// - Converts the input character stream into located tokens.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs the statement list that represents the program, recursing into
/// expressions and block bodies. Blocks are parsed structurally, so nested
/// `if`/`while` constructs need no special treatment.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and syntax, reporting errors with source offsets.
/// - Distinguishes the statement forms and their error cases.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the three value kinds a variable can hold — numbers, text, and
/// arrays — together with the accessors the evaluator relies on and the
/// canonical way numbers are rendered as text.
///
/// # Responsibilities
/// - Defines the `Value` enum and its variants.
/// - Implements kind checks, conversions, and display.
/// - Owns the canonical decimal rendering of numbers.
pub mod value;
