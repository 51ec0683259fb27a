use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Keywords and identifiers are matched longest-first, so a variable named
/// `afficherTotal` is a single identifier and never the `afficher` keyword
/// followed by leftovers. Likewise `<=` always wins over `<`.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `350` or `2.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens such as `"Hello"`, stored without the quotes.
    /// No escape sequences exist; the literal runs to the next `"`.
    #[regex(r#""[^"]*""#, strip_quotes)]
    Text(String),
    /// `afficher`
    #[token("afficher")]
    Afficher,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// Identifier tokens; variable names such as `X` or `compteur`. The math
    /// function names (`sin`, `cos`, `tan`, `sqrt`) also lex as identifiers
    /// and are resolved against the builtin table by the parser.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `:=`
    #[token(":=")]
    ColonEquals,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a string literal slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The literal text without its delimiters.
fn strip_quotes(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Tokenizes a whole program in one linear pass.
///
/// Every token is paired with its byte offset in `source`, which later
/// stages thread through the AST for error reporting. The end of the returned
/// sequence is the end of input; the parser treats iterator exhaustion as the
/// terminal token.
///
/// # Parameters
/// - `source`: The program text.
///
/// # Returns
/// The token stream as `(Token, offset)` pairs.
///
/// # Errors
/// - `ParseError::UnterminatedString` if a `"` is never closed.
/// - `ParseError::UnrecognizedCharacter` for any other unmatchable input.
///
/// # Example
/// ```
/// use petit::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("X := 2;").unwrap();
///
/// assert_eq!(tokens[0], (Token::Identifier("X".to_string()), 0));
/// assert_eq!(tokens[1], (Token::ColonEquals, 2));
/// assert_eq!(tokens[2], (Token::Number(2.0), 5));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                if lexer.slice().starts_with('"') {
                    return Err(ParseError::UnterminatedString { position });
                }
                return Err(ParseError::UnrecognizedCharacter { text: lexer.slice().to_string(),
                                                               position });
            },
        }
    }

    Ok(tokens)
}
