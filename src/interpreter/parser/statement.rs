use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            ParseResult,
            expression::{parse_condition, parse_expression},
        },
    },
};

/// Parses a whole program into its statement list.
///
/// A program is a semicolon-separated sequence of statements; empty
/// statements (stray semicolons) are tolerated, matching the surface the
/// language has always accepted. Parsing stops at the end of the token
/// stream.
///
/// # Parameters
/// - `tokens`: The full token stream as `(Token, offset)` pairs.
///
/// # Returns
/// The parsed statements in source order.
///
/// # Errors
/// Propagates the first `ParseError` from any statement.
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        while let Some((Token::Semicolon, _)) = iter.peek() {
            iter.next();
        }
        if iter.peek().is_none() {
            break;
        }
        statements.push(parse_statement(&mut iter)?);
    }

    Ok(statements)
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a print statement (`afficher(expression)`),
/// - an assignment (`name := expression`),
/// - a conditional (`if (condition) { ... } else { ... }`),
/// - a loop (`while (condition) { ... }`).
///
/// Dispatch is by the leading token; an identifier commits to an assignment
/// only when a `:=` follows it, checked with a cloned lookahead. Any other
/// form fails with `UnknownInstruction` naming the offending token.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, offset)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Afficher, _)) => parse_print(tokens),
        Some((Token::If, _)) => parse_if(tokens),
        Some((Token::While, _)) => parse_while(tokens),
        Some((Token::Identifier(_), _)) => {
            let mut lookahead = tokens.clone();
            let (name, position) = match lookahead.next() {
                Some((Token::Identifier(n), position)) => (n, *position),
                _ => unreachable!(),
            };
            match lookahead.peek() {
                Some((Token::ColonEquals, _)) => parse_assignment(tokens),
                _ => Err(ParseError::UnknownInstruction { text: format!("'{name}'"),
                                                          position }),
            }
        },
        Some((tok, position)) => Err(ParseError::UnknownInstruction { text: format!("{tok:?}"),
                                                                      position: *position, }),
        None => Err(ParseError::UnknownInstruction { text: "end of input".to_string(),
                                                     position: 0, }),
    }
}

/// Parses a print statement of the form `afficher ( expression )`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the `afficher` keyword.
///
/// # Returns
/// A `Statement::Print` node.
///
/// # Errors
/// Returns `UnknownInstruction` when the parentheses are missing, and
/// propagates expression errors.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, position) = *tokens.next().unwrap();

    match tokens.next() {
        Some((Token::LParen, _)) => {},
        _ => {
            return Err(ParseError::UnknownInstruction {
                text: "expected '(' after 'afficher'".to_string(),
                position,
            });
        },
    }

    let value = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => {},
        _ => {
            return Err(ParseError::UnknownInstruction {
                text: "expected ')' after the printed expression".to_string(),
                position,
            });
        },
    }

    expect_statement_separator(tokens)?;
    Ok(Statement::Print { value, position })
}

/// Parses an assignment statement of the form `name := expression`.
///
/// The caller has already verified with lookahead that the `:=` is present.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the identifier.
///
/// # Returns
/// A `Statement::Assign` node.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, position) = match tokens.next() {
        Some((Token::Identifier(n), position)) => (n.clone(), *position),
        _ => unreachable!(),
    };
    tokens.next(); // consume ':='

    let value = parse_expression(tokens)?;

    expect_statement_separator(tokens)?;
    Ok(Statement::Assign { name,
                           value,
                           position })
}

/// Parses an `if` statement with optional `else` block.
///
/// Syntax:
/// ```text
///     if ( <condition> ) { <statements> }
///     else { <statements> }
/// ```
/// The blocks are parsed structurally by [`parse_block`], so nested
/// `if`/`while` constructs inside a body are handled by recursion rather
/// than any brace counting over raw text.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `if` keyword.
///
/// # Returns
/// A `Statement::If` node representing the full conditional.
///
/// # Errors
/// - `MalformedBlock` if the parentheses or braces are missing.
/// - `InvalidCondition` if the header lacks a comparison operator.
/// - Propagates any errors from nested statements.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, position) = *tokens.next().unwrap();

    match tokens.next() {
        Some((Token::LParen, _)) => {},
        _ => {
            return Err(ParseError::MalformedBlock { details: "missing '(' after 'if'".to_string(),
                                                    position });
        },
    }

    let condition = parse_condition(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => {},
        _ => {
            return Err(ParseError::MalformedBlock { details:
                                                        "missing ')' after the if condition"
                                                            .to_string(),
                                                    position });
        },
    }

    match tokens.next() {
        Some((Token::LBrace, _)) => {},
        _ => {
            return Err(ParseError::MalformedBlock { details:
                                                        "missing '{' before the if body"
                                                            .to_string(),
                                                    position });
        },
    }

    let then_block = parse_block(tokens, position)?;

    let else_block = match tokens.peek() {
        Some((Token::Else, _)) => {
            tokens.next();

            match tokens.next() {
                Some((Token::LBrace, _)) => {},
                _ => {
                    return Err(ParseError::MalformedBlock { details:
                                                                "missing '{' after 'else'"
                                                                    .to_string(),
                                                            position });
                },
            }

            Some(parse_block(tokens, position)?)
        },
        _ => None,
    };

    Ok(Statement::If { condition,
                       then_block,
                       else_block,
                       position })
}

/// Parses a `while` statement.
///
/// Syntax:
/// ```text
///     while ( <condition> ) { <statements> }
/// ```
/// The body is parsed once into a statement list; execution replays that
/// same list on every iteration.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `while` keyword.
///
/// # Returns
/// A `Statement::While` node.
///
/// # Errors
/// - `MalformedBlock` if the parentheses or braces are missing.
/// - `InvalidCondition` if the header lacks a comparison operator.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, position) = *tokens.next().unwrap();

    match tokens.next() {
        Some((Token::LParen, _)) => {},
        _ => {
            return Err(ParseError::MalformedBlock { details:
                                                        "missing '(' after 'while'".to_string(),
                                                    position });
        },
    }

    let condition = parse_condition(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => {},
        _ => {
            return Err(ParseError::MalformedBlock { details:
                                                        "missing ')' after the while condition"
                                                            .to_string(),
                                                    position });
        },
    }

    match tokens.next() {
        Some((Token::LBrace, _)) => {},
        _ => {
            return Err(ParseError::MalformedBlock { details:
                                                        "missing '{' before the while body"
                                                            .to_string(),
                                                    position });
        },
    }

    let body = parse_block(tokens, position)?;

    Ok(Statement::While { condition,
                          body,
                          position })
}

/// Parses a brace-delimited statement list.
///
/// The opening `{` has already been consumed. Statements are parsed until
/// the matching `}`; stray semicolons between statements are skipped. Nested
/// blocks are consumed by the recursion into [`parse_statement`], which is
/// what makes brace matching structural.
///
/// Grammar: `block := statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `open_position`: Offset of the construct that opened the block, used
///   when reporting an unterminated block.
///
/// # Returns
/// The statements of the block, with the closing `}` consumed.
///
/// # Errors
/// `MalformedBlock` when the input ends before the closing brace.
fn parse_block<'a, I>(tokens: &mut Peekable<I>, open_position: usize) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        while let Some((Token::Semicolon, _)) = tokens.peek() {
            tokens.next();
        }

        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => {
                return Err(ParseError::MalformedBlock { details:
                                                            "the block is never closed, braces are unbalanced"
                                                                .to_string(),
                                                        position: open_position, });
            },
        }
    }

    Ok(statements)
}

/// Requires the separator after a print or assignment statement.
///
/// The separator is a `;`, which may be omitted only immediately before a
/// closing `}` or at the end of input.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after a statement.
///
/// # Errors
/// `UnknownInstruction` naming the token found where the `;` belonged.
fn expect_statement_separator<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Semicolon, _)) => {
            tokens.next();
            Ok(())
        },
        Some((Token::RBrace, _)) | None => Ok(()),
        Some((tok, position)) => {
            Err(ParseError::UnknownInstruction { text: format!("expected ';' after the statement, found {tok:?}"),
                                                 position: *position, })
        },
    }
}
