use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// Shared by array literals and math call argument positions. It repeatedly
/// calls `parse_item` to parse one element, expecting either a comma to
/// continue the list or the closing token to end it. An immediately
/// encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)?`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g. `]`).
///
/// # Returns
/// A vector of parsed items, with the closing token consumed.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token
/// appears between items, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((tok, position)) => {
                return Err(ParseError::UnknownInstruction { text: format!("expected ',' or {closing:?}, found {tok:?}"),
                                                            position: *position, });
            },
            None => {
                return Err(ParseError::UnknownInstruction { text: format!("expected ',' or {closing:?}, found end of input"),
                                                            position: 0, });
            },
        }
    }
    Ok(items)
}
