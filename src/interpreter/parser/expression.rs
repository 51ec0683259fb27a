use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, ComparisonOperator, Condition, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        evaluator::function::math_function_from_name,
        lexer::Token,
        parser::{ParseResult, utils::parse_comma_separated},
    },
};

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy. Comparisons are deliberately not part of this
/// grammar; they exist only inside `if`/`while` headers (see
/// [`parse_condition`]).
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}

/// Parses the condition of an `if`/`while` header.
///
/// A condition is exactly one comparison between two arithmetic expressions:
///
/// Grammar: `condition := expression cmp expression`
///
/// where `cmp` is one of `<`, `>`, `<=`, `>=`, `==`, `!=`. This single
/// comparison application is what reduces the header to a boolean.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the condition.
///
/// # Returns
/// The parsed [`Condition`] node.
///
/// # Errors
/// - `InvalidCondition` if no comparison operator follows the left operand.
/// - Propagates any errors from operand parsing.
pub fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Condition>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_expression(tokens)?;

    match tokens.peek() {
        Some((token, position)) => match token_to_comparison_operator(token) {
            Some(op) => {
                let position = *position;
                tokens.next();

                let right = parse_expression(tokens)?;
                Ok(Condition { left,
                               op,
                               right,
                               position })
            },
            None => {
                Err(ParseError::InvalidCondition { details:
                                                       "the condition contains no comparison operator"
                                                           .to_string(),
                                                   position: *position, })
            },
        },
        None => {
            Err(ParseError::InvalidCondition { details:
                                                   "the condition contains no comparison operator"
                                                       .to_string(),
                                               position: left.position(), })
        },
    }
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = *position;
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let position = *position;
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation), which is
/// right-associative: `--x` parses as `-(-x)`. If no unary operator is
/// present, the function delegates to [`parse_primary`] and then applies any
/// postfix indexing via [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary postfix*
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An `Expr::UnaryOp` or a primary expression possibly followed by postfixes.
fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           position })
    } else {
        let primary = parse_primary(tokens)?;
        parse_postfix(tokens, primary)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric and string literals
/// - variables
/// - math function calls (`sin`, `cos`, `tan`, `sqrt`)
/// - parenthesized expressions
/// - array literals (`[ ... ]`)
///
/// This function does not handle unary or postfix operators; it dispatches on
/// the leading token.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or_else(|| ParseError::UnknownInstruction { text: "end of input"
                                                                             .to_string(),
                                                                       position: 0, })?;

    match peeked {
        (Token::Number(_), _) => {
            let (value, position) = match tokens.next() {
                Some((Token::Number(n), position)) => (*n, *position),
                _ => unreachable!(),
            };
            Ok(Expr::NumberLiteral { value, position })
        },
        (Token::Text(_), _) => {
            let (value, position) = match tokens.next() {
                Some((Token::Text(s), position)) => (s.clone(), *position),
                _ => unreachable!(),
            };
            Ok(Expr::StringLiteral { value, position })
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::LBracket, _) => parse_array_literal(tokens),
        (Token::Identifier(_), _) => parse_variable_or_call(tokens),
        (tok, position) => Err(ParseError::UnknownInstruction { text: format!("{tok:?}"),
                                                                position: *position, }),
    }
}

/// Parses postfix indexing applied to an expression.
///
/// Called after a primary expression; handles chained array indices:
///
/// ```text
///     postfix := "[" expression "]"
/// ```
///
/// Multiple chained indices are allowed (`A[0][1]`), which matters when an
/// array element is itself an array. Parsing continues until no `[` follows.
///
/// # Parameters
/// - `tokens`: Token iterator after a primary expression.
/// - `node`: The expression the indices apply to.
///
/// # Returns
/// An updated [`Expr`] with all indices folded in.
///
/// # Errors
/// Returns a `ParseError` if an index expression fails to parse or its `]`
/// is missing.
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut node: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    while let Some((Token::LBracket, index_position)) = tokens.peek() {
        let index_position = *index_position;
        tokens.next();
        let index = parse_expression(tokens)?;
        match tokens.next() {
            Some((Token::RBracket, _)) => {
                node = Expr::Index { target: Box::new(node),
                                     index: Box::new(index),
                                     position: index_position, };
            },
            _ => {
                return Err(ParseError::UnknownInstruction {
                    text: "expected ']' after array index".to_string(),
                    position: index_position,
                });
            },
        }
    }
    Ok(node)
}

/// Parses a parenthesized expression.
///
/// Expected form: `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, position) = *tokens.next().unwrap();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::UnknownInstruction { text: "expected ')' after expression".to_string(),
                                                  position }),
    }
}

/// Parses an array literal of the form `[expr1, expr2, ..., exprN]`.
///
/// Elements are arbitrary expressions separated by commas; `[]` is a valid
/// empty array.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `[`.
///
/// # Returns
/// An `Expr::ArrayLiteral` node containing the parsed elements.
fn parse_array_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, position) = *tokens.next().unwrap();
    let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
    Ok(Expr::ArrayLiteral { elements, position })
}

/// Parses a variable reference or a math function call.
///
/// The function first consumes the identifier token. If the next token is
/// `(`, the identifier must name one of the builtin math functions and a
/// single-argument call is parsed; any other called name is rejected, since
/// the language has no user-defined functions. Otherwise the identifier is a
/// variable reference.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// - [`Expr::Call`] if followed by parentheses,
/// - [`Expr::Variable`] otherwise.
///
/// # Errors
/// Returns a `ParseError` if the called name is not a math function, or the
/// argument or closing `)` fails to parse.
fn parse_variable_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, position) = match tokens.next() {
        Some((Token::Identifier(n), position)) => (n.clone(), *position),
        _ => unreachable!(),
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            let Some(function) = math_function_from_name(&name) else {
                return Err(ParseError::UnknownInstruction { text:
                                                                format!("'{name}' is not a known function"),
                                                            position });
            };
            tokens.next();

            let argument = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(Expr::Call { function,
                                                            argument: Box::new(argument),
                                                            position }),
                _ => {
                    Err(ParseError::UnknownInstruction { text: format!("expected ')' after the argument of '{name}'"),
                                                         position })
                },
            }
        },
        _ => Ok(Expr::Variable { name, position }),
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of the
/// arithmetic operators (`+`, `-`, `*`, `/`) and `None` for all other
/// tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Example
/// ```
/// use petit::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::expression::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Maps a token to its corresponding comparison operator.
///
/// Returns `Some(ComparisonOperator)` for `<`, `>`, `<=`, `>=`, `==`, `!=`
/// and `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
#[must_use]
pub const fn token_to_comparison_operator(token: &Token) -> Option<ComparisonOperator> {
    match token {
        Token::Less => Some(ComparisonOperator::Less),
        Token::Greater => Some(ComparisonOperator::Greater),
        Token::LessEqual => Some(ComparisonOperator::LessEqual),
        Token::GreaterEqual => Some(ComparisonOperator::GreaterEqual),
        Token::EqualEqual => Some(ComparisonOperator::Equal),
        Token::BangEqual => Some(ComparisonOperator::NotEqual),
        _ => None,
    }
}
