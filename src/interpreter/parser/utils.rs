use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token and checks that it matches `expected`.
///
/// This is the primitive used to match terminals in the right-hand side of a
/// grammar rule.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `expected`: The token that must come next.
///
/// # Returns
/// The source line of the consumed token.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token differs from `expected`,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected {expected:?}, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a plain identifier and returns its name and source line.
///
/// The next token must be `Token::Identifier`. Resolution against parameter
/// or variable tables is the caller's business.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), line)) => Ok((name.clone(), *line)),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected identifier, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses an integer literal and returns its value and source line.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not a number,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_number<'a, I>(tokens: &mut Peekable<I>)
                                                          -> ParseResult<(i64, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(value), line)) => Ok((*value, *line)),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected a number, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
