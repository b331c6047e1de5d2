use std::iter::Peekable;

use crate::{
    ast::{Argument, Call, Statement},
    error::{ParseError, SemanticErrorKind},
    interpreter::{
        lexer::Token,
        parser::{
            context::ParseContext,
            core::ParseResult,
            utils::{expect, parse_identifier, parse_number},
        },
    },
};

/// Parses the statement section.
///
/// Grammar: `start-section := 'START' statement+`
///
/// The statement list continues while the lookahead is `INPUT` or an
/// identifier. A number ends the list, marking the start of the input tail;
/// anything else is a syntax error.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `ctx`: Parse context accumulating slots and diagnostics.
///
/// # Returns
/// The statement list, in program order.
///
/// # Errors
/// Returns a `ParseError` if a statement is malformed or the list ends on
/// anything other than a number.
pub(in crate::interpreter::parser) fn parse_start_section<'a, I>(tokens: &mut Peekable<I>,
                                                                 ctx: &mut ParseContext)
                                                                 -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::Start)?;

    let mut statements = vec![parse_statement(tokens, ctx)?];
    loop {
        match tokens.peek() {
            Some((Token::Input | Token::Identifier(_), _)) => {
                statements.push(parse_statement(tokens, ctx)?);
            },
            Some((Token::Number(_), _)) => break,
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected a statement or an input value, found {tok:?}"),
                                                         line:  *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }

    Ok(statements)
}

/// Parses a single statement.
///
/// Grammar: `stmt := input-stmt | eval-stmt`
fn parse_statement<'a, I>(tokens: &mut Peekable<I>, ctx: &mut ParseContext) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Input, _)) => parse_input_statement(tokens, ctx),
        _ => parse_eval_statement(tokens, ctx),
    }
}

/// Parses an input statement and binds the named variable to a memory slot.
///
/// Grammar: `input-stmt := 'INPUT' ID ';'`
///
/// The first occurrence of a name allocates the next free slot; later
/// occurrences reuse it.
fn parse_input_statement<'a, I>(tokens: &mut Peekable<I>,
                                ctx: &mut ParseContext)
                                -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::Input)?;
    let (name, line) = parse_identifier(tokens)?;
    let slot = ctx.input_vars.resolve(&name);
    expect(tokens, &Token::Semicolon)?;

    Ok(Statement::Input { slot, line })
}

/// Parses a polynomial evaluation statement.
///
/// Grammar: `eval-stmt := call ';'`
fn parse_eval_statement<'a, I>(tokens: &mut Peekable<I>,
                               ctx: &mut ParseContext)
                               -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let call = parse_call(tokens, ctx)?;
    let line = call.line;
    expect(tokens, &Token::Semicolon)?;

    Ok(Statement::Eval { call, line })
}

/// Parses a polynomial evaluation.
///
/// Grammar: `call := ID '(' arg-list ')'`
///
/// The name resolves against the accumulated declarations; an unknown name
/// records `UndeclaredPolynomial` at the name's line. For a resolved call,
/// the arguments that are not themselves nested calls are counted against
/// the declared parameter count, and a mismatch records `ArityMismatch` —
/// subject to the precedence rule in
/// [`Diagnostics::record`](crate::error::Diagnostics::record).
fn parse_call<'a, I>(tokens: &mut Peekable<I>, ctx: &mut ParseContext) -> ParseResult<Call>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = parse_identifier(tokens)?;

    let declared_params = ctx.find_decl(&name).map(|decl| decl.header.params.len());
    if declared_params.is_none() {
        ctx.diagnostics.record(SemanticErrorKind::UndeclaredPolynomial, line);
    }

    expect(tokens, &Token::LParen)?;
    let arguments = parse_argument_list(tokens, ctx)?;

    if let Some(count) = declared_params {
        let direct = arguments.iter()
                              .filter(|arg| !matches!(arg, Argument::Nested { .. }))
                              .count();
        if direct != count {
            ctx.diagnostics.record(SemanticErrorKind::ArityMismatch, line);
        }
    }

    expect(tokens, &Token::RParen)?;

    Ok(Call { name, arguments, line })
}

/// Grammar: `arg-list := arg (',' arg)*`
fn parse_argument_list<'a, I>(tokens: &mut Peekable<I>,
                              ctx: &mut ParseContext)
                              -> ParseResult<Vec<Argument>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut arguments = vec![parse_argument(tokens, ctx)?];
    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        arguments.push(parse_argument(tokens, ctx)?);
    }

    Ok(arguments)
}

/// Parses one argument.
///
/// Grammar: `arg := ID | NUM | call`
///
/// An identifier immediately followed by `(` is a nested call; otherwise it
/// is a variable reference and must name the target of an earlier `INPUT`
/// statement. Anything else records `UndeclaredVariable` at the name's line
/// and leaves the slot unresolved.
fn parse_argument<'a, I>(tokens: &mut Peekable<I>, ctx: &mut ParseContext) -> ParseResult<Argument>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Number(_), _)) => {
            let (value, _) = parse_number(tokens)?;
            Ok(Argument::Constant { value })
        },

        Some((Token::Identifier(_), _)) => {
            let mut lookahead = tokens.clone();
            lookahead.next();
            if let Some((Token::LParen, _)) = lookahead.peek() {
                return Ok(Argument::Nested { call: parse_call(tokens, ctx)?, });
            }

            let (name, line) = parse_identifier(tokens)?;
            let slot = ctx.input_vars.get(&name);
            if slot.is_none() {
                ctx.diagnostics.record(SemanticErrorKind::UndeclaredVariable, line);
            }

            Ok(Argument::Variable { slot })
        },

        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected an argument, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
