use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{context::ParseContext, decl::parse_decl_section, statement::parse_start_section},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// This is the entry point for parsing. It matches the declaration section
/// followed by the statement section, populating `ctx` with declarations,
/// variable slots and any semantic diagnostics along the way.
///
/// Grammar: `program := decl-section start-section`
///
/// On return the token stream is positioned at the first literal of the
/// input tail. Semantic violations do not fail this call; they are recorded
/// in `ctx` and consulted before execution.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `ctx`: Parse context accumulating declarations, slots and diagnostics.
///
/// # Returns
/// The statement list, in program order.
///
/// # Errors
/// Returns a `ParseError` on any syntax violation.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>,
                            ctx: &mut ParseContext)
                            -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_decl_section(tokens, ctx)?;
    parse_start_section(tokens, ctx)
}
