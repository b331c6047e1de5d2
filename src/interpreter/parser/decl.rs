use std::iter::Peekable;

use crate::{
    ast::{AddOperator, Monomial, PolyDecl, PolyHeader, Term},
    error::{ParseError, SemanticErrorKind},
    interpreter::{
        lexer::Token,
        parser::{
            context::ParseContext,
            core::ParseResult,
            utils::{expect, parse_identifier, parse_number},
        },
    },
    util::num::i64_to_u32_checked,
};

/// Parses the declaration section.
///
/// Grammar: `decl-section := decl+`
///
/// The section continues while the lookahead is `POLY` and ends, without
/// consuming anything, when it is `START`. Each completed declaration is
/// compared against the ones already accumulated; a name collision records
/// `DuplicateDeclaration` with both declaration lines, and the new
/// declaration is stored regardless.
///
/// # Errors
/// Returns a `ParseError` if a declaration is malformed or the lookahead
/// after one is neither `POLY` nor `START`.
pub(in crate::interpreter::parser) fn parse_decl_section<'a, I>(tokens: &mut Peekable<I>,
                                                                ctx: &mut ParseContext)
                                                                -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    loop {
        let decl = parse_decl(tokens, ctx)?;

        for earlier in &ctx.decls {
            if earlier.header.name == decl.header.name {
                ctx.diagnostics
                   .record(SemanticErrorKind::DuplicateDeclaration, earlier.header.line);
                ctx.diagnostics
                   .record(SemanticErrorKind::DuplicateDeclaration, decl.header.line);
            }
        }
        ctx.decls.push(decl);

        match tokens.peek() {
            Some((Token::Poly, _)) => {},
            Some((Token::Start, _)) => return Ok(()),
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected POLY or START, found {tok:?}"),
                                                         line:  *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
}

/// Parses a single polynomial declaration.
///
/// Grammar: `decl := 'POLY' header '=' body ';'`
fn parse_decl<'a, I>(tokens: &mut Peekable<I>, ctx: &mut ParseContext) -> ParseResult<PolyDecl>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::Poly)?;
    let header = parse_header(tokens)?;
    expect(tokens, &Token::Equals)?;
    let body = parse_body(tokens, &header, ctx)?;
    expect(tokens, &Token::Semicolon)?;

    Ok(PolyDecl { header, body })
}

/// Parses a declaration header.
///
/// Grammar: `header := ID [ '(' id-list ')' ]`
///
/// When the parenthesized list is omitted, the single implicit parameter `x`
/// at position 0 is installed instead.
fn parse_header<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<PolyHeader>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (name, line) = parse_identifier(tokens)?;

    let params = if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let params = parse_id_list(tokens)?;
        expect(tokens, &Token::RParen)?;
        params
    } else {
        vec!["x".to_string()]
    };

    Ok(PolyHeader { name, params, line })
}

/// Parses a comma-separated parameter list.
///
/// Grammar: `id-list := ID (',' ID)*`
///
/// Positional indices are assigned left to right starting at 0. Duplicate
/// names are not rejected; lookup resolves to the later position.
fn parse_id_list<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<String>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut params = Vec::new();
    loop {
        let (name, _) = parse_identifier(tokens)?;
        params.push(name);

        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            _ => break,
        }
    }

    Ok(params)
}

/// Parses a polynomial body.
///
/// Grammar: `body := term (addop term)*`
///
/// Each term after the first carries the `+` or `-` written before it; the
/// leading term is `Plus`.
fn parse_body<'a, I>(tokens: &mut Peekable<I>,
                     header: &PolyHeader,
                     ctx: &mut ParseContext)
                     -> ParseResult<Vec<Term>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut terms = vec![parse_term(tokens, header, ctx, AddOperator::Plus)?];

    loop {
        let sign = match tokens.peek() {
            Some((Token::Plus, _)) => AddOperator::Plus,
            Some((Token::Minus, _)) => AddOperator::Minus,
            _ => break,
        };
        tokens.next();
        terms.push(parse_term(tokens, header, ctx, sign)?);
    }

    Ok(terms)
}

/// Parses one term of a polynomial body.
///
/// Grammar: `term := NUM monomial* | monomial+`
///
/// A term with no leading number has coefficient 1, and a bare number
/// carries no monomials; a term with neither is a syntax error.
fn parse_term<'a, I>(tokens: &mut Peekable<I>,
                     header: &PolyHeader,
                     ctx: &mut ParseContext,
                     sign: AddOperator)
                     -> ParseResult<Term>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Number(_), _)) => {
            let (coefficient, _) = parse_number(tokens)?;
            let monomials = if let Some((Token::Identifier(_), _)) = tokens.peek() {
                parse_monomial_list(tokens, header, ctx)?
            } else {
                Vec::new()
            };

            Ok(Term { sign,
                      coefficient,
                      monomials })
        },

        Some((Token::Identifier(_), _)) => Ok(Term { sign,
                                                     coefficient: 1,
                                                     monomials: parse_monomial_list(tokens, header, ctx)?, }),

        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected a coefficient or a parameter, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Grammar: `monomial-list := monomial+`
fn parse_monomial_list<'a, I>(tokens: &mut Peekable<I>,
                              header: &PolyHeader,
                              ctx: &mut ParseContext)
                              -> ParseResult<Vec<Monomial>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut monomials = vec![parse_monomial(tokens, header, ctx)?];
    while let Some((Token::Identifier(_), _)) = tokens.peek() {
        monomials.push(parse_monomial(tokens, header, ctx)?);
    }

    Ok(monomials)
}

/// Parses one monomial.
///
/// Grammar: `monomial := ID [ '^' NUM ]`
///
/// The identifier resolves against the enclosing header's parameter list. An
/// unknown name records `UndeclaredParameter` at the identifier's line and
/// leaves the monomial unresolved; parsing continues, execution will not be
/// reached.
fn parse_monomial<'a, I>(tokens: &mut Peekable<I>,
                         header: &PolyHeader,
                         ctx: &mut ParseContext)
                         -> ParseResult<Monomial>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (name, line) = parse_identifier(tokens)?;

    let param = header.param_index(&name);
    if param.is_none() {
        ctx.diagnostics.record(SemanticErrorKind::UndeclaredParameter, line);
    }

    let exponent = parse_exponent(tokens)?;

    Ok(Monomial { param, exponent })
}

/// Parses the optional exponent of a monomial.
///
/// Grammar: `exponent := '^' NUM`; defaults to 1 when the marker is absent.
fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<u32>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Caret, _)) = tokens.peek() {
        tokens.next();
        let (value, line) = parse_number(tokens)?;
        return i64_to_u32_checked(value, ParseError::LiteralTooLarge { line });
    }

    Ok(1)
}
