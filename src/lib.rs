//! # polycalc
//!
//! polycalc is an interpreter for a small polynomial evaluation language.
//! A program declares named polynomials, then lists statements that read
//! input values into variables and evaluate the polynomials over them,
//! printing one integer per evaluation statement.

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

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::execute,
        lexer::{LexerExtras, Token},
        parser::{context::ParseContext, core::parse_program},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the declaration, statement, call and argument types
/// that represent the syntactic structure of a program as a tree. The tree
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines declaration and statement types for all language constructs.
/// - Attaches metadata (such as source locations) to nodes for error
///   reporting.
/// - Resolves parameter names to positional indices.
pub mod ast;
/// Provides unified error types for parsing, validation and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// semantic checking, or executing a program. It standardizes error
/// reporting and carries detailed information about failures, including
/// error kinds and source lines.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Defines the accumulating semantic diagnostics record consulted before
///   execution.
/// - Attaches line numbers and detailed messages for context.
pub mod error;
/// Orchestrates the entire process of program execution.
///
/// This module ties together lexing, parsing, semantic validation, input
/// reading and evaluation to provide a complete runtime for the language.
/// It exposes the building blocks behind [`interpret`] and [`run`].
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion routines used by the parser,
/// such as narrowing parsed literals into exponent-sized integers without
/// silent data loss.
pub mod util;

/// Parses and executes a program, returning the evaluation results in
/// statement order.
///
/// The source is tokenized up front, parsed into declarations and
/// statements, and semantically validated; if any diagnostic was recorded,
/// the run fails before the first statement executes. Otherwise the
/// statement list is executed against the trailing input literals and one
/// result per evaluation statement is returned.
///
/// # Errors
/// Returns an error if lexing, parsing, semantic validation, or execution
/// fails.
///
/// # Examples
/// ```
/// use polycalc::interpret;
///
/// let source = "POLY F(X) = X^2 + 3; START INPUT A; F(A); 5";
/// assert_eq!(interpret(source).unwrap(), vec![28]);
///
/// // Calling an undeclared polynomial is an error.
/// let source = "POLY F(X) = X; START G(1); 1";
/// assert!(interpret(source).is_err());
/// ```
pub fn interpret(source: &str) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(Box::new(ParseError::UnexpectedToken { token: slice.to_string(),
                                                              line:  lexer.extras.line, }));
        }
    }

    let mut iter = tokens.iter().peekable();
    let mut ctx = ParseContext::new();
    let statements = parse_program(&mut iter, &mut ctx)?;
    let program = ctx.finish(statements)?;

    Ok(execute(&program, &mut iter)?)
}

/// Parses and executes a program, printing one line per evaluation
/// statement, in program order.
///
/// # Errors
/// Returns an error if lexing, parsing, semantic validation, or execution
/// fails; nothing is printed in that case.
pub fn run(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    for result in interpret(source)? {
        println!("{result}");
    }
    Ok(())
}
