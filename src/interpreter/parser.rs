/// Parse state threaded through the grammar procedures.
///
/// Declares the `ParseContext` owning the accumulated declarations, the
/// input variable table and the semantic diagnostics, so that no grammar
/// procedure relies on ambient state.
pub mod context;

/// Core parsing logic.
///
/// Contains the top-level `program` rule and the `ParseResult` alias used
/// by every grammar procedure.
pub mod core;

/// Declaration-section parsing.
///
/// Implements the rules for polynomial declarations: headers, parameter
/// lists, bodies, terms, monomials and exponents.
pub mod decl;

/// Statement-section parsing.
///
/// Implements the rules for input and evaluation statements, calls,
/// and arguments, including the nested-call lookahead.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides the `expect`, identifier and number primitives shared by the
/// grammar procedures.
pub mod utils;
