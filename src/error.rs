/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, and invalid
/// literals; any of them aborts the run immediately.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while the statement list is
/// executing, such as arithmetic overflow or running out of input values.
pub mod runtime_error;
/// Semantic diagnostics.
///
/// Defines the accumulating record of semantic violations (duplicate
/// declarations, undeclared names, arity mismatches) that the parser fills in
/// while it keeps parsing, and the batched error reported from it before
/// execution.
pub mod semantic_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use semantic_error::{Diagnostics, SemanticError, SemanticErrorKind};
