/// The evaluator module executes parsed programs and computes results.
///
/// The evaluator walks the statement list, serves input values into memory,
/// evaluates polynomial calls as signed sums of term products, and reports
/// runtime errors such as arithmetic overflow.
///
/// # Responsibilities
/// - Executes statements strictly in program order.
/// - Resolves call arguments, including nested calls, and binds them to
///   parameters positionally.
/// - Reads the trailing input literals lazily, in batches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, identifiers, keywords, and punctuation. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric literals, identifiers, and the section keywords.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds declaration and statement structures from
/// tokens.
///
/// The parser processes the token stream produced by the lexer through one
/// recursive-descent procedure per grammar rule, resolving identifiers
/// against the visible parameter list or the input-variable table as it
/// goes, and recording semantic violations without stopping.
///
/// # Responsibilities
/// - Converts tokens into declarations, statements, calls and arguments.
/// - Validates grammar and syntax, reporting errors with location info.
/// - Accumulates semantic diagnostics consulted before execution.
pub mod parser;
