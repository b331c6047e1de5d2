#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
///
/// These are fatal syntax errors: the grammar rule being matched cannot
/// continue, so the whole run is abandoned as soon as one is raised.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A literal value was too large to be represented safely.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
