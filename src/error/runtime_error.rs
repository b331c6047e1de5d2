#[derive(Debug)]
/// Represents all errors that can occur during execution.
pub enum RuntimeError {
    /// Evaluated a call to a polynomial that has no declaration.
    UnknownPolynomial {
        /// The name of the polynomial.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An argument referenced a variable with no memory slot.
    UnboundVariable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A monomial referenced a parameter with no bound value.
    UnboundParameter {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The input tail ran out of values.
    MissingInputValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A token other than an integer literal appeared in the input tail.
    UnexpectedInputToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPolynomial { name, line } => {
                write!(f, "Error on line {line}: Unknown polynomial {name}.")
            },

            Self::UnboundVariable { line } => {
                write!(f, "Error on line {line}: Variable has no memory slot.")
            },

            Self::UnboundParameter { line } => {
                write!(f, "Error on line {line}: Parameter has no bound value.")
            },

            Self::Overflow { line } => {
                write!(f, "Error on line {line}: Arithmetic overflow.")
            },

            Self::MissingInputValue { line } => {
                write!(f, "Error on line {line}: Ran out of input values.")
            },

            Self::UnexpectedInputToken { token, line } => {
                write!(f, "Error on line {line}: Expected an input value, found {token}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
