use std::iter::Peekable;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Token},
};

/// Lazily materializes the integer literals that trail the statement
/// section.
///
/// Literals are pulled in batches rather than all at once: after each read,
/// the running count of literals is compared against the number of declared
/// polynomials, and reading stops once the count is an exact multiple of it
/// or the tail is exhausted. Execution consumes values through a cursor and
/// re-enters the reader whenever it runs ahead of what has been read; the
/// materialized sequence is append-only and never rewound.
#[derive(Debug)]
pub struct InputReader {
    values: Vec<i64>,
    cursor: usize,
    batch:  usize,
    line:   usize,
}

impl InputReader {
    /// Creates a reader batching on `decl_count` declared polynomials.
    #[must_use]
    pub fn new(decl_count: usize) -> Self {
        Self { values: Vec::new(),
               cursor: 0,
               batch:  decl_count.max(1),
               line:   0, }
    }

    /// Reads the first batch of literals.
    ///
    /// A program must supply at least one input value; a tail that ends
    /// before the first literal is an error.
    ///
    /// # Errors
    /// - `MissingInputValue` if the tail contains no literal at all.
    /// - `UnexpectedInputToken` if the tail holds anything other than an
    ///   integer literal.
    pub fn prime<'a, I>(&mut self, tokens: &mut Peekable<I>) -> EvalResult<()>
        where I: Iterator<Item = &'a (Token, usize)>
    {
        self.refill(tokens)
    }

    /// Returns the next input value, re-entering the tail when every value
    /// read so far has already been consumed.
    ///
    /// # Parameters
    /// - `tokens`: Token iterator positioned inside the literal tail.
    /// - `line`: Source line of the statement demanding the value.
    ///
    /// # Errors
    /// - `MissingInputValue` if the tail cannot supply another value.
    /// - `UnexpectedInputToken` if the tail holds anything other than an
    ///   integer literal.
    pub fn next_value<'a, I>(&mut self, tokens: &mut Peekable<I>, line: usize) -> EvalResult<i64>
        where I: Iterator<Item = &'a (Token, usize)>
    {
        if self.cursor == self.values.len() {
            self.refill(tokens)?;
        }

        match self.values.get(self.cursor) {
            Some(value) => {
                self.cursor += 1;
                Ok(*value)
            },
            None => Err(RuntimeError::MissingInputValue { line }),
        }
    }

    /// Reads literals until the running count is a multiple of the batch
    /// size, or the tail ends.
    fn refill<'a, I>(&mut self, tokens: &mut Peekable<I>) -> EvalResult<()>
        where I: Iterator<Item = &'a (Token, usize)>
    {
        loop {
            match tokens.next() {
                Some((Token::Number(value), line)) => {
                    self.line = *line;
                    self.values.push(*value);
                },
                Some((tok, line)) => {
                    return Err(RuntimeError::UnexpectedInputToken { token: format!("{tok:?}"),
                                                                    line:  *line, });
                },
                None => return Err(RuntimeError::MissingInputValue { line: self.line }),
            }

            match tokens.peek() {
                Some((Token::Number(_), _)) => {
                    if self.values.len() % self.batch == 0 {
                        return Ok(());
                    }
                },
                Some((tok, line)) => {
                    return Err(RuntimeError::UnexpectedInputToken { token: format!("{tok:?}"),
                                                                    line:  *line, });
                },
                None => return Ok(()),
            }
        }
    }
}
