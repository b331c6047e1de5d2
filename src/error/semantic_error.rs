use std::collections::BTreeSet;

/// The kinds of semantic violations the parser can record.
///
/// Unlike syntax errors, these do not stop parsing: the parser records them
/// and keeps going, and the run fails before the first statement executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticErrorKind {
    /// Two declarations share a name.
    DuplicateDeclaration,
    /// A body identifier is not a parameter of the enclosing header.
    UndeclaredParameter,
    /// A call references a name with no matching declaration.
    UndeclaredPolynomial,
    /// A call's argument count does not match the declared parameter count.
    ArityMismatch,
    /// A variable argument never appeared in an `INPUT` statement.
    UndeclaredVariable,
}

/// Collects semantic violations found while parsing.
///
/// Holds the most recently recorded kind together with every offending
/// source line seen so far. The record is consulted exactly once, after
/// parsing completes and before execution begins.
#[derive(Debug, Default)]
pub struct Diagnostics {
    kind:  Option<SemanticErrorKind>,
    lines: BTreeSet<usize>,
}

impl Diagnostics {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a semantic violation at the given source line.
    ///
    /// A later violation replaces the recorded kind while the lines keep
    /// accumulating, with one exception: an arity mismatch neither displaces
    /// a different recorded kind nor contributes its line while one is
    /// recorded.
    pub fn record(&mut self, kind: SemanticErrorKind, line: usize) {
        if kind == SemanticErrorKind::ArityMismatch
           && !matches!(self.kind, None | Some(SemanticErrorKind::ArityMismatch))
        {
            return;
        }

        self.kind = Some(kind);
        self.lines.insert(line);
    }

    /// Consumes the record, failing with a [`SemanticError`] if any
    /// violation was recorded.
    ///
    /// # Errors
    /// Returns the final recorded kind together with the sorted,
    /// deduplicated set of offending lines.
    pub fn into_result(self) -> Result<(), SemanticError> {
        match self.kind {
            Some(kind) => Err(SemanticError { kind,
                                              lines: self.lines.into_iter().collect(), }),
            None => Ok(()),
        }
    }
}

/// A reported semantic failure: the final recorded kind and the sorted,
/// deduplicated source lines involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticError {
    /// The kind of violation being reported.
    pub kind:  SemanticErrorKind,
    /// The offending source lines, ascending, each present once.
    pub lines: Vec<usize>,
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self.kind {
            SemanticErrorKind::DuplicateDeclaration => "polynomial is declared more than once",
            SemanticErrorKind::UndeclaredParameter => {
                "identifier is not a parameter of the enclosing polynomial"
            },
            SemanticErrorKind::UndeclaredPolynomial => "call to an undeclared polynomial",
            SemanticErrorKind::ArityMismatch => "wrong number of arguments",
            SemanticErrorKind::UndeclaredVariable => {
                "variable was never the target of an INPUT statement"
            },
        };

        let lines = self.lines
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" ");

        if self.lines.len() == 1 {
            write!(f, "Error on line {lines}: {description}.")
        } else {
            write!(f, "Error on lines {lines}: {description}.")
        }
    }
}

impl std::error::Error for SemanticError {}
