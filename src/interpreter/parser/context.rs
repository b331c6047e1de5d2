use std::collections::HashMap;

use crate::{
    ast::{PolyDecl, Program, Statement},
    error::{Diagnostics, SemanticError},
};

/// Tracks every variable named by an `INPUT` statement and the memory slot
/// assigned to it.
///
/// Slots are handed out in first-use order across the whole program: the
/// first occurrence of a name allocates the next free slot, and later
/// occurrences reuse it.
#[derive(Debug, Default)]
pub struct InputVarTable {
    slots: HashMap<String, usize>,
}

impl InputVarTable {
    /// Returns the slot bound to `name`, allocating the next free slot on
    /// first use.
    pub fn resolve(&mut self, name: &str) -> usize {
        let next = self.slots.len();
        *self.slots.entry(name.to_string()).or_insert(next)
    }

    /// Returns the slot bound to `name`, if an `INPUT` statement has named
    /// it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }

    /// Number of distinct slots allocated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot has been allocated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Stores everything the grammar procedures build up while parsing.
///
/// The context owns the accumulated declarations, the input variable table
/// and the semantic diagnostics, and is threaded by mutable reference
/// through every grammar procedure. [`ParseContext::finish`] consults the
/// diagnostics exactly once and turns the context into an executable
/// [`Program`].
#[derive(Debug, Default)]
pub struct ParseContext {
    /// The declarations, in the order they were parsed.
    pub decls:       Vec<PolyDecl>,
    /// Mapping from input variable names to memory slots.
    pub input_vars:  InputVarTable,
    /// The semantic violations recorded so far.
    pub diagnostics: Diagnostics,
}

impl ParseContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the declaration for `name`, if present. The earliest
    /// declaration wins when duplicates exist.
    #[must_use]
    pub fn find_decl(&self, name: &str) -> Option<&PolyDecl> {
        self.decls.iter().find(|decl| decl.header.name == name)
    }

    /// Finishes parsing: fails with the recorded diagnostics if any
    /// violation was found, otherwise assembles the executable program.
    ///
    /// # Errors
    /// Returns the batched [`SemanticError`] when any violation was
    /// recorded; no statement may execute in that case.
    pub fn finish(self, statements: Vec<Statement>) -> Result<Program, SemanticError> {
        self.diagnostics.into_result()?;

        Ok(Program { slot_count: self.input_vars.len(),
                     decls: self.decls,
                     statements })
    }
}
