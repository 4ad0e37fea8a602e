//! The ParseError type for wrapping parsing diagnostics.

use thiserror::Error;

use crate::error::Diagnostic;

/// Error returned when a prompt or jump list cannot be read.
///
/// Wraps one or more diagnostics; its message is the first diagnostic plus a
/// count of the rest.
#[derive(Debug, Error)]
#[error("{}", self.summary())]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Create a new parse error from diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn summary(&self) -> String {
        match self.diagnostics.split_first() {
            Some((first, [])) => first.to_string(),
            Some((first, rest)) => format!("{first} (+{} more)", rest.len()),
            None => String::new(),
        }
    }
}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}
