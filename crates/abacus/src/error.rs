//! Error types for Abacus operations.
//!
//! [`AbacusError`] is the single error type returned by the public API.
//! Figure construction itself never fails: out-of-range inputs are
//! normalized instead. Errors come from configuration, prompt parsing and
//! export.

use std::io;

use thiserror::Error;

use abacus_parser::error::ParseError;

/// The main error type for Abacus operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the prompt next to the parser diagnostics so
/// their spans can be shown against the original text.
#[derive(Debug, Error)]
pub enum AbacusError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}

impl AbacusError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
