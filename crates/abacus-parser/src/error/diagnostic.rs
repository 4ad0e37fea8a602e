//! The core diagnostic type.

use std::fmt;

use crate::{
    error::{ErrorCode, Label},
    span::Span,
};

/// An error in the input, with source locations.
///
/// # Example
///
/// ```text
/// error[E103]: expected an operator between the numbers
///   |
/// 1 | 7 5
///   |   ^ operator missing here
///   |
///   = help: write one of `+`, `-`, `x` or `/`
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// The span of the first primary label, if any.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.is_primary())
            .map(Label::span)
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "error[{code}]: {}", self.message),
            None => write!(f, "error: {}", self.message),
        }
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_defaults() {
        let diag = Diagnostic::error("unexpected input");

        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.primary_span().is_none());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_builder_chain() {
        let diag = Diagnostic::error("expected an operator between the numbers")
            .with_code(ErrorCode::E103)
            .with_secondary_label(Span::new(0..1), "first number")
            .with_label(Span::new(2..3), "operator missing here")
            .with_help("write one of `+`, `-`, `x` or `/`");

        assert_eq!(diag.code(), Some(ErrorCode::E103));
        assert_eq!(diag.labels().len(), 2);
        assert_eq!(diag.primary_span(), Some(Span::new(2..3)));
        assert_eq!(diag.help(), Some("write one of `+`, `-`, `x` or `/`"));
    }

    #[test]
    fn test_diagnostic_display() {
        let with_code = Diagnostic::error("number out of range").with_code(ErrorCode::E102);
        assert_eq!(with_code.to_string(), "error[E102]: number out of range");

        let without_code = Diagnostic::error("leading zeros");
        assert_eq!(without_code.to_string(), "error: leading zeros");
    }
}
