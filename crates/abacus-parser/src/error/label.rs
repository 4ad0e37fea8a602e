//! Spans of the input annotated with a short note.

use crate::span::Span;

/// A note attached to part of the input.
///
/// The primary label points at the problem itself ("operator missing
/// here"); secondary labels point at what led up to it ("after this
/// number").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self::new(span, message.into(), true)
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self::new(span, message.into(), false)
    }

    fn new(span: Span, message: String, primary: bool) -> Self {
        Self {
            span,
            message,
            primary,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }

    pub fn is_secondary(&self) -> bool {
        !self.primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_kinds() {
        let missing = Label::primary(Span::new(2..3), "operator missing here");
        assert_eq!((missing.span().start(), missing.span().end()), (2, 3));
        assert_eq!(missing.message(), "operator missing here");
        assert!(missing.is_primary());

        let before = Label::secondary(Span::new(0..1), "after this number");
        assert!(before.is_secondary());
        assert_ne!(missing, before);
    }
}
