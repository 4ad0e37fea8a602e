//! Tokens produced by the lexer.

use std::fmt;

use crate::span::Span;

/// A lexical unit of a prompt or jump list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// A run of ASCII digits, without sign.
    Number(&'a str),
    /// `+`
    Plus,
    /// `-` or `−`
    Minus,
    /// `x`, `X`, `*` or `×`
    Times,
    /// `/` or `÷`
    Divide,
    /// `,`
    Comma,
    /// Any run of whitespace.
    Whitespace,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(digits) => write!(f, "number `{digits}`"),
            Token::Plus => write!(f, "`+`"),
            Token::Minus => write!(f, "`-`"),
            Token::Times => write!(f, "`×`"),
            Token::Divide => write!(f, "`÷`"),
            Token::Comma => write!(f, "`,`"),
            Token::Whitespace => write!(f, "whitespace"),
        }
    }
}

/// A token with its location in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PositionedToken<'a> {
    pub token: Token<'a>,
    pub span: Span,
}

impl<'a> PositionedToken<'a> {
    pub(crate) fn new(token: Token<'a>, span: Span) -> Self {
        Self { token, span }
    }
}
