//! Diagnostics reported while reading arithmetic prompts and jump lists.
//!
//! Errors are built around the [`Diagnostic`] type: a message with an
//! optional [`ErrorCode`], labeled source spans and help text. All
//! diagnostics from one parse are returned together in a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use abacus_parser::error::{Diagnostic, ErrorCode};
//! # use abacus_parser::Span;
//!
//! let diag = Diagnostic::error("expected an operator between the numbers")
//!     .with_code(ErrorCode::E103)
//!     .with_label(Span::new(2..3), "operator missing here")
//!     .with_help("write one of `+`, `-`, `x` or `/`");
//! assert_eq!(diag.to_string(), "error[E103]: expected an operator between the numbers");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
