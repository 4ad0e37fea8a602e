//! # Abacus Parser
//!
//! Reads the two kinds of text input Abacus accepts: arithmetic prompts such
//! as `7 + 5` or `63 ÷ 9`, and jump lists such as `+3 -2 +5` for number-line
//! diagrams.
//!
//! Both entry points run the same two stages: the lexer turns the text into
//! tokens, then the parser checks the grammar. Every failure is reported as a
//! [`ParseError`](error::ParseError) holding coded diagnostics with source
//! spans.
//!
//! ## Usage
//!
//! ```
//! # use abacus_parser::{Operation, parse_jumps, parse_problem};
//! # use abacus_parser::error::ParseError;
//!
//! fn main() -> Result<(), ParseError> {
//!     let problem = parse_problem("12 − 4")?;
//!     assert_eq!(*problem.operation(), Operation::Subtract);
//!     assert_eq!(problem.to_string(), "12 − 4");
//!
//!     let jumps = parse_jumps("+3, -2, +5")?;
//!     assert_eq!(jumps, vec![3, -2, 5]);
//!     Ok(())
//! }
//! ```

pub mod error;
mod lexer;
mod parser;
mod problem;
mod span;
mod tokens;

pub use problem::{Operation, Problem};
pub use span::{Span, Spanned};

use log::{debug, trace};

use error::ParseError;

/// Parse an arithmetic prompt of the form `<number> <operator> <number>`.
///
/// Numbers may carry a leading sign. The operators `+`, `-`/`−`,
/// `x`/`*`/`×` and `/`/`÷` are recognized; whitespace around them is
/// optional.
///
/// # Errors
///
/// Returns a [`ParseError`] whose diagnostics carry one of the codes
/// `E100` to `E103`.
pub fn parse_problem(source: &str) -> Result<Problem, ParseError> {
    let tokens = lexer::tokenize(source)?;
    trace!(token_count = tokens.len(); "Tokenized problem");

    let problem = parser::build_problem(&tokens, source.len())?;
    debug!(problem = problem.to_string(); "Parsed problem");
    Ok(problem)
}

/// Parse a list of signed jumps separated by commas or whitespace.
///
/// An empty or blank input yields an empty list.
///
/// # Errors
///
/// Returns a [`ParseError`] for unknown characters, stray operators or
/// numbers that do not fit in an `i64`.
pub fn parse_jumps(source: &str) -> Result<Vec<i64>, ParseError> {
    let tokens = lexer::tokenize(source)?;
    trace!(token_count = tokens.len(); "Tokenized jump list");

    let jumps: Vec<i64> = parser::build_jump_list(&tokens, source.len())?
        .into_iter()
        .map(Spanned::into_inner)
        .collect();
    debug!(jumps:?; "Parsed jump list");
    Ok(jumps)
}
