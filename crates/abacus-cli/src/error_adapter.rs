//! Bridges [`AbacusError`] to miette so the CLI can print rich reports.
//!
//! A parse error may hold several diagnostics. Each one becomes its own
//! [`Reportable`] that shows the prompt with the offending spans underlined.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use abacus::AbacusError;
use abacus_parser::{Span, error::Diagnostic};

/// One report for miette to render.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parser diagnostic together with the text it points into.
    Diagnostic { diag: &'a Diagnostic, src: &'a str },
    /// Any other error, reported without source context.
    Error(&'a AbacusError),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic { diag, .. } => f.write_str(diag.message()),
            Reportable::Error(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic { .. } => None,
            Reportable::Error(err) => std::error::Error::source(*err),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic { diag, .. } => diag
                .code()
                .map(|code| Box::new(code) as Box<dyn fmt::Display>),
            Reportable::Error(err) => Some(Box::new(error_code(err))),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic { diag, .. } => diag
                .help()
                .map(|help| Box::new(help) as Box<dyn fmt::Display>),
            Reportable::Error(AbacusError::Config(_)) => Some(Box::new(
                "check the [style] and [render] sections of the configuration file",
            )),
            Reportable::Error(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            Reportable::Diagnostic { src, .. } => Some(src as &dyn SourceCode),
            Reportable::Error(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let Reportable::Diagnostic { diag, .. } = self else {
            return None;
        };
        if diag.labels().is_empty() {
            return None;
        }

        Some(Box::new(diag.labels().iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

fn error_code(err: &AbacusError) -> &'static str {
    match err {
        AbacusError::Io(_) => "abacus::io",
        AbacusError::Config(_) => "abacus::config",
        AbacusError::Parse { .. } => "abacus::parse",
        AbacusError::Export(_) => "abacus::export",
    }
}

fn span_to_miette(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert an [`AbacusError`] into the reports to print.
///
/// A parse error yields one [`Reportable`] per diagnostic; every other
/// error yields exactly one.
pub fn to_reportables(err: &AbacusError) -> Vec<Reportable<'_>> {
    match err {
        AbacusError::Parse {
            err: parse_err,
            src,
        } => parse_err
            .diagnostics()
            .iter()
            .map(|diag| Reportable::Diagnostic {
                diag,
                src: src.as_str(),
            })
            .collect(),
        _ => vec![Reportable::Error(err)],
    }
}
