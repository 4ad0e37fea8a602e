//! Grammar for prompts and jump lists over lexed tokens.
//!
//! ```text
//! problem   = ws? signed ws? operator ws? signed ws? EOF
//! jump_list = ws? (signed (separator signed)*)? ws? EOF
//! signed    = ("+" | "-")? NUMBER
//! separator = ws? "," ws? | ws
//! ```

use winnow::{
    Parser as _,
    combinator::{alt, cut_err, eof, opt, preceded, repeat},
    error::{AddContext, ContextError, ErrMode, ModalResult},
    stream::Stream,
    token::any,
};

use crate::{
    error::{Diagnostic, ErrorCode},
    problem::{Operation, Problem},
    span::{Span, Spanned},
    tokens::{PositionedToken, Token},
};

/// Context attached to parser errors.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Context {
    /// What the parser was looking for.
    Expected(&'static str),
    /// Overrides the error code derived from the failure position.
    Code(ErrorCode),
    /// Exact span to report instead of the token at the failure position.
    At(Span),
    /// A related earlier span, shown as a secondary label.
    After(Span),
}

type Input<'s, 'a> = &'s [PositionedToken<'a>];
type IResult<O> = ModalResult<O, ContextError<Context>>;

/// Build a committed error carrying the given contexts.
fn cut_with(input: &Input<'_, '_>, contexts: &[Context]) -> ErrMode<ContextError<Context>> {
    let checkpoint = input.checkpoint();
    let error = contexts
        .iter()
        .cloned()
        .fold(ContextError::new(), |error, context| {
            error.add_context(input, &checkpoint, context)
        });
    ErrMode::Cut(error)
}

fn whitespace(input: &mut Input<'_, '_>) -> IResult<()> {
    any.verify(|t: &PositionedToken<'_>| t.token == Token::Whitespace)
        .void()
        .parse_next(input)
}

fn ws0(input: &mut Input<'_, '_>) -> IResult<()> {
    repeat(0.., whitespace).parse_next(input)
}

fn comma(input: &mut Input<'_, '_>) -> IResult<()> {
    any.verify(|t: &PositionedToken<'_>| t.token == Token::Comma)
        .void()
        .parse_next(input)
}

/// Parse a sign token; `true` means negative.
fn sign(input: &mut Input<'_, '_>) -> IResult<Spanned<bool>> {
    any.verify_map(|t: PositionedToken<'_>| match t.token {
        Token::Plus => Some(Spanned::new(false, t.span)),
        Token::Minus => Some(Spanned::new(true, t.span)),
        _ => None,
    })
    .parse_next(input)
}

fn digits<'a>(input: &mut Input<'_, 'a>) -> IResult<Spanned<&'a str>> {
    any.verify_map(|t: PositionedToken<'a>| match t.token {
        Token::Number(digits) => Some(Spanned::new(digits, t.span)),
        _ => None,
    })
    .parse_next(input)
}

/// Parse an optionally signed integer. The sign must touch the digits.
fn signed_number(input: &mut Input<'_, '_>) -> IResult<Spanned<i64>> {
    let start = input.checkpoint();
    let (sign, digits) = match (opt(sign), digits).parse_next(input) {
        Ok(parts) => parts,
        Err(e) => {
            input.reset(&start);
            return Err(e);
        }
    };

    let negative = sign.is_some_and(|s| *s.inner());
    let span = sign.map_or(digits.span(), |s| s.span().union(digits.span()));
    let text = if negative {
        format!("-{}", digits.inner())
    } else {
        digits.inner().to_string()
    };

    match text.parse::<i64>() {
        Ok(value) => Ok(Spanned::new(value, span)),
        Err(_) => Err(cut_with(
            input,
            &[Context::Code(ErrorCode::E102), Context::At(span)],
        )),
    }
}

fn operator(input: &mut Input<'_, '_>) -> IResult<Spanned<Operation>> {
    any.verify_map(|t: PositionedToken<'_>| {
        let operation = match t.token {
            Token::Plus => Operation::Add,
            Token::Minus => Operation::Subtract,
            Token::Times => Operation::Multiply,
            Token::Divide => Operation::Divide,
            _ => return None,
        };
        Some(Spanned::new(operation, t.span))
    })
    .parse_next(input)
}

fn separator(input: &mut Input<'_, '_>) -> IResult<()> {
    alt(((ws0, comma, ws0).void(), whitespace)).parse_next(input)
}

fn problem(input: &mut Input<'_, '_>) -> IResult<Problem> {
    ws0(input)?;
    let lhs = signed_number
        .context(Context::Expected("a number"))
        .parse_next(input)?;
    ws0(input)?;

    // Two numbers in a row, or a lone number, means the operator is missing.
    match input.first() {
        None => {
            let end = lhs.span().end();
            return Err(cut_with(
                input,
                &[
                    Context::Code(ErrorCode::E103),
                    Context::At(Span::new(end..end)),
                    Context::After(lhs.span()),
                ],
            ));
        }
        Some(next) if matches!(next.token, Token::Number(_)) => {
            return Err(cut_with(
                input,
                &[
                    Context::Code(ErrorCode::E103),
                    Context::At(next.span),
                    Context::After(lhs.span()),
                ],
            ));
        }
        Some(_) => {}
    }

    let operation = cut_err(operator.context(Context::Expected("an operator"))).parse_next(input)?;
    ws0(input)?;
    let rhs = cut_err(signed_number.context(Context::Expected("a number"))).parse_next(input)?;
    ws0(input)?;
    cut_err(eof.void().context(Context::Expected("end of input"))).parse_next(input)?;

    Ok(Problem::new(lhs, operation, rhs))
}

fn jump_list(input: &mut Input<'_, '_>) -> IResult<Vec<Spanned<i64>>> {
    ws0(input)?;
    let mut jumps = Vec::new();
    if let Some(first) = opt(signed_number).parse_next(input)? {
        jumps.push(first);
        let rest: Vec<_> = repeat(0.., preceded(separator, signed_number)).parse_next(input)?;
        jumps.extend(rest);
    }
    ws0(input)?;
    cut_err(eof.void().context(Context::Expected("a signed number"))).parse_next(input)?;
    Ok(jumps)
}

/// Convert a winnow error into a [`Diagnostic`].
///
/// `position` is the index of the token the parser stopped at and
/// `source_len` is used to point at the end of input.
fn convert_error(
    error: ErrMode<ContextError<Context>>,
    tokens: &[PositionedToken<'_>],
    position: usize,
    source_len: usize,
) -> Diagnostic {
    let end_of_input = Span::new(source_len..source_len);
    let found = tokens.get(position);

    let context = match error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e,
        ErrMode::Incomplete(_) => ContextError::new(),
    };

    let code = context
        .context()
        .find_map(|ctx| match ctx {
            Context::Code(code) => Some(*code),
            _ => None,
        })
        .unwrap_or(if found.is_some() {
            ErrorCode::E100
        } else {
            ErrorCode::E101
        });
    let span = context
        .context()
        .find_map(|ctx| match ctx {
            Context::At(span) => Some(*span),
            _ => None,
        })
        .or_else(|| found.map(|t| t.span))
        .unwrap_or(end_of_input);
    let expected = context
        .context()
        .find_map(|ctx| match ctx {
            Context::Expected(what) => Some(*what),
            _ => None,
        })
        .unwrap_or("a number");
    let related = context.context().find_map(|ctx| match ctx {
        Context::After(span) => Some(*span),
        _ => None,
    });

    match code {
        ErrorCode::E100 => {
            let found = found.map_or_else(|| "end of input".to_string(), |t| t.token.to_string());
            Diagnostic::error(format!("expected {expected}, found {found}"))
                .with_code(code)
                .with_label(span, code.description())
                .with_help("write a prompt like `7 + 5` or a jump list like `+3 -2`")
        }
        ErrorCode::E101 => Diagnostic::error(format!("input ended, expected {expected}"))
            .with_code(code)
            .with_label(span, code.description())
            .with_help("finish the prompt, e.g. `7 + 5`"),
        ErrorCode::E102 => Diagnostic::error("number is too large")
            .with_code(code)
            .with_label(span, code.description())
            .with_help(format!(
                "numbers must lie between {} and {}",
                i64::MIN,
                i64::MAX
            )),
        ErrorCode::E103 => {
            let diagnostic = Diagnostic::error("expected an operator between the numbers")
                .with_code(code)
                .with_label(span, "operator missing here");
            match related {
                Some(lhs) => diagnostic.with_secondary_label(lhs, "after this number"),
                None => diagnostic,
            }
            .with_help("write one of `+`, `-`, `x` or `/`")
        }
    }
}

/// Parse an arithmetic prompt from tokens.
pub(crate) fn build_problem(
    tokens: &[PositionedToken<'_>],
    source_len: usize,
) -> Result<Problem, Diagnostic> {
    let mut input = tokens;
    problem
        .parse_next(&mut input)
        .map_err(|e| convert_error(e, tokens, tokens.len() - input.len(), source_len))
}

/// Parse a list of signed jumps from tokens.
pub(crate) fn build_jump_list(
    tokens: &[PositionedToken<'_>],
    source_len: usize,
) -> Result<Vec<Spanned<i64>>, Diagnostic> {
    let mut input = tokens;
    jump_list
        .parse_next(&mut input)
        .map_err(|e| convert_error(e, tokens, tokens.len() - input.len(), source_len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn problem_of(source: &str) -> Result<Problem, Diagnostic> {
        let tokens = tokenize(source).expect("lexes");
        build_problem(&tokens, source.len())
    }

    fn jumps_of(source: &str) -> Result<Vec<i64>, Diagnostic> {
        let tokens = tokenize(source).expect("lexes");
        build_jump_list(&tokens, source.len())
            .map(|jumps| jumps.into_iter().map(Spanned::into_inner).collect())
    }

    #[test]
    fn test_signed_number() {
        let tokens = tokenize("-12").unwrap();
        let mut input = tokens.as_slice();
        let number = signed_number(&mut input).unwrap();
        assert_eq!(*number.inner(), -12);
        assert_eq!(number.span(), Span::new(0..3));
        assert!(input.is_empty());
    }

    #[test]
    fn test_sign_must_touch_digits() {
        let tokens = tokenize("- 4").unwrap();
        let mut input = tokens.as_slice();
        assert!(signed_number(&mut input).is_err());
    }

    #[test]
    fn test_problem_operations() {
        let cases = [
            ("7 + 5", 7, Operation::Add, 5),
            ("12 - 4", 12, Operation::Subtract, 4),
            ("12 − 4", 12, Operation::Subtract, 4),
            ("3 x 4", 3, Operation::Multiply, 4),
            ("3*4", 3, Operation::Multiply, 4),
            ("3 × 4", 3, Operation::Multiply, 4),
            ("63 / 9", 63, Operation::Divide, 9),
            ("63÷9", 63, Operation::Divide, 9),
            ("  20 ÷ 6  ", 20, Operation::Divide, 6),
        ];
        for (source, lhs, operation, rhs) in cases {
            let problem = problem_of(source).unwrap_or_else(|e| panic!("{source}: {e}"));
            assert_eq!(*problem.lhs().inner(), lhs, "{source}");
            assert_eq!(*problem.operation().inner(), operation, "{source}");
            assert_eq!(*problem.rhs().inner(), rhs, "{source}");
        }
    }

    #[test]
    fn test_problem_negative_operand() {
        let problem = problem_of("5 - -3").unwrap();
        assert_eq!(*problem.rhs().inner(), -3);
        assert_eq!(problem.rhs().span(), Span::new(4..6));
    }

    #[test]
    fn test_problem_missing_operator() {
        let err = problem_of("7 5").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E103));
        assert_eq!(err.primary_span(), Some(Span::new(2..3)));
        let first_number = &err.labels()[1];
        assert!(!first_number.is_primary());
        assert_eq!(first_number.span(), Span::new(0..1));

        let err = problem_of("7").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E103));
        assert_eq!(err.primary_span(), Some(Span::new(1..1)));
    }

    #[test]
    fn test_problem_incomplete() {
        let err = problem_of("7 +").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E101));
        assert_eq!(err.primary_span(), Some(Span::new(3..3)));

        let err = problem_of("").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E101));
    }

    #[test]
    fn test_problem_unexpected_token() {
        let err = problem_of("7 + + 5").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E100));
        assert_eq!(err.primary_span(), Some(Span::new(4..5)));

        let err = problem_of("7 + 5 6").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E100));
        assert!(err.message().contains("end of input"));
    }

    #[test]
    fn test_number_out_of_range() {
        let err = problem_of("99999999999999999999 + 1").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E102));
        assert_eq!(err.primary_span(), Some(Span::new(0..20)));

        let min = problem_of("-9223372036854775808 + 0").unwrap();
        assert_eq!(*min.lhs().inner(), i64::MIN);
    }

    #[test]
    fn test_jump_list_separators() {
        assert_eq!(jumps_of("+3 -2 +5").unwrap(), vec![3, -2, 5]);
        assert_eq!(jumps_of("3,-2,5").unwrap(), vec![3, -2, 5]);
        assert_eq!(jumps_of(" 1 , 1,1 ").unwrap(), vec![1, 1, 1]);
        assert_eq!(jumps_of("+0").unwrap(), vec![0]);
        assert!(jumps_of("").unwrap().is_empty());
        assert!(jumps_of("   ").unwrap().is_empty());
    }

    #[test]
    fn test_jump_list_errors() {
        let err = jumps_of("3 x 4").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E100));
        assert_eq!(err.primary_span(), Some(Span::new(2..3)));

        let err = jumps_of("1, 99999999999999999999").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E102));
    }
}
