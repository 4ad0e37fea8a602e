//! Lexical analysis of prompts and jump lists.
//!
//! [`tokenize`] splits the input into numbers, operator symbols, commas and
//! whitespace. Every character that fits none of these is reported, so a
//! prompt with several typos yields all of them at once.

use winnow::{
    Parser as _,
    combinator::alt,
    error::{ContextError, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{one_of, take_while},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
    tokens::{PositionedToken, Token},
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError>;

/// Parse a run of decimal digits.
fn number<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., |c: char| c.is_ascii_digit())
        .map(Token::Number)
        .parse_next(input)
}

/// Parse one operator or separator symbol, including the typographic forms.
fn symbol<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    alt((
        '+'.value(Token::Plus),
        one_of(['-', '−']).value(Token::Minus),
        one_of(['x', 'X', '*', '×']).value(Token::Times),
        one_of(['/', '÷']).value(Token::Divide),
        ','.value(Token::Comma),
    ))
    .parse_next(input)
}

fn whitespace<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., char::is_whitespace)
        .value(Token::Whitespace)
        .parse_next(input)
}

/// Parse a single token with position tracking
fn positioned_token<'a>(input: &mut Input<'a>) -> IResult<PositionedToken<'a>> {
    let start_pos = input.current_token_start();

    let token = alt((number, symbol, whitespace)).parse_next(input)?;

    let end_pos = input.current_token_start();
    Ok(PositionedToken::new(token, Span::new(start_pos..end_pos)))
}

/// Split `input` into tokens, collecting a diagnostic for every character
/// that cannot start a token.
pub(crate) fn tokenize(input: &str) -> Result<Vec<PositionedToken<'_>>, ParseError> {
    let mut input = LocatingSlice::new(input);
    let mut tokens = Vec::new();
    let mut diagnostics = DiagnosticCollector::new();

    while !input.is_empty() {
        match positioned_token(&mut input) {
            Ok(token) => tokens.push(token),
            Err(_) => {
                let error_pos = input.current_token_start();
                if let Some(c) = input.next_token() {
                    let span = Span::new(error_pos..error_pos + c.len_utf8());
                    diagnostics.emit(
                        Diagnostic::error(format!("unexpected character `{c}`"))
                            .with_code(ErrorCode::E100)
                            .with_label(span, ErrorCode::E100.description())
                            .with_help("use digits and one of `+`, `-`, `x` or `/`"),
                    );
                }
            }
        }
    }

    diagnostics.finish().map(|()| tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token<'_>> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_ascii_prompt() {
        assert_eq!(
            kinds("12 - 4"),
            vec![
                Token::Number("12"),
                Token::Whitespace,
                Token::Minus,
                Token::Whitespace,
                Token::Number("4"),
            ]
        );
    }

    #[test]
    fn test_typographic_operators() {
        assert_eq!(
            kinds("3×4÷2−1"),
            vec![
                Token::Number("3"),
                Token::Times,
                Token::Number("4"),
                Token::Divide,
                Token::Number("2"),
                Token::Minus,
                Token::Number("1"),
            ]
        );
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let tokens = tokenize("7 × 5").unwrap();
        assert_eq!(tokens[2].span, Span::new(2..4));
        assert_eq!(tokens[4].span, Span::new(5..6));
    }

    #[test]
    fn test_whitespace_run_is_one_token() {
        assert_eq!(
            kinds("+3 \t -2,5"),
            vec![
                Token::Plus,
                Token::Number("3"),
                Token::Whitespace,
                Token::Minus,
                Token::Number("2"),
                Token::Comma,
                Token::Number("5"),
            ]
        );
    }

    #[test]
    fn test_reports_every_bad_character() {
        let err = tokenize("7 ? 5 = a").unwrap_err();
        let diagnostics = err.diagnostics();
        assert_eq!(diagnostics.len(), 3);
        assert!(diagnostics.iter().all(|d| d.code() == Some(ErrorCode::E100)));
        assert_eq!(diagnostics[0].primary_span(), Some(Span::new(2..3)));
        assert_eq!(diagnostics[0].message(), "unexpected character `?`");
    }
}
