use abacus_parser::{Operation, Span, error::ErrorCode, parse_jumps, parse_problem};
use proptest::prelude::*;

fn first_code(result: Result<impl std::fmt::Debug, abacus_parser::error::ParseError>) -> ErrorCode {
    let err = result.expect_err("input should be rejected");
    err.diagnostics()[0].code().expect("diagnostic has a code")
}

#[test]
fn parses_all_four_operations() {
    let cases = [
        ("7 + 5", Operation::Add),
        ("12 − 4", Operation::Subtract),
        ("3 x 4", Operation::Multiply),
        ("63 ÷ 9", Operation::Divide),
    ];
    for (source, expected) in cases {
        let problem = parse_problem(source).unwrap();
        assert_eq!(*problem.operation(), expected, "{source}");
        assert_eq!(problem.to_string(), source.replace('x', "×"));
    }
}

#[test]
fn reports_missing_operator() {
    let err = parse_problem("7 5").unwrap_err();
    let diagnostic = &err.diagnostics()[0];
    assert_eq!(diagnostic.code(), Some(ErrorCode::E103));
    assert_eq!(diagnostic.primary_span(), Some(Span::new(2..3)));
    assert!(diagnostic.help().is_some());
}

#[test]
fn reports_incomplete_input() {
    assert_eq!(first_code(parse_problem("7 +")), ErrorCode::E101);
}

#[test]
fn reports_number_out_of_range() {
    assert_eq!(
        first_code(parse_problem("123456789012345678901234 + 1")),
        ErrorCode::E102
    );
}

#[test]
fn reports_every_unknown_character() {
    let err = parse_problem("7 ? 5 !").unwrap_err();
    assert_eq!(err.diagnostics().len(), 2);
    assert!(
        err.diagnostics()
            .iter()
            .all(|d| d.code() == Some(ErrorCode::E100))
    );
    assert!(err.to_string().contains("(+1 more)"));
}

#[test]
fn parses_jump_lists() {
    assert_eq!(parse_jumps("+3 -2 +5").unwrap(), vec![3, -2, 5]);
    assert_eq!(parse_jumps("3,-2,5").unwrap(), vec![3, -2, 5]);
    assert_eq!(parse_jumps("").unwrap(), Vec::<i64>::new());
}

#[test]
fn rejects_operators_in_jump_lists() {
    assert_eq!(first_code(parse_jumps("3 x 4")), ErrorCode::E100);
}

proptest! {
    #[test]
    fn jump_lists_keep_their_values(jumps in prop::collection::vec(-1000i64..1000, 0..12)) {
        let source = jumps
            .iter()
            .map(|j| format!("{j:+}"))
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(parse_jumps(&source).unwrap(), jumps);
    }

    #[test]
    fn problems_keep_their_operands(lhs in -500i64..500, rhs in 0i64..500) {
        let problem = parse_problem(&format!("{lhs} + {rhs}")).unwrap();
        prop_assert_eq!(*problem.lhs().inner(), lhs);
        prop_assert_eq!(*problem.rhs().inner(), rhs);
    }
}
