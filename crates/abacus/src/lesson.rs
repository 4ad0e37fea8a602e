//! Ready-made lessons: two titled figures per operation.
//!
//! A lesson pairs a concrete model (dots, an array, groups) with the same
//! operation acted out on a number line. Lessons only produce requests;
//! [`DiagramBuilder::lesson`](crate::DiagramBuilder::lesson) draws them.

use std::fmt;

use log::{debug, warn};

use abacus_parser::{Operation, Problem};

use crate::request::{
    ArrayRequest, CombineRequest, DiagramRequest, DotsMode, GroupingRequest, NumberLineRequest,
};

/// Upper bound on repeated hops in a lesson number line.
pub const MAX_LESSON_HOPS: i64 = 1000;

/// Which lesson a [`Lesson`] teaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LessonKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Demo,
}

impl LessonKind {
    /// Lowercase name, used for output file names.
    pub fn name(self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::Multiplication => "multiplication",
            Self::Division => "division",
            Self::Demo => "demo",
        }
    }
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named sequence of figure requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    kind: LessonKind,
    requests: Vec<DiagramRequest>,
}

impl Lesson {
    fn new(kind: LessonKind, requests: Vec<DiagramRequest>) -> Self {
        debug!(lesson = kind.name(), figures = requests.len(); "Lesson prepared");
        Self { kind, requests }
    }

    /// Picks the lesson for a parsed prompt.
    ///
    /// `step` is the number of cells filled for multiplication and the
    /// number of groups shown for division; the other lessons ignore it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use abacus::lesson::{Lesson, LessonKind};
    /// let problem = abacus_parser::parse_problem("63 ÷ 9").unwrap();
    /// let lesson = Lesson::from_problem(&problem, None);
    /// assert_eq!(lesson.kind(), LessonKind::Division);
    /// assert_eq!(lesson.requests()[0].title(), Some("63 ÷ 9 = 7 R 0"));
    /// ```
    pub fn from_problem(problem: &Problem, step: Option<i64>) -> Self {
        let lhs = *problem.lhs().inner();
        let rhs = *problem.rhs().inner();
        match *problem.operation().inner() {
            Operation::Add => addition(lhs, rhs),
            Operation::Subtract => subtraction(lhs, rhs),
            Operation::Multiply => multiplication(lhs, rhs, step),
            Operation::Divide => division(lhs, rhs, step),
        }
    }

    pub fn kind(&self) -> LessonKind {
        self.kind
    }

    /// Figure requests in the order they are presented.
    pub fn requests(&self) -> &[DiagramRequest] {
        &self.requests
    }
}

/// Clamps a count of lesson operands to be non-negative.
fn non_negative(name: &'static str, value: i64) -> i64 {
    if value < 0 {
        warn!(name, value; "Lesson input must not be negative, using 0");
        0
    } else {
        value
    }
}

/// Clamps the number of repeated hops drawn on a number line.
fn hop_count(count: i64) -> usize {
    if count > MAX_LESSON_HOPS {
        warn!(count, max = MAX_LESSON_HOPS; "Too many hops for a number line, truncating");
    }
    usize::try_from(count.clamp(0, MAX_LESSON_HOPS)).unwrap_or_default()
}

/// `A + B`: two sets of dots, then B hops of +1 from A.
pub fn addition(a: i64, b: i64) -> Lesson {
    let a = non_negative("a", a);
    let b = non_negative("b", b);

    let dots = CombineRequest::new(a, b, DotsMode::Add)
        .with_title(format!("{a} + {b} = {}", a.saturating_add(b)));
    let hops = NumberLineRequest::new(a, vec![1; hop_count(b)])
        .with_title(format!("Start {a} and hop +1, {b} times"));
    Lesson::new(LessonKind::Addition, vec![dots.into(), hops.into()])
}

/// `A − B`: B of A dots crossed out, then B hops of −1 from A.
///
/// B is capped at A so the answer is never negative.
pub fn subtraction(a: i64, b: i64) -> Lesson {
    let a = non_negative("a", a);
    let b = non_negative("b", b).min(a);

    let dots = CombineRequest::new(a, b, DotsMode::Subtract)
        .with_title(format!("{a} − {b} = {}", a - b));
    let hops = NumberLineRequest::new(a, vec![-1; hop_count(b)])
        .with_title(format!("Start {a} and hop −1, {b} times"));
    Lesson::new(LessonKind::Subtraction, vec![dots.into(), hops.into()])
}

/// `R × C`: an R by C array, then R jumps of +C from 0.
///
/// `fill` limits how many cells are colored.
pub fn multiplication(rows: i64, cols: i64, fill: Option<i64>) -> Lesson {
    let (rows, cols) = if rows <= 0 || cols <= 0 {
        warn!(rows, cols; "Array dimensions must be positive, using 1 x 1");
        (1, 1)
    } else {
        (rows, cols)
    };

    let mut array = ArrayRequest::new(rows, cols)
        .with_title(format!("{rows} × {cols} = {}", rows.saturating_mul(cols)));
    if let Some(fill) = fill {
        array = array.with_fill_until(fill);
    }
    let jumps = NumberLineRequest::new(0, vec![cols; hop_count(rows)])
        .with_title(format!("{rows} jumps of +{cols}"));
    Lesson::new(LessonKind::Multiplication, vec![array.into(), jumps.into()])
}

/// `T ÷ G`: T items in groups of G, then Q jumps of −G from T.
///
/// `shown` limits how many complete groups are colored.
pub fn division(total: i64, group_size: i64, shown: Option<i64>) -> Lesson {
    let total = non_negative("total", total);
    let group_size = if group_size < 1 {
        warn!(group_size; "Group size must be at least 1, using 1");
        1
    } else {
        group_size
    };
    let quotient = total / group_size;
    let remainder = total % group_size;

    let mut groups = GroupingRequest::new(total, group_size).with_title(format!(
        "{total} ÷ {group_size} = {quotient} R {remainder}"
    ));
    if let Some(shown) = shown {
        groups = groups.with_step_groups(shown);
    }
    let jumps = NumberLineRequest::new(total, vec![-group_size; hop_count(quotient)]).with_title(
        format!("{quotient} jumps of −{group_size}; remainder {remainder}"),
    );
    Lesson::new(LessonKind::Division, vec![groups.into(), jumps.into()])
}

/// A quick look at a number line: `hops` hops of +1 from `origin`.
pub fn demo(origin: i64, hops: i64) -> Lesson {
    let hops = non_negative("hops", hops);
    let line = NumberLineRequest::new(origin, vec![1; hop_count(hops)]);
    Lesson::new(LessonKind::Demo, vec![line.into()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(lesson: &Lesson) -> Vec<&str> {
        lesson.requests().iter().filter_map(|r| r.title()).collect()
    }

    #[test]
    fn test_addition() {
        let lesson = addition(7, 5);
        assert_eq!(lesson.kind(), LessonKind::Addition);
        assert_eq!(titles(&lesson), ["7 + 5 = 12", "Start 7 and hop +1, 5 times"]);

        let DiagramRequest::NumberLine(line) = &lesson.requests()[1] else {
            panic!("expected a number line");
        };
        assert_eq!((line.origin(), line.jumps()), (7, &[1, 1, 1, 1, 1][..]));
    }

    #[test]
    fn test_subtraction_caps_take_away() {
        let lesson = subtraction(12, 4);
        assert_eq!(titles(&lesson), ["12 − 4 = 8", "Start 12 and hop −1, 4 times"]);

        let lesson = subtraction(3, 9);
        assert_eq!(titles(&lesson), ["3 − 3 = 0", "Start 3 and hop −1, 3 times"]);
    }

    #[test]
    fn test_multiplication() {
        let lesson = multiplication(3, 4, Some(5));
        assert_eq!(titles(&lesson), ["3 × 4 = 12", "3 jumps of +4"]);

        let DiagramRequest::Array(array) = &lesson.requests()[0] else {
            panic!("expected an array");
        };
        assert_eq!(array.fill_until(), Some(5));
    }

    #[test]
    fn test_division() {
        let lesson = division(20, 6, None);
        assert_eq!(titles(&lesson), ["20 ÷ 6 = 3 R 2", "3 jumps of −6; remainder 2"]);

        let DiagramRequest::NumberLine(line) = &lesson.requests()[1] else {
            panic!("expected a number line");
        };
        assert_eq!(line.origin(), 20);
        assert_eq!(line.jumps(), &[-6, -6, -6]);
    }

    #[test]
    fn test_division_by_zero_uses_groups_of_one() {
        let lesson = division(5, 0, Some(2));
        assert_eq!(titles(&lesson)[0], "5 ÷ 1 = 5 R 0");
    }

    #[test]
    fn test_demo_has_no_title() {
        let lesson = demo(-3, 4);
        assert_eq!(lesson.requests().len(), 1);
        assert!(titles(&lesson).is_empty());
    }

    #[test]
    fn test_hops_are_capped() {
        let lesson = addition(0, 50_000);
        let DiagramRequest::NumberLine(line) = &lesson.requests()[1] else {
            panic!("expected a number line");
        };
        assert_eq!(line.jumps().len(), MAX_LESSON_HOPS as usize);
    }

    #[test]
    fn test_from_problem() {
        let cases = [
            ("7 + 5", LessonKind::Addition),
            ("12 - 4", LessonKind::Subtraction),
            ("3 x 4", LessonKind::Multiplication),
            ("63 / 9", LessonKind::Division),
        ];
        for (prompt, kind) in cases {
            let problem = abacus_parser::parse_problem(prompt).unwrap();
            assert_eq!(Lesson::from_problem(&problem, None).kind(), kind, "{prompt}");
        }
    }
}
