//! Parsed arithmetic prompts.

use std::fmt;

use crate::span::Spanned;

/// One of the four arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// The symbol used when writing the operation for people.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "−",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    /// Lowercase name of the lesson that teaches this operation.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
            Operation::Divide => "division",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A prompt of the form `lhs <operation> rhs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Problem {
    lhs: Spanned<i64>,
    operation: Spanned<Operation>,
    rhs: Spanned<i64>,
}

impl Problem {
    pub fn new(lhs: Spanned<i64>, operation: Spanned<Operation>, rhs: Spanned<i64>) -> Self {
        Self {
            lhs,
            operation,
            rhs,
        }
    }

    pub fn lhs(&self) -> Spanned<i64> {
        self.lhs
    }

    pub fn operation(&self) -> Spanned<Operation> {
        self.operation
    }

    pub fn rhs(&self) -> Spanned<i64> {
        self.rhs
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operation, self.rhs)
    }
}
