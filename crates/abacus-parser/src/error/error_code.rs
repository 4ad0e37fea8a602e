//! Error codes for prompt diagnostics.
//!
//! All codes live in the `E1xx` range: they are reported while reading a
//! prompt or a jump list.

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unexpected input.
    ///
    /// A character or token appeared where it cannot be used, such as a
    /// letter inside a number or a second operator.
    E100,

    /// Incomplete input.
    ///
    /// The input ended before a complete prompt was read, e.g. `7 +`.
    E101,

    /// Number out of range.
    ///
    /// A number does not fit in a signed 64-bit integer.
    E102,

    /// Missing operator.
    ///
    /// Two numbers were given without an operator between them.
    E103,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "unexpected input",
            ErrorCode::E101 => "incomplete input",
            ErrorCode::E102 => "number out of range",
            ErrorCode::E103 => "missing operator",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E103.to_string(), "E103");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E101.description(), "incomplete input");
        assert_eq!(ErrorCode::E102.description(), "number out of range");
    }
}
