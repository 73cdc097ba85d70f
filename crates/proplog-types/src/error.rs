use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error category, determined by error code range.
///
/// Each category corresponds to the stage that rejected the input, so a
/// caller can tell a validation failure from a parse or evaluation failure
/// without matching on individual codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Validation,
    Syntax,
    Evaluation,
}

/// Numeric error code (E100–E399).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Validation errors (E100–E199) ──
    pub const ILLEGAL_CHARACTER: Self = Self(100);
    pub const UNMATCHED_CLOSE_PAREN: Self = Self(101);
    pub const UNCLOSED_PAREN: Self = Self(102);

    // ── Syntax errors (E200–E299) ──
    pub const UNEXPECTED_CHARACTER: Self = Self(200);
    pub const MISSING_OPERAND: Self = Self(201);
    pub const EMPTY_EXPRESSION: Self = Self(202);
    pub const NESTING_TOO_DEEP: Self = Self(203);
    pub const STRAY_CLOSE_PAREN: Self = Self(204);

    // ── Evaluation errors (E300–E399) ──
    pub const UNBOUND_VARIABLE: Self = Self(300);
    pub const MALFORMED_TREE: Self = Self(301);

    /// Get the category for this error code.
    pub fn category(self) -> ErrorCategory {
        match self.0 {
            100..=199 => ErrorCategory::Validation,
            200..=299 => ErrorCategory::Syntax,
            300..=399 => ErrorCategory::Evaluation,
            _ => ErrorCategory::Syntax, // fallback
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Syntax => write!(f, "syntax"),
            Self::Evaluation => write!(f, "evaluation"),
        }
    }
}

/// A structured proplog error.
///
/// Every stage reports failures through this type. Callers render it
/// themselves (see [`LogicError::render`]) and must not parse the message.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{span}: {code} [{category}] {message}")]
pub struct LogicError {
    /// Error code (e.g., E201).
    pub code: ErrorCode,
    /// Error category (derived from code).
    pub category: ErrorCategory,
    /// Human-readable error message.
    pub message: String,
    /// Location within the expression.
    #[serde(flatten)]
    pub span: Span,
    /// Optional fix suggestion.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub suggestion: Option<String>,
}

impl LogicError {
    /// Create a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            category: code.category(),
            message: message.into(),
            span,
            suggestion: None,
        }
    }

    /// Attach a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_validation(&self) -> bool {
        self.category == ErrorCategory::Validation
    }

    pub fn is_syntax(&self) -> bool {
        self.category == ErrorCategory::Syntax
    }

    pub fn is_evaluation(&self) -> bool {
        self.category == ErrorCategory::Evaluation
    }

    /// Render the error against the expression it was reported for, with a
    /// caret line under the offending span.
    ///
    /// ```text
    /// error[E101]: unmatched ')'
    ///   | a ∧ b)
    ///   |      ^
    /// ```
    pub fn render(&self, expression: &str) -> String {
        let pad = " ".repeat(self.span.start.saturating_sub(1) as usize);
        let carets = "^".repeat(self.span.width() as usize);
        let mut out = format!(
            "error[{}]: {}\n  | {}\n  | {}{}",
            self.code, self.message, expression, pad, carets
        );
        if let Some(suggestion) = &self.suggestion {
            out.push_str("\n  = help: ");
            out.push_str(suggestion);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_category() {
        assert_eq!(
            ErrorCode::ILLEGAL_CHARACTER.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            ErrorCode::UNCLOSED_PAREN.category(),
            ErrorCategory::Validation
        );
        assert_eq!(ErrorCode::MISSING_OPERAND.category(), ErrorCategory::Syntax);
        assert_eq!(
            ErrorCode::UNBOUND_VARIABLE.category(),
            ErrorCategory::Evaluation
        );
        assert_eq!(
            ErrorCode::MALFORMED_TREE.category(),
            ErrorCategory::Evaluation
        );
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::UNBOUND_VARIABLE), "E300");
        assert_eq!(format!("{}", ErrorCode::ILLEGAL_CHARACTER), "E100");
    }

    #[test]
    fn test_logic_error_creation() {
        let err = LogicError::new(
            ErrorCode::UNBOUND_VARIABLE,
            "variable 'b' has no value",
            Span::point(5),
        );
        assert_eq!(err.category, ErrorCategory::Evaluation);
        assert!(err.is_evaluation());
        assert!(!err.is_syntax());
        assert!(err.suggestion.is_none());
    }

    #[test]
    fn test_logic_error_display() {
        let err = LogicError::new(ErrorCode::UNMATCHED_CLOSE_PAREN, "unmatched ')'", Span::point(6));
        assert_eq!(err.to_string(), "col 6: E101 [validation] unmatched ')'");
    }

    #[test]
    fn test_logic_error_render() {
        let err = LogicError::new(ErrorCode::UNMATCHED_CLOSE_PAREN, "unmatched ')'", Span::point(6))
            .with_suggestion("remove the ')' or add a matching '('");
        let rendered = err.render("a ∧ b)");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "error[E101]: unmatched ')'");
        assert_eq!(lines[1], "  | a ∧ b)");
        assert_eq!(lines[2], "  |      ^");
        assert_eq!(lines[3], "  = help: remove the ')' or add a matching '('");
    }

    #[test]
    fn test_logic_error_json_serialization() {
        let err = LogicError::new(
            ErrorCode::ILLEGAL_CHARACTER,
            "illegal character '&'",
            Span::point(3),
        )
        .with_suggestion("use '∧' for conjunction");

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":100"));
        assert!(json.contains("\"category\":\"validation\""));
        assert!(json.contains("\"start\":3"));
        assert!(json.contains("\"end\":3"));
        assert!(json.contains("\"suggestion\""));

        let back: LogicError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_logic_error_json_omits_empty_suggestion() {
        let err = LogicError::new(ErrorCode::EMPTY_EXPRESSION, "empty", Span::point(1));
        let json = serde_json::to_string(&err).unwrap();
        assert!(!json.contains("suggestion"));
    }
}
