//! Single-pass expression validator.
//!
//! Checks that an expression uses only the legal alphabet (ASCII
//! alphanumerics, whitespace, parentheses and the four connective glyphs)
//! and that its parentheses balance. The scan stops at the first problem.

use log::trace;
use proplog_types::{ErrorCode, LogicError, OpKind, Span};

/// Returns `true` if `c` may appear anywhere in an expression.
pub fn is_legal_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || c == '('
        || c == ')'
        || OpKind::from_glyph(c).is_some()
}

/// Returns `true` if the expression passes validation.
pub fn validate(expression: &str) -> bool {
    check(expression).is_ok()
}

/// Validate the expression, reporting the first failure found.
pub fn check(expression: &str) -> Result<(), LogicError> {
    Validator::new(expression).run()
}

/// The proplog validator.
///
/// Tracks paren balance as a stack of the columns of the currently open
/// `(`s, so an unclosed group can be reported at its opening paren.
pub struct Validator<'src> {
    /// The expression being checked.
    source: &'src str,
    /// Columns of unmatched `(`, innermost last.
    open: Vec<u32>,
}

impl<'src> Validator<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            open: Vec::new(),
        }
    }

    /// Current paren balance.
    pub fn balance(&self) -> usize {
        self.open.len()
    }

    /// Scan the whole expression.
    pub fn run(mut self) -> Result<(), LogicError> {
        for (idx, c) in self.source.chars().enumerate() {
            let col = idx as u32 + 1;
            match c {
                '(' => self.open.push(col),
                ')' => {
                    if self.open.pop().is_none() {
                        return Err(LogicError::new(
                            ErrorCode::UNMATCHED_CLOSE_PAREN,
                            "unmatched ')'",
                            Span::point(col),
                        )
                        .with_suggestion("remove the ')' or add a matching '(' before it"));
                    }
                }
                c if is_legal_char(c) => {}
                c => return Err(illegal_character(c, col)),
            }
        }

        if let Some(&col) = self.open.last() {
            let unclosed = self.open.len();
            return Err(LogicError::new(
                ErrorCode::UNCLOSED_PAREN,
                format!("unclosed '(' ({unclosed} group(s) left open)"),
                Span::point(col),
            )
            .with_suggestion("add a matching ')'"));
        }

        trace!("validated {} characters", self.source.chars().count());
        Ok(())
    }
}

fn illegal_character(c: char, col: u32) -> LogicError {
    let err = LogicError::new(
        ErrorCode::ILLEGAL_CHARACTER,
        format!("illegal character '{c}'"),
        Span::point(col),
    );
    // Common ASCII stand-ins for the connective glyphs.
    let replacement = match c {
        '!' | '~' => Some(OpKind::Not),
        '&' | '^' => Some(OpKind::And),
        '|' => Some(OpKind::Or),
        '>' | '-' | '=' => Some(OpKind::Implies),
        _ => None,
    };
    match replacement {
        Some(kind) => err.with_suggestion(format!("use '{}' for {}", kind.glyph(), kind.name())),
        None if c == '_' || (!c.is_ascii() && c.is_alphanumeric()) => {
            err.with_suggestion("variables are single ASCII letters or digits")
        }
        None => err,
    }
}
