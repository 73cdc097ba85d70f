//! Core parser infrastructure: character cursor, depth tracking, errors.

use log::debug;
use proplog_types::{ErrorCode, LogicError, Node, Span, MAX_NESTING_DEPTH};

/// Stack left free before a recursive frame asks for more.
pub(crate) const STACK_RED_ZONE: usize = 64 * 1024;
/// Size of each stack segment allocated when the red zone is reached.
pub(crate) const STACK_GROWTH: usize = 1024 * 1024;

/// Parse an expression into its AST.
///
/// The expression should already have passed validation; unvalidated input
/// is still handled without panicking but may be rejected with a syntax
/// error that validation would have reported more precisely.
pub fn parse(source: &str) -> Result<Node, LogicError> {
    Parser::new(source).parse()
}

/// The proplog parser.
///
/// Walks the expression one character at a time. The cursor is owned by the
/// parser and shared by every recursive call through `&mut self`.
pub struct Parser<'src> {
    /// Source text, kept for logging.
    source: &'src str,
    /// The expression as characters, so columns match what the user sees.
    chars: Vec<char>,
    /// Current index into `chars`.
    pos: usize,
    /// Number of active recursive frames.
    pub(crate) depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            pos: 0,
            depth: 0,
        }
    }

    // ── Cursor ────────────────────────────────────────────────────────────────

    /// Returns the current character without advancing.
    pub(crate) fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Advance the cursor by one character.
    pub(crate) fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    /// Span of the current character.
    pub(crate) fn current_span(&self) -> Span {
        Span::point(self.pos as u32 + 1)
    }

    /// Returns `true` once every character has been consumed.
    pub fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    // ── Depth ─────────────────────────────────────────────────────────────────

    /// Enter a recursive frame, failing once the nesting limit is passed.
    pub(crate) fn enter(&mut self) -> Result<(), LogicError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(self.error_at_current(
                ErrorCode::NESTING_TOO_DEEP,
                format!("maximum nesting depth is {MAX_NESTING_DEPTH}"),
            ));
        }
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    // ── Error Reporting ───────────────────────────────────────────────────────

    /// Build an error at the current character.
    pub(crate) fn error_at_current(
        &self,
        code: ErrorCode,
        message: impl Into<String>,
    ) -> LogicError {
        LogicError::new(code, message, self.current_span())
    }

    // ── Public API ────────────────────────────────────────────────────────────

    /// Parse the whole expression into a single root node.
    pub fn parse(mut self) -> Result<Node, LogicError> {
        let root = self.parse_sequence()?;
        match root {
            Some(node) => {
                debug!("parsed '{}' as {node}", self.source);
                Ok(node)
            }
            None => Err(LogicError::new(
                ErrorCode::EMPTY_EXPRESSION,
                "expression is empty",
                Span::point(1),
            )
            .with_suggestion("enter at least one variable, e.g. 'a'")),
        }
    }
}
