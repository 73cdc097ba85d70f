//! Expression parsing.
//!
//! There is no precedence table. The parser folds the expression left to
//! right, and every connective recurses over *the rest of the input*:
//!
//! - a binary glyph takes the result so far as its left operand and the
//!   recursively parsed remainder as its right operand, so chains associate
//!   to the right: `a ∧ b ∧ c` is `a ∧ (b ∧ c)`;
//! - `¬` negates the whole remainder: `¬a ∧ b` is `¬(a ∧ b)`;
//! - `(` starts a new frame and `)` ends whichever frame is currently
//!   deepest. The frame that opened the group keeps scanning after it, so
//!   `(a ∧ b ∨ c) ∧ d` is `a ∧ ((b ∨ c) ∧ d)`.
//!
//! A variable or group simply replaces the result so far: `a b` is `b`.

use log::trace;
use proplog_types::{BinaryOp, ErrorCode, LogicError, Node, OpKind, Span};

use crate::parser::{Parser, STACK_GROWTH, STACK_RED_ZONE};

impl<'src> Parser<'src> {
    /// Parse from the cursor until the end of input or a `)`.
    ///
    /// Returns `None` if nothing was accumulated before the frame ended.
    pub(crate) fn parse_sequence(&mut self) -> Result<Option<Node>, LogicError> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || self.parse_frame())
    }

    fn parse_frame(&mut self) -> Result<Option<Node>, LogicError> {
        self.enter()?;
        trace!("frame {} at {}", self.depth, self.current_span());
        let mut result: Option<Node> = None;

        while let Some(c) = self.peek() {
            let span = self.current_span();

            if c.is_whitespace() {
                self.advance();
                continue;
            }

            if c.is_ascii_alphanumeric() {
                self.advance();
                result = Some(Node::variable(c, span));
                continue;
            }

            match c {
                '(' => {
                    self.advance();
                    let inner = self.parse_sequence()?.ok_or_else(|| {
                        LogicError::new(ErrorCode::MISSING_OPERAND, "empty parentheses", span)
                    })?;
                    result = Some(inner);
                }
                ')' => {
                    if self.depth == 1 {
                        return Err(LogicError::new(
                            ErrorCode::STRAY_CLOSE_PAREN,
                            "')' closes a group that was never opened",
                            span,
                        ));
                    }
                    self.advance();
                    self.leave();
                    return Ok(result);
                }
                _ if OpKind::from_glyph(c) == Some(OpKind::Not) => {
                    self.advance();
                    let operand = self.parse_operand(OpKind::Not, span)?;
                    result = Some(Node::not(span, operand));
                }
                _ => match BinaryOp::from_glyph(c) {
                    Some(op) => {
                        self.advance();
                        let kind = op.kind();
                        let left = result.take().ok_or_else(|| {
                            LogicError::new(
                                ErrorCode::MISSING_OPERAND,
                                format!("'{kind}' ({}) has no left operand", kind.name()),
                                span,
                            )
                        })?;
                        let right = self.parse_operand(kind, span)?;
                        result = Some(Node::binary(op, left, right));
                    }
                    None => {
                        return Err(LogicError::new(
                            ErrorCode::UNEXPECTED_CHARACTER,
                            format!("unexpected character '{c}'"),
                            span,
                        ));
                    }
                },
            }
        }

        self.leave();
        Ok(result)
    }

    /// Recurse over the remainder to obtain the operand a connective needs.
    fn parse_operand(&mut self, kind: OpKind, glyph_span: Span) -> Result<Node, LogicError> {
        let side = if kind.is_unary() { "an" } else { "a right" };
        self.parse_sequence()?.ok_or_else(|| {
            LogicError::new(
                ErrorCode::MISSING_OPERAND,
                format!("'{kind}' ({}) has no {side} operand", kind.name()),
                glyph_span,
            )
        })
    }
}
