//! Shared types for proplog.
//!
//! This crate defines the AST node types, operator glyphs, source spans and
//! the structured error type used across the validator, parser and evaluator.

mod error;
mod span;
pub mod ast;

pub use ast::{BinaryOp, Node, OpKind};
pub use error::{ErrorCategory, ErrorCode, LogicError};
pub use span::Span;

/// Maximum recursion depth accepted by the parser.
///
/// Every `(`, `¬` and binary glyph opens one level until the next `)` or the
/// end of input, so a flat chain of N connectives needs N + 1 levels. The
/// parser and evaluator run on a growable stack; the limit only stops
/// pathological input.
pub const MAX_NESTING_DEPTH: usize = 4096;
