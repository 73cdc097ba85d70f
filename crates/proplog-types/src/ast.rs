//! AST node types for propositional-logic expressions.
//!
//! Every node carries a [`Span`] for error reporting. Children are boxed and
//! exclusively owned by their parent; trees are never mutated after the
//! parser builds them.

use crate::Span;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Operators
// ══════════════════════════════════════════════════════════════════════════════

/// The four logical connectives, each written as a single reserved glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    /// `¬`
    Not,
    /// `∧`
    And,
    /// `∨`
    Or,
    /// `→` (material implication)
    Implies,
}

impl OpKind {
    /// All connectives, in glyph-table order.
    pub const ALL: [OpKind; 4] = [OpKind::Not, OpKind::And, OpKind::Or, OpKind::Implies];

    /// Map a character to its connective, if it is one of the reserved glyphs.
    pub fn from_glyph(c: char) -> Option<OpKind> {
        match c {
            '¬' => Some(OpKind::Not),
            '∧' => Some(OpKind::And),
            '∨' => Some(OpKind::Or),
            '→' => Some(OpKind::Implies),
            _ => None,
        }
    }

    /// The glyph this connective is written with.
    pub fn glyph(self) -> char {
        match self {
            OpKind::Not => '¬',
            OpKind::And => '∧',
            OpKind::Or => '∨',
            OpKind::Implies => '→',
        }
    }

    pub fn is_unary(self) -> bool {
        matches!(self, OpKind::Not)
    }

    /// Name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            OpKind::Not => "negation",
            OpKind::And => "conjunction",
            OpKind::Or => "disjunction",
            OpKind::Implies => "implication",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// The connectives that take two operands.
///
/// [`Node::binary`] takes this instead of [`OpKind`], so a negation can never
/// be built with a right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Implies,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 3] = [BinaryOp::And, BinaryOp::Or, BinaryOp::Implies];

    /// Map a character to its binary connective. `¬` is not one.
    pub fn from_glyph(c: char) -> Option<BinaryOp> {
        OpKind::from_glyph(c).and_then(OpKind::binary_op)
    }

    pub fn kind(self) -> OpKind {
        match self {
            BinaryOp::And => OpKind::And,
            BinaryOp::Or => OpKind::Or,
            BinaryOp::Implies => OpKind::Implies,
        }
    }
}

impl OpKind {
    /// The binary form of this connective, or `None` for `Not`.
    pub fn binary_op(self) -> Option<BinaryOp> {
        match self {
            OpKind::Not => None,
            OpKind::And => Some(BinaryOp::And),
            OpKind::Or => Some(BinaryOp::Or),
            OpKind::Implies => Some(BinaryOp::Implies),
        }
    }
}

impl From<BinaryOp> for OpKind {
    fn from(op: BinaryOp) -> Self {
        op.kind()
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind().fmt(f)
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Nodes
// ══════════════════════════════════════════════════════════════════════════════

/// A node of the expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single-character variable: `a`, `P`, `3`.
    Variable { name: char, span: Span },
    /// A connective applied to its operands.
    ///
    /// `Not` owns `operand` only; the binary connectives own `operand` as the
    /// left side and `right_operand` as the right side. Use [`Node::not`] and
    /// [`Node::binary`] so the arity always matches the kind.
    Operator {
        kind: OpKind,
        operand: Box<Node>,
        right_operand: Option<Box<Node>>,
        span: Span,
    },
}

impl Node {
    pub fn variable(name: char, span: Span) -> Self {
        Node::Variable { name, span }
    }

    /// `¬operand`, spanning from the glyph to the end of the operand.
    pub fn not(glyph_span: Span, operand: Node) -> Self {
        let span = glyph_span.merge(operand.span());
        Node::Operator {
            kind: OpKind::Not,
            operand: Box::new(operand),
            right_operand: None,
            span,
        }
    }

    /// `left <op> right`.
    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Self {
        let span = left.span().merge(right.span());
        Node::Operator {
            kind: op.kind(),
            operand: Box::new(left),
            right_operand: Some(Box::new(right)),
            span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Node::Variable { span, .. } | Node::Operator { span, .. } => *span,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Node::Variable { .. })
    }

    /// The connective at the root, if this node is an operator.
    pub fn kind(&self) -> Option<OpKind> {
        match self {
            Node::Variable { .. } => None,
            Node::Operator { kind, .. } => Some(*kind),
        }
    }

    /// Every variable referenced anywhere in the tree.
    pub fn variables(&self) -> BTreeSet<char> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut BTreeSet<char>) {
        match self {
            Node::Variable { name, .. } => {
                vars.insert(*name);
            }
            Node::Operator {
                operand,
                right_operand,
                ..
            } => {
                operand.collect_variables(vars);
                if let Some(right) = right_operand {
                    right.collect_variables(vars);
                }
            }
        }
    }

    /// Height of the tree; a lone variable has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Node::Variable { .. } => 1,
            Node::Operator {
                operand,
                right_operand,
                ..
            } => {
                let right = right_operand.as_ref().map_or(0, |r| r.depth());
                1 + operand.depth().max(right)
            }
        }
    }
}

/// Canonical, fully parenthesised rendering: `(a ∧ (b ∧ c))`, `¬(a ∨ b)`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Variable { name, .. } => write!(f, "{name}"),
            Node::Operator {
                kind,
                operand,
                right_operand: None,
                ..
            } => write!(f, "{kind}{operand}"),
            Node::Operator {
                kind,
                operand,
                right_operand: Some(right),
                ..
            } => write!(f, "({operand} {kind} {right})"),
        }
    }
}
