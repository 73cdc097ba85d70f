//! Core expression evaluator.

use crate::env::Environment;
use crate::error::{EvalError, EvalResult};
use log::trace;
use proplog_types::{Node, OpKind, Span};

/// Stack left free before a recursive call asks for more.
const STACK_RED_ZONE: usize = 64 * 1024;
/// Size of each stack segment allocated when the red zone is reached.
const STACK_GROWTH: usize = 1024 * 1024;

/// Evaluate a tree against an environment.
pub fn evaluate(node: &Node, env: &Environment) -> EvalResult<bool> {
    Evaluator::new(env).eval(node)
}

/// The evaluator: walks AST nodes bottom-up and produces booleans.
///
/// Holds the environment by shared reference; evaluation never mutates
/// either the tree or the bindings, so one evaluator can be reused freely.
pub struct Evaluator<'env> {
    env: &'env Environment,
}

impl<'env> Evaluator<'env> {
    pub fn new(env: &'env Environment) -> Self {
        Self { env }
    }

    /// Evaluate a node to a boolean.
    ///
    /// `∧`, `∨` and `→` short-circuit. Their operands are pure, so this only
    /// matters when the side that is skipped would have failed: `a ∨ z` with
    /// `a` true and `z` unbound evaluates to `true`.
    pub fn eval(&self, node: &Node) -> EvalResult<bool> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || self.eval_node(node))
    }

    fn eval_node(&self, node: &Node) -> EvalResult<bool> {
        match node {
            Node::Variable { name, span } => self.eval_variable(*name, *span),
            Node::Operator {
                kind,
                operand,
                right_operand,
                span,
            } => {
                let value = match (kind, right_operand.as_deref()) {
                    (OpKind::Not, _) => !self.eval(operand)?,
                    (OpKind::And, Some(right)) => self.eval(operand)? && self.eval(right)?,
                    (OpKind::Or, Some(right)) => self.eval(operand)? || self.eval(right)?,
                    (OpKind::Implies, Some(right)) => !self.eval(operand)? || self.eval(right)?,
                    (kind, None) => {
                        return Err(EvalError::MissingOperand {
                            kind: *kind,
                            span: *span,
                        })
                    }
                };
                trace!("{kind} at {span} = {value}");
                Ok(value)
            }
        }
    }

    fn eval_variable(&self, name: char, span: Span) -> EvalResult<bool> {
        let value = self
            .env
            .get(name)
            .ok_or(EvalError::UnboundVariable { name, span })?;
        trace!("{name} = {value}");
        Ok(value)
    }
}
