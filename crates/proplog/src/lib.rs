//! proplog: orchestrates the evaluation pipeline.
//!
//! ```text
//! Expression → Validator → Parser → AST → Evaluator(AST, Environment) → bool
//! ```
//!
//! Each stage stops at its first failure and reports it as a
//! [`LogicError`]; the error's category tells which stage rejected the input.

mod outcome;

use log::debug;
use sha2::{Digest, Sha256};

pub use outcome::EvalOutcome;
pub use proplog_eval::{Environment, EvalError, Evaluator};
pub use proplog_types::{BinaryOp, ErrorCategory, ErrorCode, LogicError, Node, OpKind, Span};

/// Validate an expression without parsing it.
pub fn check(source: &str) -> Result<(), LogicError> {
    proplog_validator::check(source)
}

/// Validate and parse an expression.
pub fn parse(source: &str) -> Result<Node, LogicError> {
    check(source)?;
    debug!("validated '{source}'");
    let tree = proplog_parser::parse(source)?;
    debug!("parsed tree of depth {}", tree.depth());
    Ok(tree)
}

/// Validate, parse and evaluate an expression against an environment.
pub fn evaluate(source: &str, env: &Environment) -> Result<bool, LogicError> {
    let tree = parse(source)?;
    let value = proplog_eval::evaluate(&tree, env)?;
    debug!("'{source}' evaluated to {value} with {} binding(s)", env.len());
    Ok(value)
}

/// Run the whole pipeline and collect the result in a serialisable outcome.
///
/// Never fails: errors end up in [`EvalOutcome::error`]. The tree and its
/// fingerprint are filled in whenever parsing succeeded, even if evaluation
/// then failed.
pub fn evaluate_to_result(source: &str, env: &Environment) -> EvalOutcome {
    match parse(source) {
        Ok(tree) => evaluate_tree(&tree, env),
        Err(error) => EvalOutcome::from_error(error),
    }
}

/// Evaluate a tree that was already produced by [`parse`], collecting the
/// result the same way [`evaluate_to_result`] does.
pub fn evaluate_tree(tree: &Node, env: &Environment) -> EvalOutcome {
    let mut outcome = EvalOutcome::parsed(tree);
    match proplog_eval::evaluate(tree, env) {
        Ok(value) => {
            outcome.success = true;
            outcome.value = Some(value);
        }
        Err(error) => outcome.error = Some(error.into()),
    }
    outcome
}

/// SHA-256 of the tree's canonical rendering, as lowercase hex.
///
/// Structurally identical trees share a fingerprint regardless of the
/// whitespace or redundant parentheses in the text they came from.
pub fn fingerprint(tree: &Node) -> String {
    let digest = Sha256::digest(tree.to_string().as_bytes());
    format!("{digest:x}")
}
