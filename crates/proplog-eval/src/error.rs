//! Runtime error types for the proplog evaluator.

use proplog_types::{ErrorCode, LogicError, OpKind, Span};
use thiserror::Error;

/// Evaluation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A variable in the tree has no entry in the environment.
    #[error("variable '{name}' has no value")]
    UnboundVariable { name: char, span: Span },

    /// A binary operator node was built without its right operand.
    #[error("'{kind}' ({}) has no right operand", .kind.name())]
    MissingOperand { kind: OpKind, span: Span },
}

impl EvalError {
    pub fn span(&self) -> Span {
        match self {
            Self::UnboundVariable { span, .. } | Self::MissingOperand { span, .. } => *span,
        }
    }
}

impl From<EvalError> for LogicError {
    fn from(err: EvalError) -> Self {
        let span = err.span();
        match &err {
            EvalError::UnboundVariable { name, .. } => {
                LogicError::new(ErrorCode::UNBOUND_VARIABLE, err.to_string(), span)
                    .with_suggestion(format!("assign a value to '{name}', e.g. {name}=1"))
            }
            EvalError::MissingOperand { .. } => {
                LogicError::new(ErrorCode::MALFORMED_TREE, err.to_string(), span)
            }
        }
    }
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
