//! proplog tree-walking evaluator.
//!
//! Evaluates a parsed expression tree against an [`Environment`] of variable
//! assignments, producing a boolean or the first [`EvalError`] encountered.

pub mod env;
pub mod error;
pub mod evaluator;

pub use env::Environment;
pub use error::{EvalError, EvalResult};
pub use evaluator::{evaluate, Evaluator};
