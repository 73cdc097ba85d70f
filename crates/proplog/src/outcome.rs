//! Structured pipeline result.

use proplog_types::{LogicError, Node};
use serde::{Deserialize, Serialize};

use crate::fingerprint;

/// The JSON-friendly result of [`crate::evaluate_to_result`].
///
/// ```json
/// {
///   "success": true,
///   "value": false,
///   "tree": "(a ∧ b)",
///   "fingerprint": "5f1c…",
///   "variables": ["a", "b"],
///   "error": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalOutcome {
    pub success: bool,
    pub value: Option<bool>,
    /// Canonical rendering of the parsed tree.
    pub tree: Option<String>,
    pub fingerprint: Option<String>,
    /// Variables referenced by the tree, sorted.
    pub variables: Vec<char>,
    pub error: Option<LogicError>,
}

impl EvalOutcome {
    /// An outcome for input that never produced a tree.
    pub fn from_error(error: LogicError) -> Self {
        Self {
            success: false,
            value: None,
            tree: None,
            fingerprint: None,
            variables: Vec::new(),
            error: Some(error),
        }
    }

    pub(crate) fn parsed(tree: &Node) -> Self {
        Self {
            success: false,
            value: None,
            tree: Some(tree.to_string()),
            fingerprint: Some(fingerprint(tree)),
            variables: tree.variables().into_iter().collect(),
            error: None,
        }
    }

    /// Serialise to a JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(r#"{{"success":false,"error":{{"message":"serialization error: {e}"}}}}"#)
        })
    }

    /// Serialise to indented JSON.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_json())
    }
}
