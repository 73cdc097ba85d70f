//! Readers for variable assignments given on the command line or stdin.

use proplog::Environment;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    #[error("expected NAME=VALUE, got '{0}'")]
    MissingEquals(String),

    #[error("'{0}' is not a variable name (use a single letter or digit)")]
    BadName(String),

    #[error("'{0}' is not a truth value (use 1, 0, true or false)")]
    BadValue(String),

    #[error("variable '{0}' is missing its value")]
    DanglingName(char),
}

/// Parse a truth value: `1`/`0`, `true`/`false`, `t`/`f` (case-insensitive).
pub fn parse_truth(text: &str) -> Result<bool, AssignmentError> {
    match text.to_ascii_lowercase().as_str() {
        "1" | "true" | "t" => Ok(true),
        "0" | "false" | "f" => Ok(false),
        _ => Err(AssignmentError::BadValue(text.to_string())),
    }
}

/// Parse a variable name: exactly one ASCII letter or digit.
pub fn parse_name(text: &str) -> Result<char, AssignmentError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphanumeric() => Ok(c),
        _ => Err(AssignmentError::BadName(text.to_string())),
    }
}

/// Parse a `NAME=VALUE` assignment, as given to `--set`.
pub fn parse_assignment(text: &str) -> Result<(char, bool), AssignmentError> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| AssignmentError::MissingEquals(text.to_string()))?;
    Ok((parse_name(name.trim())?, parse_truth(value.trim())?))
}

/// Read whitespace-separated `name value` pairs, e.g. `a 1 b 0`.
///
/// Pairs may be spread over any number of lines. A name assigned twice
/// keeps its last value.
pub fn read_pairs(text: &str) -> Result<Environment, AssignmentError> {
    let mut env = Environment::new();
    let mut words = text.split_whitespace();
    while let Some(word) = words.next() {
        let name = parse_name(word)?;
        let value = words.next().ok_or(AssignmentError::DanglingName(name))?;
        env.insert(name, parse_truth(value)?);
    }
    Ok(env)
}
