//! Variable environment for the proplog evaluator.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// Truth-value assignments for single-character variables.
///
/// Keys are unique: assigning a variable twice keeps the last value.
/// Serialises as a JSON object, e.g. `{"a": true, "b": false}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment {
    bindings: BTreeMap<char, bool>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a value, returning the previous one if the variable was bound.
    pub fn insert(&mut self, name: char, value: bool) -> Option<bool> {
        self.bindings.insert(name, value)
    }

    /// Look up a variable.
    pub fn get(&self, name: char) -> Option<bool> {
        self.bindings.get(&name).copied()
    }

    pub fn contains(&self, name: char) -> bool {
        self.bindings.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (char, bool)> + '_ {
        self.bindings.iter().map(|(&k, &v)| (k, v))
    }
}

impl FromIterator<(char, bool)> for Environment {
    fn from_iter<I: IntoIterator<Item = (char, bool)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl Extend<(char, bool)> for Environment {
    fn extend<I: IntoIterator<Item = (char, bool)>>(&mut self, iter: I) {
        self.bindings.extend(iter);
    }
}

impl IntoIterator for Environment {
    type Item = (char, bool);
    type IntoIter = btree_map::IntoIter<char, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.into_iter()
    }
}

impl<const N: usize> From<[(char, bool); N]> for Environment {
    fn from(pairs: [(char, bool); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut env = Environment::new();
        assert!(env.is_empty());
        assert_eq!(env.insert('a', true), None);
        assert_eq!(env.get('a'), Some(true));
        assert_eq!(env.get('b'), None);
        assert!(env.contains('a'));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_last_assignment_wins() {
        let env: Environment = [('a', true), ('b', false), ('a', false)].into();
        assert_eq!(env.get('a'), Some(false));
        assert_eq!(env.len(), 2);

        let mut env = Environment::new();
        env.insert('x', false);
        assert_eq!(env.insert('x', true), Some(false));
    }

    #[test]
    fn test_iteration_is_ordered() {
        let env: Environment = [('c', true), ('a', false), ('b', true)].into();
        let names: Vec<char> = env.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_extend() {
        let mut env: Environment = [('a', true)].into();
        env.extend([('b', false), ('a', false)]);
        assert_eq!(env.get('a'), Some(false));
        assert_eq!(env.get('b'), Some(false));
    }

    #[test]
    fn test_json_round_trip() {
        let env: Environment = [('a', true), ('b', false)].into();
        let json = serde_json::to_string(&env).unwrap();
        assert_eq!(json, r#"{"a":true,"b":false}"#);
        let back: Environment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, env);
    }

    #[test]
    fn test_json_rejects_multi_character_keys() {
        let result: Result<Environment, _> = serde_json::from_str(r#"{"ab":true}"#);
        assert!(result.is_err());
    }
}
