//! proplog validator: rejects malformed expressions before parsing.

pub mod validator;

pub use validator::{check, is_legal_char, validate, Validator};
