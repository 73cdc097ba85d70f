//! proplog parser: converts a validated expression into an AST.

mod parse_expr;
mod parser;

pub use parser::{parse, Parser};
