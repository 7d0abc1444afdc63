//! Egg IR - syntax tree and source location types.
//!
//! Shared by the parser (which produces [`Expr`]) and the evaluator (which
//! consumes it). The three-variant [`Expr`] enum is the only contract
//! between the two phases.

mod ast;
mod span;

pub use ast::{is_whitespace, is_word_char, Expr, Literal};
pub use span::Span;
