//! Egg Eval - tree-walking evaluator for the Egg language.
//!
//! # Architecture
//!
//! - [`Interpreter`]: dispatch over expression kinds, owns a [`SpecialForms`]
//!   table and a depth limit.
//! - [`Scope`] / [`LocalScope`]: name-to-value bindings with parent chaining.
//! - [`Value`]: string, number or [`FunctionValue`].
//! - [`EvalError`]: typed errors, built through the factories in [`errors`].
//!
//! The core defines no operators and no special forms. A runtime populates
//! the scope with functions and the interpreter with special forms before
//! evaluating anything interesting.

mod environment;
pub mod errors;
mod interpreter;
mod special_forms;
mod value;

pub use environment::{AssignError, LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder, MAX_EVAL_DEPTH};
pub use special_forms::{SpecialForm, SpecialFormFn, SpecialForms};
pub use value::{FunctionValue, NativeFn, Value};

/// Evaluate `expr` in `scope` with a default [`Interpreter`].
///
/// Without special forms, only literals, bound words and calls to functions
/// already in scope can succeed.
pub fn evaluate(expr: &egg_ir::Expr, scope: &LocalScope<Scope>) -> EvalResult {
    Interpreter::new().evaluate(expr, scope)
}
