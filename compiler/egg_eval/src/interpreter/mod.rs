//! Tree-walking interpreter.
//!
//! `evaluate` dispatches on the three expression kinds:
//!
//! - `Value`: the literal itself.
//! - `Word`: a scope lookup.
//! - `Apply`: a special form if the operator is a word naming one, otherwise
//!   an ordinary call (operator first, then arguments left to right).

mod builder;

use egg_ir::Expr;
use egg_stack::RecursionGuard;
use tracing::debug;

use crate::errors::{not_callable, recursion_limit_exceeded, undefined_binding};
use crate::{EvalResult, LocalScope, Scope, SpecialForms, Value};

pub use builder::InterpreterBuilder;

/// Default limit on nested `evaluate` calls, counting re-entry from special
/// forms and functions.
pub const MAX_EVAL_DEPTH: usize = 1024;

/// An evaluation context: the special forms it knows and its depth limit.
///
/// The interpreter holds no bindings itself. Scopes are passed to each
/// [`Interpreter::evaluate`] call and only borrowed for its duration.
pub struct Interpreter {
    special_forms: SpecialForms,
    guard: RecursionGuard,
}

impl Interpreter {
    /// An interpreter with no special forms and the default depth limit.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn special_forms(&self) -> &SpecialForms {
        &self.special_forms
    }

    /// Mutable access for registering forms after construction.
    pub fn special_forms_mut(&mut self) -> &mut SpecialForms {
        &mut self.special_forms
    }

    pub fn max_depth(&self) -> usize {
        self.guard.limit()
    }

    /// Evaluate `expr` against `scope`.
    ///
    /// Special forms and function bodies call back into this, so the depth
    /// limit covers the whole call tree rather than one syntactic nesting.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = expr.kind_name()))]
    pub fn evaluate(&self, expr: &Expr, scope: &LocalScope<Scope>) -> EvalResult {
        self.guard
            .descend(|| self.eval_inner(expr, scope))
            .map_err(|exceeded| recursion_limit_exceeded(exceeded.limit))?
    }

    fn eval_inner(&self, expr: &Expr, scope: &LocalScope<Scope>) -> EvalResult {
        match expr {
            Expr::Value(literal) => Ok(Value::from(literal)),
            Expr::Word { name } => scope
                .borrow()
                .lookup(name)
                .ok_or_else(|| undefined_binding(name)),
            Expr::Apply { operator, args } => self.eval_apply(operator, args, scope),
        }
    }

    fn eval_apply(&self, operator: &Expr, args: &[Expr], scope: &LocalScope<Scope>) -> EvalResult {
        if let Some(name) = operator.as_word() {
            if let Some(form) = self.special_forms.get(name) {
                debug!(name, argc = args.len(), "special form");
                return form.invoke(self, args, scope);
            }
        }

        let callee = self.evaluate(operator, scope)?;
        let Value::Function(func) = callee else {
            return Err(not_callable(callee.type_name()));
        };

        let values = args
            .iter()
            .map(|arg| self.evaluate(arg, scope))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(name = func.name(), argc = values.len(), "call");
        func.call(self, &values)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
