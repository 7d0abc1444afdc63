//! `InterpreterBuilder` for creating `Interpreter` instances.

use egg_stack::RecursionGuard;

use super::{Interpreter, MAX_EVAL_DEPTH};
use crate::{EvalResult, LocalScope, Scope, SpecialForms};
use egg_ir::Expr;

/// Builder for [`Interpreter`].
///
/// Defaults: an empty special-form table and [`MAX_EVAL_DEPTH`].
pub struct InterpreterBuilder {
    special_forms: SpecialForms,
    max_depth: usize,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            special_forms: SpecialForms::new(),
            max_depth: MAX_EVAL_DEPTH,
        }
    }

    /// Replace the whole special-form table.
    #[must_use]
    pub fn special_forms(mut self, forms: SpecialForms) -> Self {
        self.special_forms = forms;
        self
    }

    /// Register one special form.
    #[must_use]
    pub fn special_form(
        mut self,
        name: impl Into<String>,
        handler: impl Fn(&Interpreter, &[Expr], &LocalScope<Scope>) -> EvalResult + 'static,
    ) -> Self {
        self.special_forms.register(name, handler);
        self
    }

    /// Limit on nested `evaluate` calls.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            special_forms: self.special_forms,
            guard: RecursionGuard::new(self.max_depth),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
