//! Special-form table.
//!
//! A special form is a named handler for applications that must not have
//! their arguments evaluated up front: conditionals, loops, definitions.
//! The handler gets the raw argument expressions and decides itself which
//! of them to evaluate, and in what order.
//!
//! The table starts empty. The core defines no forms of its own; whatever
//! runtime drives the interpreter registers them. Each [`Interpreter`] owns
//! its table, so independent interpreters can carry different forms.

use rustc_hash::FxHashMap;
use std::fmt;
use std::rc::Rc;

use egg_ir::Expr;

use crate::{EvalResult, Interpreter, LocalScope, Scope};

/// Signature of a special-form handler.
pub type SpecialFormFn = dyn Fn(&Interpreter, &[Expr], &LocalScope<Scope>) -> EvalResult;

/// A registered special form. Cheap to clone.
#[derive(Clone)]
pub struct SpecialForm(Rc<SpecialFormFn>);

impl SpecialForm {
    pub fn new(
        handler: impl Fn(&Interpreter, &[Expr], &LocalScope<Scope>) -> EvalResult + 'static,
    ) -> Self {
        SpecialForm(Rc::new(handler))
    }

    /// Run the handler on unevaluated `args`.
    #[inline]
    pub fn invoke(
        &self,
        interpreter: &Interpreter,
        args: &[Expr],
        scope: &LocalScope<Scope>,
    ) -> EvalResult {
        (self.0)(interpreter, args, scope)
    }
}

/// Name-keyed table of special forms.
#[derive(Clone, Default)]
pub struct SpecialForms {
    forms: FxHashMap<String, SpecialForm>,
}

impl SpecialForms {
    pub fn new() -> Self {
        SpecialForms::default()
    }

    /// Register `handler` under `name`, returning the form it replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: impl Fn(&Interpreter, &[Expr], &LocalScope<Scope>) -> EvalResult + 'static,
    ) -> Option<SpecialForm> {
        self.forms.insert(name.into(), SpecialForm::new(handler))
    }

    /// Remove the form registered under `name`.
    pub fn unregister(&mut self, name: &str) -> Option<SpecialForm> {
        self.forms.remove(name)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&SpecialForm> {
        self.forms.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.forms.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.forms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for SpecialForms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests;
