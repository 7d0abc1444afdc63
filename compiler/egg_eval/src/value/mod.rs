//! Runtime values.
//!
//! Values are distinct from the syntax tree: a literal node evaluates to a
//! `Value`, but no `Expr` is ever itself a value. There is no implicit
//! coercion between kinds; consumers go through the `as_*` accessors, which
//! fail with a `TypeMismatch` error on the wrong kind.

use std::fmt;
use std::rc::Rc;

use egg_ir::Literal;

use crate::errors::type_mismatch;
use crate::{EvalError, EvalResult, Interpreter};

/// Signature of a callable.
///
/// The interpreter is passed in so functions built by special forms (a
/// user-level `fun`, say) can evaluate their bodies.
pub type NativeFn = dyn Fn(&Interpreter, &[Value]) -> EvalResult;

/// A named callable.
///
/// Cheap to clone; clones share the underlying closure. Two function values
/// are equal only if they share it.
#[derive(Clone)]
pub struct FunctionValue {
    name: Rc<str>,
    func: Rc<NativeFn>,
}

impl FunctionValue {
    pub fn new(
        name: impl Into<Rc<str>>,
        func: impl Fn(&Interpreter, &[Value]) -> EvalResult + 'static,
    ) -> Self {
        FunctionValue {
            name: name.into(),
            func: Rc::new(func),
        }
    }

    /// Name used in diagnostics.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke with already-evaluated arguments.
    #[inline]
    pub fn call(&self, interpreter: &Interpreter, args: &[Value]) -> EvalResult {
        (self.func)(interpreter, args)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionValue({})", self.name)
    }
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

/// A runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Str(String),
    Number(f64),
    Function(FunctionValue),
}

impl Value {
    /// Kind name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Number(_) => "number",
            Value::Function(_) => "function",
        }
    }

    pub fn as_str(&self) -> Result<&str, EvalError> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(type_mismatch("string", other.type_name())),
        }
    }

    pub fn as_number(&self) -> Result<f64, EvalError> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(type_mismatch("number", other.type_name())),
        }
    }

    pub fn as_function(&self) -> Result<&FunctionValue, EvalError> {
        match self {
            Value::Function(func) => Ok(func),
            other => Err(type_mismatch("function", other.type_name())),
        }
    }

    #[inline]
    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Str(s) => Value::Str(s.clone()),
            Literal::Number(n) => Value::Number(*n),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<FunctionValue> for Value {
    fn from(func: FunctionValue) -> Self {
        Value::Function(func)
    }
}

/// Strings print raw (no quotes), numbers in their shortest form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Function(func) => write!(f, "<function {}>", func.name),
        }
    }
}
