//! Evaluation errors.
//!
//! `EvalErrorKind` carries the structured data for matching on a failure;
//! the factory functions below are the intended way to build errors, so the
//! message text lives in one place.

use crate::Value;
use std::fmt;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// A word names nothing in scope.
    UndefinedBinding { name: String },
    /// The operator of an application is not a function.
    NotCallable { type_name: String },
    /// A value of the wrong kind was handed to a consumer.
    TypeMismatch { expected: String, got: String },
    /// A function or special form got the wrong number of arguments.
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    /// Evaluation nested deeper than the interpreter allows.
    RecursionLimit { limit: usize },
    /// Failure raised by runtime code outside the core.
    Custom { message: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedBinding { name } => write!(f, "undefined binding: {name}"),
            Self::NotCallable { type_name } => {
                write!(f, "applying a non-function: {type_name} is not callable")
            }
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{name} expects {expected} {arg_word}, got {got}")
            }
            Self::RecursionLimit { limit } => {
                write!(f, "maximum recursion depth exceeded (limit: {limit})")
            }
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    /// Create an error with just a message (`Custom` kind).
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        EvalError {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

/// Word not bound in any enclosing scope.
#[cold]
pub fn undefined_binding(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedBinding {
        name: name.to_string(),
    })
}

/// Operator evaluated to something other than a function.
#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

/// Value of the wrong kind.
#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Wrong number of arguments.
#[cold]
pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

/// Maximum evaluation depth exceeded.
#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { limit })
}

/// Check that `args` has exactly `expected` elements.
///
/// Convenience for runtime functions and special forms, which are
/// responsible for their own arity.
#[inline]
pub fn check_arg_count<T>(name: &str, args: &[T], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(wrong_arg_count(name, expected, args.len()))
    }
}
