//! Egg driver library.
//!
//! The pieces of the `egg` binary that don't touch the process: reading
//! `-D name=value` bindings, parsing and evaluating a source string, and
//! rendering failures with a file location. `commands` wraps these with
//! file I/O, printing and exit codes.

pub mod commands;

use std::fmt;
use std::sync::Once;

use egg_eval::{EvalError, Interpreter, LocalScope, Scope, Value};
use egg_ir::Expr;
use egg_parse::ParseError;
use tracing::debug;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Call this once at startup. Safe to call multiple times. Only installs
/// anything when `RUST_LOG` is set, e.g. `RUST_LOG=egg_eval=debug` or
/// `RUST_LOG=egg_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Everything the driver can fail with.
#[derive(Debug)]
pub enum DriverError {
    /// Source file could not be read.
    Read { path: String, source: std::io::Error },
    /// Program text failed to parse.
    Parse {
        path: String,
        line: usize,
        col: usize,
        error: ParseError,
    },
    /// Program failed while evaluating.
    Eval { path: String, error: EvalError },
    /// A `-D` binding was malformed.
    InvalidBinding { binding: String, reason: String },
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Read { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => write!(f, "cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    write!(f, "permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    write!(f, "'{path}' contains invalid UTF-8 data")
                }
                _ => write!(f, "error reading '{path}': {source}"),
            },
            DriverError::Parse {
                path,
                line,
                col,
                error,
            } => write!(f, "{error}\n  --> {path}:{line}:{col}"),
            DriverError::Eval { path, error } => write!(f, "runtime error in '{path}': {error}"),
            DriverError::InvalidBinding { binding, reason } => {
                write!(f, "invalid binding '{binding}': {reason}")
            }
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::Read { source, .. } => Some(source),
            DriverError::Parse { error, .. } => Some(error),
            DriverError::Eval { error, .. } => Some(error),
            DriverError::InvalidBinding { .. } => None,
        }
    }
}

/// Parse `name=value`, where `value` is a number or string literal.
///
/// `-D greeting="hi"` and `-D limit=10` both work; anything that isn't a
/// single literal (a word, a call) is rejected.
pub fn parse_binding(binding: &str) -> Result<(String, Value), DriverError> {
    let invalid = |reason: &str| DriverError::InvalidBinding {
        binding: binding.to_string(),
        reason: reason.to_string(),
    };

    let Some((name, value)) = binding.split_once('=') else {
        return Err(invalid("expected name=value"));
    };
    match egg_parse::parse(name) {
        Ok(Expr::Word { name: parsed }) if parsed == name => {}
        _ => return Err(invalid("name must be a single word")),
    }
    match egg_parse::parse(value) {
        Ok(Expr::Value(literal)) => Ok((name.to_string(), Value::from(&literal))),
        Ok(_) => Err(invalid("value must be a number or string literal")),
        Err(error) => Err(invalid(&error.to_string())),
    }
}

/// Arguments to `egg run` / `egg eval` after the command name.
#[derive(Debug, Default, PartialEq)]
pub struct RunArgs<'a> {
    /// First positional argument: the file (`run`) or program text (`eval`).
    pub target: Option<&'a str>,
    /// `-D` bindings in command-line order.
    pub bindings: Vec<(String, Value)>,
}

/// Split `args` into the target and its `-D` bindings.
///
/// Accepts both `-D name=value` and `-Dname=value`. A `-D` with nothing after
/// it is an error, never a target.
pub fn parse_run_args(args: &[String]) -> Result<RunArgs<'_>, DriverError> {
    let mut run_args = RunArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if let Some(attached) = arg.strip_prefix("-D") {
            let binding: &str = if attached.is_empty() {
                iter.next().ok_or_else(|| DriverError::InvalidBinding {
                    binding: arg.clone(),
                    reason: "expected name=value after -D".to_string(),
                })?
            } else {
                attached
            };
            run_args.bindings.push(parse_binding(binding)?);
        } else if run_args.target.is_none() {
            run_args.target = Some(arg.as_str());
        }
    }
    Ok(run_args)
}

/// Parse `source`, attaching `path` and a line/column to any error.
pub fn parse_source(path: &str, source: &str) -> Result<Expr, DriverError> {
    egg_parse::parse(source).map_err(|error| {
        let (line, col) = error.span.line_col(source);
        DriverError::Parse {
            path: path.to_string(),
            line,
            col,
            error,
        }
    })
}

/// Parse and evaluate `source` in a scope holding only `bindings`.
///
/// The interpreter has no special forms registered; this driver carries no
/// runtime library.
pub fn eval_source(
    path: &str,
    source: &str,
    bindings: Vec<(String, Value)>,
) -> Result<Value, DriverError> {
    let expr = parse_source(path, source)?;
    debug!(path, bindings = bindings.len(), "evaluating");
    let scope: LocalScope<Scope> = bindings.into_iter().collect::<Scope>().into_local();
    Interpreter::new()
        .evaluate(&expr, &scope)
        .map_err(|error| DriverError::Eval {
            path: path.to_string(),
            error,
        })
}

/// Parse `source` and print it back in canonical form.
pub fn format_source(path: &str, source: &str) -> Result<String, DriverError> {
    parse_source(path, source).map(|expr| expr.to_string())
}
