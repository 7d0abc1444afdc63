//! Command handlers for the `egg` CLI.
//!
//! Each handler prints its result to stdout, or an `error:` line to stderr
//! followed by exit code 1.

use egg_eval::Value;

use crate::{eval_source, format_source, parse_source, DriverError};

/// Label used in diagnostics for programs passed on the command line.
const INLINE_PATH: &str = "<inline>";

fn read_file(path: &str) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_string(),
        source,
    })
}

fn exit_with(error: &DriverError) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}

/// `egg parse <file>`: dump the syntax tree.
pub fn parse_file(path: &str) {
    match read_file(path).and_then(|source| parse_source(path, &source)) {
        Ok(expr) => println!("{expr:#?}"),
        Err(error) => exit_with(&error),
    }
}

/// `egg fmt <file>`: print the program in canonical form.
pub fn fmt_file(path: &str) {
    match read_file(path).and_then(|source| format_source(path, &source)) {
        Ok(formatted) => println!("{formatted}"),
        Err(error) => exit_with(&error),
    }
}

/// `egg run <file>`: evaluate a program file.
pub fn run_file(path: &str, bindings: Vec<(String, Value)>) {
    match read_file(path).and_then(|source| eval_source(path, &source, bindings)) {
        Ok(value) => println!("{value}"),
        Err(error) => exit_with(&error),
    }
}

/// `egg eval <source>`: evaluate a program given inline.
pub fn eval_inline(source: &str, bindings: Vec<(String, Value)>) {
    match eval_source(INLINE_PATH, source, bindings) {
        Ok(value) => println!("{value}"),
        Err(error) => exit_with(&error),
    }
}

/// Report a malformed `-D` binding and exit.
pub fn invalid_binding(error: &DriverError) -> ! {
    exit_with(error)
}
