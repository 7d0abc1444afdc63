//! Stack safety utilities for deep recursion.
//!
//! Both the parser and the evaluator recurse once per level of expression
//! nesting, so a pathological program like `f(f(f(...)))` translates directly
//! into call-stack depth. Two tools keep that in check:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand (via
//!   `stacker`) so that legitimate deep nesting does not overflow.
//! - [`RecursionGuard`] puts a hard ceiling on nesting depth so that
//!   adversarial input fails with an error instead of allocating without
//!   bound.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: no-op passthrough (WASM has its own stack management).

use std::cell::Cell;
use std::fmt;

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Returned by [`RecursionGuard::descend`] when the depth ceiling is hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LimitExceeded {
    /// The ceiling that was hit.
    pub limit: usize,
}

impl fmt::Display for LimitExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "maximum nesting depth of {} exceeded", self.limit)
    }
}

impl std::error::Error for LimitExceeded {}

/// Tracks how deep a recursive walk currently is and refuses to go past a
/// fixed limit.
///
/// Uses a `Cell` so it can be shared through `&self` receivers: the evaluator
/// hands `&Interpreter` to special forms, which re-enter `evaluate`.
#[derive(Debug)]
pub struct RecursionGuard {
    depth: Cell<usize>,
    limit: usize,
}

impl RecursionGuard {
    /// Create a guard allowing at most `limit` nested levels.
    pub const fn new(limit: usize) -> Self {
        RecursionGuard {
            depth: Cell::new(0),
            limit,
        }
    }

    /// The configured ceiling.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Current nesting depth (0 when idle).
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Run `f` one level deeper.
    ///
    /// Fails without calling `f` if the guard is already at its limit. The
    /// stack is grown if needed before `f` runs, and the depth is restored
    /// when `f` returns or unwinds.
    pub fn descend<R>(&self, f: impl FnOnce() -> R) -> Result<R, LimitExceeded> {
        let depth = self.depth.get();
        if depth >= self.limit {
            return Err(LimitExceeded { limit: self.limit });
        }
        self.depth.set(depth + 1);
        let _restore = RestoreDepth {
            depth: &self.depth,
            saved: depth,
        };
        Ok(ensure_sufficient_stack(f))
    }
}

/// Resets the guard's depth on drop, including during a panic.
struct RestoreDepth<'a> {
    depth: &'a Cell<usize>,
    saved: usize,
}

impl Drop for RestoreDepth<'_> {
    fn drop(&mut self) {
        self.depth.set(self.saved);
    }
}
