//! Egg Parse - recursive-descent parser for the Egg language.
//!
//! Turns program text into an [`egg_ir::Expr`]. There is no separate lexer;
//! the grammar is simple enough that each atomic form is recognized directly
//! from the source text.
//!
//! # Entry points
//!
//! - [`parse`]: a whole program, which must be exactly one expression.
//! - [`parse_expression`]: one expression from the front of the text,
//!   returning whatever text is left over.
//! - [`parse_with_max_depth`]: [`parse`] with a custom nesting limit.

mod cursor;
mod error;
mod grammar;

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Tests use unwrap for brevity"
)]
mod tests;

use cursor::Cursor;
use egg_ir::Expr;
use egg_stack::RecursionGuard;
use tracing::debug;

pub use error::{ParseError, ParseErrorKind};

/// Default limit on how deeply expressions may nest.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parser state: a cursor into the source plus the nesting guard.
pub(crate) struct Parser<'src, 'g> {
    cursor: Cursor<'src>,
    guard: &'g RecursionGuard,
}

impl<'src, 'g> Parser<'src, 'g> {
    fn new(source: &'src str, guard: &'g RecursionGuard) -> Self {
        Parser {
            cursor: Cursor::new(source),
            guard,
        }
    }

    /// Parse one expression and require that only whitespace follows it.
    fn parse_program(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;
        self.cursor.skip_whitespace();
        if !self.cursor.is_at_end() {
            return Err(error::trailing_text(
                self.cursor.rest(),
                self.cursor.rest_span(),
            ));
        }
        Ok(expr)
    }

    /// Parse one expression and hand back the unconsumed text.
    fn parse_prefix(mut self) -> Result<(Expr, &'src str), ParseError> {
        let expr = self.parse_expr()?;
        Ok((expr, self.cursor.rest()))
    }
}

/// Parse a complete program.
///
/// Fails if no expression can be parsed at the start of `source`, or if
/// anything other than whitespace follows the expression.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    parse_with_max_depth(source, MAX_NESTING_DEPTH)
}

/// [`parse`] with an explicit limit on expression nesting.
pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<Expr, ParseError> {
    debug!(len = source.len(), max_depth, "parse");
    let guard = RecursionGuard::new(max_depth);
    Parser::new(source, &guard).parse_program()
}

/// Parse the expression at the start of `source`.
///
/// Returns the expression and the text remaining after it. Whitespace
/// following the expression is consumed while looking for a further call,
/// so the remainder starts at the next non-whitespace character.
pub fn parse_expression(source: &str) -> Result<(Expr, &str), ParseError> {
    let guard = RecursionGuard::new(MAX_NESTING_DEPTH);
    Parser::new(source, &guard).parse_prefix()
}
