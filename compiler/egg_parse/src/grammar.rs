//! Expression grammar.
//!
//! ```text
//! expr  := atom call*
//! atom  := string | number | word
//! call  := '(' ( expr ( ',' expr )* )? ')'
//! ```
//!
//! Whitespace is allowed before every token. The grammar is prefix
//! unambiguous, so no backtracking is needed.

use egg_ir::{Expr, Literal, Span};
use tracing::{debug, trace};

use crate::error::{expected_comma_or_paren, nesting_too_deep, unexpected_syntax};
use crate::{ParseError, Parser};

impl Parser<'_, '_> {
    /// Parse one expression together with any calls applied to it.
    ///
    /// Every nested argument comes back through here, so this is where the
    /// nesting limit is enforced.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let guard = self.guard;
        guard
            .descend(|| {
                let atom = self.parse_atom()?;
                self.parse_calls(atom)
            })
            .map_err(|exceeded| nesting_too_deep(exceeded.limit, self.cursor.point_span()))?
    }

    /// Parse a string, number, or word at the cursor.
    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        self.cursor.skip_whitespace();
        debug!(pos = self.cursor.position(), "parse_atom");

        if let Some(contents) = self.cursor.eat_string() {
            return Ok(Expr::Value(Literal::Str(contents.to_owned())));
        }
        if let Some(digits) = self.cursor.eat_number() {
            return Ok(Expr::Value(Literal::Number(parse_number(digits))));
        }
        if let Some(word) = self.cursor.eat_word() {
            return Ok(Expr::word(word));
        }
        Err(unexpected_syntax(self.cursor.rest(), self.cursor.rest_span()))
    }

    /// Wrap `expr` in an `Apply` for each `( ... )` that follows it.
    fn parse_calls(&mut self, mut expr: Expr) -> Result<Expr, ParseError> {
        loop {
            self.cursor.skip_whitespace();
            if !self.cursor.eat('(') {
                return Ok(expr);
            }
            trace!(pos = self.cursor.position(), operator = expr.kind_name(), "call");
            let args = self.parse_args()?;
            expr = Expr::apply(expr, args);
        }
    }

    /// Comma-separated arguments up to and including the closing `)`.
    ///
    /// The opening `(` has already been consumed.
    fn parse_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();

        self.cursor.skip_whitespace();
        if self.cursor.eat(')') {
            return Ok(args);
        }

        loop {
            args.push(self.parse_expr()?);
            self.cursor.skip_whitespace();
            if self.cursor.eat(',') {
                continue;
            }
            if self.cursor.eat(')') {
                return Ok(args);
            }
            let found = self.cursor.peek();
            let span = match found {
                Some(ch) => {
                    let start = self.cursor.position();
                    Span::from_offsets(start, start + ch.len_utf8())
                }
                None => self.cursor.point_span(),
            };
            return Err(expected_comma_or_paren(found, span));
        }
    }
}

/// Convert a run of ASCII digits to a number.
///
/// Runs too long for exact representation round to the nearest `f64`, and
/// runs past `f64::MAX` saturate to infinity (`f64::from_str` does both).
fn parse_number(digits: &str) -> f64 {
    match digits.parse::<f64>() {
        Ok(value) => {
            if value.is_infinite() {
                debug!(len = digits.len(), "number literal overflows to infinity");
            }
            value
        }
        Err(_) => unreachable!("eat_number returned a non-digit run"),
    }
}
