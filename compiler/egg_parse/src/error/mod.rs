//! Parse error types.
//!
//! Parsing stops at the first error: there is no recovery and no partial
//! tree, so a `ParseError` is always the whole outcome of a failed parse.

use egg_ir::Span;
use std::fmt;

/// Longest slice of unmatched source quoted back in a message.
const MAX_QUOTED_CHARS: usize = 32;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No atomic form (string, number, word) matches at this position.
    UnexpectedSyntax { remainder: String },
    /// An argument was not followed by `,` or `)`.
    ///
    /// `found` is `None` when the source ended inside the argument list.
    ExpectedCommaOrParen { found: Option<char> },
    /// Something follows the complete top-level expression.
    TrailingText { remainder: String },
    /// Expressions nest deeper than the parser allows.
    NestingTooDeep { limit: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnexpectedSyntax { remainder } if remainder.is_empty() => {
                write!(f, "unexpected end of input")
            }
            ParseErrorKind::UnexpectedSyntax { remainder } => {
                write!(f, "unexpected syntax: {remainder}")
            }
            ParseErrorKind::ExpectedCommaOrParen { found: Some(ch) } => {
                write!(f, "expected ',' or ')', found '{ch}'")
            }
            ParseErrorKind::ExpectedCommaOrParen { found: None } => {
                write!(f, "expected ',' or ')', found end of input")
            }
            ParseErrorKind::TrailingText { remainder } => {
                write!(f, "unexpected text after program: {remainder}")
            }
            ParseErrorKind::NestingTooDeep { limit } => {
                write!(f, "expression nesting exceeds the limit of {limit} levels")
            }
        }
    }
}

/// A failed parse, with the location it failed at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    /// True for grammar violations, false for resource limits.
    pub fn is_syntax_error(&self) -> bool {
        !matches!(self.kind, ParseErrorKind::NestingTooDeep { .. })
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_syntax_error() {
            write!(f, "syntax error: {}", self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl std::error::Error for ParseError {}

fn quote(remainder: &str) -> String {
    let first_line = remainder.lines().next().unwrap_or("");
    let mut quoted: String = first_line.chars().take(MAX_QUOTED_CHARS).collect();
    if quoted.len() < remainder.len() {
        quoted.push_str("...");
    }
    quoted
}

#[cold]
pub(crate) fn unexpected_syntax(remainder: &str, span: Span) -> ParseError {
    ParseError::new(
        ParseErrorKind::UnexpectedSyntax {
            remainder: quote(remainder),
        },
        span,
    )
}

#[cold]
pub(crate) fn expected_comma_or_paren(found: Option<char>, span: Span) -> ParseError {
    ParseError::new(ParseErrorKind::ExpectedCommaOrParen { found }, span)
}

#[cold]
pub(crate) fn trailing_text(remainder: &str, span: Span) -> ParseError {
    ParseError::new(
        ParseErrorKind::TrailingText {
            remainder: quote(remainder),
        },
        span,
    )
}

#[cold]
pub(crate) fn nesting_too_deep(limit: usize, span: Span) -> ParseError {
    ParseError::new(ParseErrorKind::NestingTooDeep { limit }, span)
}
