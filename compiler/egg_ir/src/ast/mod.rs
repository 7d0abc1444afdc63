//! Egg abstract syntax tree.
//!
//! A program is a single expression. There are only three kinds:
//! literal values, words (references to bindings), and applications.
//! Everything else in the language (conditionals, loops, definitions) is an
//! application whose operator happens to name a special form.

use std::fmt;

/// Literal payload of an [`Expr::Value`] node.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// Double-quoted string, stored without its quotes.
    Str(String),
    /// Unsigned integer literal.
    Number(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => write!(f, "\"{s}\""),
            // A digit run past `f64::MAX` parses to infinity; 10^309 is one.
            Literal::Number(n) if n.is_infinite() && n.is_sign_positive() => {
                write!(f, "1{}", "0".repeat(309))
            }
            Literal::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A literal constant.
    Value(Literal),
    /// A reference to a binding in scope.
    Word { name: String },
    /// A call: `operator(args...)`.
    ///
    /// The operator is an arbitrary expression, so `f(x)(y)` is an `Apply`
    /// whose operator is itself an `Apply`.
    Apply { operator: Box<Expr>, args: Vec<Expr> },
}

impl Expr {
    pub fn string(value: impl Into<String>) -> Self {
        Expr::Value(Literal::Str(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Expr::Value(Literal::Number(value))
    }

    pub fn word(name: impl Into<String>) -> Self {
        Expr::Word { name: name.into() }
    }

    pub fn apply(operator: Expr, args: Vec<Expr>) -> Self {
        Expr::Apply {
            operator: Box::new(operator),
            args,
        }
    }

    /// The name of a `Word`, or `None` for other kinds.
    #[inline]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Expr::Word { name } => Some(name),
            _ => None,
        }
    }

    /// Short kind name for diagnostics and logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Value(_) => "value",
            Expr::Word { .. } => "word",
            Expr::Apply { .. } => "apply",
        }
    }
}

/// Prints the expression back in surface syntax.
///
/// Output re-parses to an equal tree as long as string literals contain no
/// `"` and words are valid identifiers; both hold for anything the parser
/// produced. Numbers print as plain digit runs, never in exponent form, and
/// positive infinity prints as a run large enough to saturate again.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Value(literal) => write!(f, "{literal}"),
            Expr::Word { name } => write!(f, "{name}"),
            Expr::Apply { operator, args } => {
                write!(f, "{operator}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// True if `ch` separates tokens.
///
/// Unicode `White_Space` plus the byte-order mark U+FEFF, minus NEL (U+0085).
/// A BOM at the start of a file is skipped like any other blank, and NEL is
/// an ordinary word character.
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    match ch {
        '\u{feff}' => true,
        '\u{85}' => false,
        _ => ch.is_whitespace(),
    }
}

/// True if `ch` may appear in a word.
///
/// Words are maximal runs of anything except whitespace and the punctuation
/// the grammar reserves: `(`, `)`, `,`, `#` and `"`.
#[inline]
pub fn is_word_char(ch: char) -> bool {
    !is_whitespace(ch) && !matches!(ch, '(' | ')' | ',' | '#' | '"')
}

#[cfg(test)]
mod tests;
