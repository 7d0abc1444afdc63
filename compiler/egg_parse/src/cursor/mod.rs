//! Character cursor over the program source.
//!
//! The grammar has no separate lexer: each `eat_*` method recognizes one
//! atomic form directly at the current position and advances past it on
//! success. A failed `eat_*` never moves the cursor.

use egg_ir::{is_whitespace, is_word_char, Span};
use tracing::trace;

pub(crate) struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Byte offset of the cursor.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unconsumed source text.
    #[inline]
    pub fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Zero-length span at the cursor.
    #[inline]
    pub fn point_span(&self) -> Span {
        Span::from_offsets(self.pos, self.pos)
    }

    /// Span from the cursor to the end of the source.
    #[inline]
    pub fn rest_span(&self) -> Span {
        Span::from_offsets(self.pos, self.source.len())
    }

    /// Discard a maximal run of whitespace.
    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start_matches(is_whitespace).len();
    }

    /// Consume `expected` if it is the next character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// `"..."`: everything up to the next quote, no escapes.
    ///
    /// Returns the contents without quotes. An unterminated string does not
    /// match.
    pub fn eat_string(&mut self) -> Option<&'src str> {
        let body = self.rest().strip_prefix('"')?;
        let close = body.find('"')?;
        let contents = &body[..close];
        trace!(pos = self.pos, len = contents.len(), "string literal");
        self.pos += close + 2;
        Some(contents)
    }

    /// A maximal run of ASCII digits ending on a word boundary.
    ///
    /// `42`, `42)` and `42 ` match; `42abc` and `42_` do not, since the digits
    /// run straight into an identifier character.
    pub fn eat_number(&mut self) -> Option<&'src str> {
        let rest = self.rest();
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            return None;
        }
        if rest
            .as_bytes()
            .get(len)
            .is_some_and(|&b| b.is_ascii_alphanumeric() || b == b'_')
        {
            return None;
        }
        let digits = &rest[..len];
        trace!(pos = self.pos, digits, "number literal");
        self.pos += len;
        Some(digits)
    }

    /// A maximal run of word characters.
    pub fn eat_word(&mut self) -> Option<&'src str> {
        let rest = self.rest();
        let len = rest.find(|ch: char| !is_word_char(ch)).unwrap_or(rest.len());
        if len == 0 {
            return None;
        }
        let word = &rest[..len];
        trace!(pos = self.pos, word, "word");
        self.pos += len;
        Some(word)
    }
}
