//! Source spans and the token cursor used by grammar functions.
//!
//! A line is processed in isolation, so a [`Span`] is a half-open range of
//! 0-based character columns within that line. [`TokenCursor`] is the index a
//! recursive-descent rule advances over a token slice.

use std::fmt;

/// A half-open column range within one line: `[start, end)`.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// First column covered (inclusive).
    pub start: usize,
    /// Column just past the last one covered (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new `Span`.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Is this span empty (start == end)?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of columns covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A read position inside a token slice.
///
/// The cursor is `Copy`: a grammar rule probes on a copy and writes the copy
/// back only when it succeeds, so a failed rule leaves its caller's cursor
/// where it was. The committed position never moves backwards.
///
/// Invariant: `pos <= tokens.len()`; `pos == tokens.len()` means every token
/// has been consumed.
#[derive(Debug)]
pub struct TokenCursor<'a, T> {
    tokens: &'a [T],
    pos: usize,
}

// Manual impls: derives would require `T: Clone`.
impl<T> Clone for TokenCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TokenCursor<'_, T> {}

impl<'a, T> TokenCursor<'a, T> {
    /// Creates a cursor positioned before the first token.
    pub fn new(tokens: &'a [T]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Current index into the token slice.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Have all tokens been consumed?
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos == self.tokens.len()
    }

    /// The token under the cursor, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<&'a T> {
        self.tokens.get(self.pos)
    }

    /// Consumes the token under the cursor if `pred` accepts it.
    pub fn advance_if(&mut self, pred: impl FnOnce(&T) -> bool) -> Option<&'a T> {
        match self.peek() {
            Some(tok) if pred(tok) => {
                self.pos += 1;
                Some(tok)
            }
            _ => None,
        }
    }

    /// Runs `rule` on a copy of this cursor and commits the copy only on
    /// success.
    ///
    /// This is how every grammar rule keeps the "advance on success, untouched
    /// on failure" contract without explicit backtracking.
    pub fn attempt(&mut self, rule: impl FnOnce(&mut Self) -> bool) -> bool {
        let mut probe = *self;
        if rule(&mut probe) {
            debug_assert!(probe.pos >= self.pos);
            *self = probe;
            true
        } else {
            false
        }
    }
}

/// Build a [`Span`] inline from 0-based column coordinates.
///
/// # Examples
///
/// ```rust
/// # use linexpr::span;
/// let s = span!(2, 5);
/// assert_eq!(s.len(), 3);
/// ```
#[macro_export]
macro_rules! span {
    ($start:expr, $end:expr) => {
        $crate::Span {
            start: $start,
            end: $end,
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_display_and_len() {
        let s = span!(2, 7);
        assert_eq!(s.to_string(), "2..7");
        assert_eq!(s.len(), 5);
        assert!(!s.is_empty());
        assert!(Span::new(4, 4).is_empty());
    }

    #[test]
    fn advance_if_walks_to_end() {
        let toks = [1, 2, 3];
        let mut c = TokenCursor::new(&toks);
        assert_eq!(c.peek(), Some(&1));
        while c.advance_if(|_| true).is_some() {}
        assert!(c.is_at_end());
        assert_eq!(c.peek(), None);
        assert_eq!(c.pos(), 3);
    }

    #[test]
    fn advance_if_only_consumes_on_match() {
        let toks = ['a', 'b'];
        let mut c = TokenCursor::new(&toks);
        assert!(c.advance_if(|t| *t == 'b').is_none());
        assert_eq!(c.pos(), 0);
        assert_eq!(c.advance_if(|t| *t == 'a'), Some(&'a'));
        assert_eq!(c.pos(), 1);
    }

    #[test]
    fn failed_attempt_leaves_cursor_untouched() {
        let toks = ['-', 'x'];
        let mut c = TokenCursor::new(&toks);
        let ok = c.attempt(|p| {
            p.advance_if(|t| *t == '-').is_some() && p.advance_if(|t| *t == '1').is_some()
        });
        assert!(!ok);
        assert_eq!(c.pos(), 0);

        let ok = c.attempt(|p| p.advance_if(|t| *t == '-').is_some());
        assert!(ok);
        assert_eq!(c.pos(), 1);
    }
}
