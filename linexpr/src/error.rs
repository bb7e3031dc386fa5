//! Per-line error taxonomy.
//!
//! Every failure that can happen while processing one input line is a
//! [`LineError`]. Line errors never abort the run: the driver reports them
//! and moves on to the next line.
//!
//! # Examples
//!
//! ```rust
//! # use linexpr::{ErrorClass, LineError, Span};
//! let err = LineError::Lexical {
//!     lexeme: "x".into(),
//!     span: Span::new(2, 3),
//! };
//! assert_eq!(err.class(), ErrorClass::Lexical);
//! assert!(err.to_string().contains("invalid lexeme"));
//! ```

use crate::Span;
use smartstring::alias::String;
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// Why a token stream failed to derive from the start symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarFault {
    /// The derivation needed another token (or a different one) at `position`.
    Incomplete,
    /// A complete expression was derived but tokens remain after it.
    TrailingTokens,
    /// Two operator tokens follow each other directly.
    AdjacentOperators,
}

impl fmt::Display for GrammarFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GrammarFault::Incomplete => "incomplete expression",
            GrammarFault::TrailingTokens => "unexpected trailing tokens",
            GrammarFault::AdjacentOperators => "adjacent operators",
        };
        f.write_str(s)
    }
}

/// The three report classes a line can fall into.
///
/// Overflow is a numeric failure and is classified with conversion errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Lexical,
    Grammar,
    Conversion,
}

/// Represents everything that can go wrong with a single line.
///
/// # Variants
///
/// - [`LineError::Lexical`]: a character outside the active alphabet.
/// - [`LineError::Grammar`]: the tokens are well formed but do not make an
///   expression.
/// - [`LineError::Conversion`]: a numeric lexeme is not an `i64`
///   (for example a bare run of minus signs, or a literal that is too long).
/// - [`LineError::Overflow`]: evaluation left the `i64` range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("invalid lexeme {lexeme:?} at {span}")]
    Lexical { lexeme: String, span: Span },

    #[error("{reason} at token {position}")]
    Grammar {
        /// Token index where the derivation stopped.
        position: usize,
        reason: GrammarFault,
    },

    #[error("unable to parse {lexeme:?} as an integer")]
    Conversion {
        lexeme: String,
        #[source]
        source: ParseIntError,
    },

    #[error("integer overflow")]
    Overflow,
}

impl LineError {
    /// Returns the report class of this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            LineError::Lexical { .. } => ErrorClass::Lexical,
            LineError::Grammar { .. } => ErrorClass::Grammar,
            LineError::Conversion { .. } | LineError::Overflow => ErrorClass::Conversion,
        }
    }

    /// Shorthand for a [`LineError::Grammar`].
    pub fn grammar(position: usize, reason: GrammarFault) -> Self {
        LineError::Grammar { position, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_error_trait_obj(e: &dyn std::error::Error) -> &dyn std::error::Error {
        e
    }

    #[test]
    fn conversion_keeps_parse_int_source() {
        let source = "--".parse::<i64>().unwrap_err();
        let err = LineError::Conversion {
            lexeme: "--".into(),
            source,
        };
        assert_eq!(err.class(), ErrorClass::Conversion);
        assert!(std::error::Error::source(_assert_error_trait_obj(&err)).is_some());
        assert!(err.to_string().contains("\"--\""));
    }

    #[test]
    fn grammar_display_names_reason_and_position() {
        let err = LineError::grammar(2, GrammarFault::AdjacentOperators);
        assert_eq!(err.class(), ErrorClass::Grammar);
        assert_eq!(err.to_string(), "adjacent operators at token 2");
    }

    #[test]
    fn overflow_is_a_conversion_class_error() {
        assert_eq!(LineError::Overflow.class(), ErrorClass::Conversion);
    }

    // If LineError ever stops being Send + Sync + 'static this will fail to compile.
    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}
    #[test]
    fn line_error_is_send_sync_static() {
        _assert_send_sync_static::<LineError>();
    }
}
