//! # Recognizer
//!
//! Recursive-descent membership test for the arithmetic grammar:
//!
//! ```text
//! Expression := Term (('+' | '-') Expression)?
//! Term       := Number ('*' Term)?
//! Number     := INTEGER | '-' INTEGER
//! ```
//!
//! `INTEGER` is a `Number` token whose lexeme converts to `i64`. Each rule
//! takes the token cursor, advances it and returns `true` on success, or
//! returns `false` with the cursor where it found it. The optional tails are
//! probed on a copy of the cursor, so a dangling operator is simply left
//! unconsumed and the caller sees trailing tokens.
use crate::token::{ArithKind, ArithToken};
use linexpr::{GrammarFault, LineError, TokenCursor, TokenStream};

type Cursor<'a> = TokenCursor<'a, ArithToken>;

/// Returns `true` iff the whole token slice derives from `Expression`.
///
/// Invalid tokens never derive, so a stream holding one is rejected here as
/// well; use [`check`] to tell lexical failures apart.
pub fn recognize(tokens: &[ArithToken]) -> bool {
    let mut cursor = Cursor::new(tokens);
    expression(&mut cursor) && cursor.is_at_end()
}

/// Classifies a token stream.
///
/// # Errors
///
/// - [`LineError::Lexical`] if any token is invalid; recognition is not
///   attempted,
/// - [`LineError::Conversion`] for a numeric lexeme that is not an integer
///   (for example a bare run of minus signs),
/// - [`LineError::Grammar`] if the tokens do not form one expression.
pub fn check(tokens: &TokenStream<ArithKind>) -> Result<(), LineError> {
    tokens.check_lexemes()?;
    for tok in tokens.iter().filter(|t| t.is_number()) {
        tok.to_i64()?;
    }
    let mut cursor = Cursor::new(tokens.as_slice());
    if !expression(&mut cursor) {
        return Err(LineError::grammar(cursor.pos(), GrammarFault::Incomplete));
    }
    if !cursor.is_at_end() {
        return Err(LineError::grammar(
            cursor.pos(),
            GrammarFault::TrailingTokens,
        ));
    }
    Ok(())
}

fn expression(cursor: &mut Cursor) -> bool {
    if !term(cursor) {
        return false;
    }
    cursor.attempt(|c| {
        c.advance_if(|t| matches!(t.kind(), ArithKind::Plus | ArithKind::Minus))
            .is_some()
            && expression(c)
    });
    true
}

fn term(cursor: &mut Cursor) -> bool {
    if !number(cursor) {
        return false;
    }
    cursor.attempt(|c| c.advance_if(|t| t.kind() == ArithKind::Star).is_some() && term(c));
    true
}

fn number(cursor: &mut Cursor) -> bool {
    let ok = cursor.attempt(integer)
        || cursor.attempt(|c| {
            c.advance_if(|t| t.kind() == ArithKind::Minus).is_some() && integer(c)
        });
    log::trace!("Number at {}: {}", cursor.pos(), ok);
    ok
}

fn integer(cursor: &mut Cursor) -> bool {
    cursor
        .advance_if(|t| t.is_number() && t.to_i64().is_ok())
        .is_some()
}
