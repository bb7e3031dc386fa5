//! # Calculator Tokens
//!
//! The two operator tables used by the calculator, one per grammar:
//!
//! - [`ArithKind`]: `+`, `-`, `*` for the recognizer. `-` doubles as the sign
//!   of a negative literal, and unknown characters are flagged without
//!   stopping the scan.
//! - [`SigilKind`]: `@`, `^`, `!` for the evaluator. There is no sign
//!   character, and the scan stops at the first unknown character.
//!
//! Both plug into [`linexpr::Tokenizer`].
use linexpr::{Token, TokenKind, TokenStream, Tokenizer};
use std::fmt;

/// Token kinds of the arithmetic grammar.
///
/// ```text
/// Expression := Term (('+' | '-') Expression)?
/// Term       := Number ('*' Term)?
/// Number     := INTEGER | '-' INTEGER
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithKind {
    Number,
    Plus,
    Minus,
    Star,
    Invalid,
}

impl TokenKind for ArithKind {
    const NUMBER: Self = ArithKind::Number;
    const INVALID: Self = ArithKind::Invalid;
    const OPERATORS: &'static [(char, Self)] = &[
        ('+', ArithKind::Plus),
        ('-', ArithKind::Minus),
        ('*', ArithKind::Star),
    ];
    const SIGN: Option<char> = Some('-');
}

/// Token kinds of the sigil grammar.
///
/// - `@` adds,
/// - `^` multiplies and binds to the number right after it,
/// - `!` negates the number right after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigilKind {
    Number,
    At,
    Caret,
    Bang,
    Invalid,
}

impl TokenKind for SigilKind {
    const NUMBER: Self = SigilKind::Number;
    const INVALID: Self = SigilKind::Invalid;
    const OPERATORS: &'static [(char, Self)] = &[
        ('@', SigilKind::At),
        ('^', SigilKind::Caret),
        ('!', SigilKind::Bang),
    ];
    const FAIL_FAST: bool = true;
}

macro_rules! kind_display {
    ($kind:ty) => {
        impl fmt::Display for $kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    };
}

kind_display!(ArithKind);
kind_display!(SigilKind);

pub type ArithToken = Token<ArithKind>;
pub type SigilToken = Token<SigilKind>;

/// Tokenizes a line with the arithmetic table.
pub fn arith_tokens(line: &str) -> TokenStream<ArithKind> {
    Tokenizer::<ArithKind>::tokenize(line)
}

/// Tokenizes a line with the sigil table.
pub fn sigil_tokens(line: &str) -> TokenStream<SigilKind> {
    Tokenizer::<SigilKind>::tokenize(line)
}
