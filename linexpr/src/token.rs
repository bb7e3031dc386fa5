//! Tokens, token streams, and the operator-table trait that fixes a grammar's
//! alphabet.

use crate::{LineError, Span};
use smartstring::alias::String;
use std::fmt::{self, Debug};
use std::slice;

/// The closed set of token kinds for one grammar variant.
///
/// An implementation is the grammar's *operator table*: it names the kind
/// used for numbers, the kind used for rejected characters, and the
/// single-character operator symbols. The [`Tokenizer`](crate::Tokenizer)
/// is generic over this trait, so every grammar variant is an instance of one
/// tokenizer.
///
/// # Example
///
/// ```rust
/// # use linexpr::TokenKind;
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Kind { Number, Plus, Invalid }
///
/// impl TokenKind for Kind {
///     const NUMBER: Self = Kind::Number;
///     const INVALID: Self = Kind::Invalid;
///     const OPERATORS: &'static [(char, Self)] = &[('+', Kind::Plus)];
/// }
///
/// assert_eq!(Kind::from_symbol('+'), Some(Kind::Plus));
/// assert!(Kind::Plus.is_operator());
/// assert!(!Kind::Number.is_operator());
/// ```
pub trait TokenKind: Copy + Debug + Eq + 'static {
    /// Kind given to numeric lexemes.
    const NUMBER: Self;

    /// Kind given to a character outside the alphabet.
    const INVALID: Self;

    /// Operator symbols and their kinds.
    const OPERATORS: &'static [(char, Self)];

    /// Character that may open a signed numeric lexeme when an operand is
    /// expected. `None` disables signed literals.
    const SIGN: Option<char> = None;

    /// Stop scanning a line at its first invalid character.
    const FAIL_FAST: bool = false;

    /// Looks up the operator kind for `c`.
    fn from_symbol(c: char) -> Option<Self> {
        Self::OPERATORS
            .iter()
            .find(|(sym, _)| *sym == c)
            .map(|(_, kind)| *kind)
    }

    /// Is this one of the table's operator kinds?
    fn is_operator(self) -> bool {
        self != Self::NUMBER && self != Self::INVALID
    }
}

/// A classified, immutable unit of input.
///
/// A token pairs its kind with the exact lexeme it was built from and the
/// columns it covers. There are no setters: once the tokenizer yields a token
/// it is only ever read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<K> {
    kind: K,
    text: String,
    span: Span,
}

impl<K: TokenKind> Token<K> {
    /// Creates a token.
    pub fn new(kind: K, text: &str, span: Span) -> Self {
        Self {
            kind,
            text: String::from(text),
            span,
        }
    }

    /// The token's kind.
    #[inline]
    pub fn kind(&self) -> K {
        self.kind
    }

    /// The exact lexeme.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Columns covered in the source line.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        self.kind == K::NUMBER
    }

    #[inline]
    pub fn is_operator(&self) -> bool {
        self.kind.is_operator()
    }

    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.kind == K::INVALID
    }

    /// Converts the lexeme to an integer.
    ///
    /// The tokenizer never checks numeric validity, so a lexeme like `--` is
    /// a `Number` token that fails here.
    ///
    /// # Errors
    /// Returns [`LineError::Conversion`] when the lexeme is not an `i64`.
    pub fn to_i64(&self) -> Result<i64, LineError> {
        self.text
            .parse::<i64>()
            .map_err(|source| LineError::Conversion {
                lexeme: self.text.clone(),
                source,
            })
    }
}

/// The tokens produced for exactly one input line, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream<K> {
    tokens: Vec<Token<K>>,
}

impl<K: TokenKind> TokenStream<K> {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Token<K>> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token<K>] {
        &self.tokens
    }

    /// The first token of kind `INVALID`, if any.
    pub fn first_invalid(&self) -> Option<&Token<K>> {
        self.tokens.iter().find(|t| t.is_invalid())
    }

    /// Fails with [`LineError::Lexical`] if the stream holds an invalid token.
    pub fn check_lexemes(&self) -> Result<(), LineError> {
        match self.first_invalid() {
            Some(tok) => Err(LineError::Lexical {
                lexeme: String::from(tok.text()),
                span: tok.span(),
            }),
            None => Ok(()),
        }
    }

    /// The lexemes, in order.
    pub fn lexemes(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(Token::text)
    }
}

impl<K> From<Vec<Token<K>>> for TokenStream<K> {
    fn from(tokens: Vec<Token<K>>) -> Self {
        Self { tokens }
    }
}

impl<'a, K> IntoIterator for &'a TokenStream<K> {
    type Item = &'a Token<K>;
    type IntoIter = slice::Iter<'a, Token<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Space-separated lexemes.
impl<K: TokenKind> fmt::Display for TokenStream<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tok) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(tok.text())?;
        }
        Ok(())
    }
}
