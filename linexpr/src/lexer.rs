use crate::{Span, Token, TokenKind, TokenStream};
use smartstring::alias::String;
use std::mem;
use std::ops::ControlFlow;

/// Scanner state.
///
/// The mode decides what a sign character means: while the lexeme buffer is
/// empty (`AwaitingOperand`) or holds only signs (`Signed`) it opens or
/// extends a numeric lexeme; once a digit is buffered it is the binary
/// operator from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexMode {
    /// The lexeme buffer is empty.
    #[default]
    AwaitingOperand,
    /// The buffer holds sign characters and no digit yet.
    Signed,
    /// The buffer holds at least one digit.
    InNumber,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerStats {
    pub chars: usize,
    pub tokens: usize,
    pub invalid: usize,
}

/// A table-driven, single-line tokenizer.
///
/// Characters are pushed one at a time. Digits (and, where the table allows
/// it, a leading sign) accumulate in a lexeme buffer; whitespace and operator
/// symbols flush the buffer into a `Number` token. Any other character becomes
/// an `INVALID` token, and if the table is `FAIL_FAST` the scan stops there.
///
/// # Example
/// ```rust
/// # use linexpr::{TokenKind, Tokenizer};
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Kind { Number, Plus, Minus, Invalid }
///
/// impl TokenKind for Kind {
///     const NUMBER: Self = Kind::Number;
///     const INVALID: Self = Kind::Invalid;
///     const OPERATORS: &'static [(char, Self)] = &[('+', Kind::Plus), ('-', Kind::Minus)];
///     const SIGN: Option<char> = Some('-');
/// }
///
/// let toks = Tokenizer::<Kind>::tokenize("-1-2 -3");
/// assert_eq!(toks.lexemes().collect::<Vec<_>>(), ["-1", "-", "2", "-3"]);
/// ```
#[derive(Debug)]
pub struct Tokenizer<K> {
    mode: LexMode,
    buffer: String,
    start: usize,
    column: usize,
    tokens: Vec<Token<K>>,
    end_flag: bool,
    stats: LexerStats,
}

impl<K: TokenKind> Default for Tokenizer<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TokenKind> Tokenizer<K> {
    pub fn new() -> Self {
        Self {
            mode: LexMode::default(),
            buffer: String::new(),
            start: 0,
            column: 0,
            tokens: Vec::new(),
            end_flag: false,
            stats: LexerStats::default(),
        }
    }

    /// Tokenizes a whole line.
    pub fn tokenize(line: &str) -> TokenStream<K> {
        Self::tokenize_with_stats(line).0
    }

    /// Tokenizes a whole line and also returns the scan statistics.
    pub fn tokenize_with_stats(line: &str) -> (TokenStream<K>, LexerStats) {
        let mut lexer = Self::new();
        for c in line.chars() {
            if lexer.push(c).is_break() {
                break;
            }
        }
        lexer.finish()
    }

    pub fn mode(&self) -> LexMode {
        self.mode
    }

    pub fn stats(&self) -> LexerStats {
        self.stats.clone()
    }

    /// Feeds one character.
    ///
    /// Returns [`ControlFlow::Break`] once a fail-fast table has seen an
    /// invalid character; every later push is ignored.
    pub fn push(&mut self, c: char) -> ControlFlow<()> {
        if self.end_flag {
            return ControlFlow::Break(());
        }
        let column = self.column;
        self.column += 1;
        self.stats.chars += 1;
        log::trace!(
            "CHAR: col={}, c={:?}, mode={:?}, buffer={:?}",
            column,
            c,
            self.mode,
            self.buffer
        );

        if c.is_ascii_digit() {
            self.accum(c, column);
            self.mode = LexMode::InNumber;
        } else if c.is_whitespace() {
            self.flush();
        } else if K::SIGN == Some(c)
            && matches!(self.mode, LexMode::AwaitingOperand | LexMode::Signed)
        {
            self.accum(c, column);
            self.mode = LexMode::Signed;
        } else if let Some(kind) = K::from_symbol(c) {
            self.flush();
            self.yield_token(Token::new(
                kind,
                c.encode_utf8(&mut [0; 4]),
                Span::new(column, column + 1),
            ));
        } else {
            self.flush();
            self.stats.invalid += 1;
            self.yield_token(Token::new(
                K::INVALID,
                c.encode_utf8(&mut [0; 4]),
                Span::new(column, column + 1),
            ));
            if K::FAIL_FAST {
                log::trace!("STOP: invalid {:?} at col={}", c, column);
                self.end_flag = true;
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    /// Flushes the pending lexeme and returns the finished stream.
    pub fn finish(mut self) -> (TokenStream<K>, LexerStats) {
        self.flush();
        log::trace!("END: {:?}", self.stats);
        (TokenStream::from(self.tokens), self.stats)
    }

    fn accum(&mut self, c: char, column: usize) {
        if self.buffer.is_empty() {
            self.start = column;
        }
        self.buffer.push(c);
    }

    /// Emits a non-empty buffer as a `Number` token and empties it.
    fn flush(&mut self) {
        self.mode = LexMode::AwaitingOperand;
        if self.buffer.is_empty() {
            return;
        }
        let text = mem::take(&mut self.buffer);
        let span = Span::new(self.start, self.start + text.chars().count());
        self.yield_token(Token::new(K::NUMBER, &text, span));
    }

    fn yield_token(&mut self, token: Token<K>) {
        log::trace!("TOKEN: {:?}", token);
        self.stats.tokens += 1;
        self.tokens.push(token);
    }
}
