//! # Evaluator
//!
//! Single left-to-right pass over a sigil token stream.
//!
//! `@` adds, `^` multiplies, `!` negates. Precedence (negation, then
//! multiplication, then addition) falls out of the order operators meet
//! numbers: the [`Accumulator`] keeps the sum of finished terms, the term
//! being built, and the operator waiting for its right operand.
//!
//! ```text
//! 3 @ 4 ^ 2
//! 3        load            result=0  current=3
//!   @      pending=@
//!     4    fold @          result=3  current=4
//!       ^  pending=^
//!         2 fold ^         result=3  current=8
//! close                    3 + 8 = 11
//! ```
use crate::token::{SigilKind, SigilToken};
use linexpr::{GrammarFault, LineError, TokenStream};

/// An operator seen but not yet applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingOp {
    Add,
    Mul,
    Neg,
}

impl PendingOp {
    fn from_kind(kind: SigilKind) -> Option<Self> {
        match kind {
            SigilKind::At => Some(PendingOp::Add),
            SigilKind::Caret => Some(PendingOp::Mul),
            SigilKind::Bang => Some(PendingOp::Neg),
            SigilKind::Number | SigilKind::Invalid => None,
        }
    }
}

/// Evaluation state after some prefix of the token stream.
///
/// `pending` is `None` at the start and right after a number has consumed it;
/// it is `Some` only between an operator token and the next number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulator {
    /// Sum of the terms already committed.
    pub result: i64,
    /// Value of the term being built.
    pub current: i64,
    pub pending: Option<PendingOp>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one token into the state.
    ///
    /// A number applies the pending operator:
    /// - none: the number is loaded as the current term,
    /// - `Neg`: the current term becomes the negated number,
    /// - `Mul`: the number multiplies into the current term,
    /// - `Add`: the current term is committed and the number starts a new one.
    ///
    /// An operator only becomes the pending one.
    ///
    /// # Errors
    /// [`LineError::Conversion`] for a lexeme that is not an `i64`,
    /// [`LineError::Overflow`] when a fold leaves the `i64` range.
    pub fn step(self, token: &SigilToken) -> Result<Self, LineError> {
        if let Some(op) = PendingOp::from_kind(token.kind()) {
            return Ok(Self {
                pending: Some(op),
                ..self
            });
        }
        if token.kind() != SigilKind::Number {
            // Invalid tokens are rejected before evaluation.
            return Ok(self);
        }
        let n = token.to_i64()?;
        let (result, current) = match self.pending {
            None => (self.result, n),
            Some(PendingOp::Neg) => (self.result, n.checked_neg().ok_or(LineError::Overflow)?),
            Some(PendingOp::Mul) => (
                self.result,
                self.current.checked_mul(n).ok_or(LineError::Overflow)?,
            ),
            Some(PendingOp::Add) => (
                self.result
                    .checked_add(self.current)
                    .ok_or(LineError::Overflow)?,
                n,
            ),
        };
        log::trace!(
            "Fold {:?} {}: result={}, current={}",
            self.pending,
            n,
            result,
            current
        );
        Ok(Self {
            result,
            current,
            pending: None,
        })
    }

    /// Closes the pass and returns the value.
    ///
    /// A dangling `@` folds the current term into `result` once more, a
    /// dangling `!` negates the current term, a dangling `^` leaves the state
    /// as is. The value is then `result + current`.
    pub fn close(self) -> Result<i64, LineError> {
        let (result, current) = match self.pending {
            Some(PendingOp::Add) => (
                self.result
                    .checked_add(self.current)
                    .ok_or(LineError::Overflow)?,
                self.current,
            ),
            Some(PendingOp::Neg) => (
                self.result,
                self.current.checked_neg().ok_or(LineError::Overflow)?,
            ),
            Some(PendingOp::Mul) | None => (self.result, self.current),
        };
        result.checked_add(current).ok_or(LineError::Overflow)
    }
}

/// Rejects a stream in which two operator tokens are adjacent.
///
/// # Errors
/// [`LineError::Grammar`] with [`GrammarFault::AdjacentOperators`] at the
/// index of the second operator.
pub fn validate(tokens: &[SigilToken]) -> Result<(), LineError> {
    match tokens
        .windows(2)
        .position(|w| w[0].is_operator() && w[1].is_operator())
    {
        Some(i) => Err(LineError::grammar(i + 1, GrammarFault::AdjacentOperators)),
        None => Ok(()),
    }
}

/// Evaluates an already validated token slice.
pub fn evaluate(tokens: &[SigilToken]) -> Result<i64, LineError> {
    tokens
        .iter()
        .try_fold(Accumulator::new(), |acc, tok| acc.step(tok))?
        .close()
}

/// Full per-line pipeline: lexical check, adjacency check, evaluation.
pub fn check_and_evaluate(tokens: &TokenStream<SigilKind>) -> Result<i64, LineError> {
    tokens.check_lexemes()?;
    validate(tokens.as_slice())?;
    evaluate(tokens.as_slice())
}
