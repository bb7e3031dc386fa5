//! # Line Reports
//!
//! Turns one input line into a [`Verdict`] under a chosen [`Grammar`], and
//! renders the verdict as the line of output the user sees.
//!
//! ## Example
//! ```rust
//! # use linexpr_calc::{Grammar, Report};
//! let r = Report::new(Grammar::Sigil, "3@4^2");
//! assert_eq!(r.to_string(), "11");
//!
//! let r = Report::new(Grammar::Arith, "1++2");
//! assert_eq!(r.to_string(), "1++2 is not an expression");
//! ```
use crate::evaluator;
use crate::recognizer;
use crate::token::{arith_tokens, sigil_tokens};
use linexpr::{ErrorClass, LineError};
use std::fmt;

/// Which grammar a line is judged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Grammar {
    /// `+ - *` with signed literals; answers "is it an expression?".
    Arith,
    /// `@ ^ !`; computes the value.
    Sigil,
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grammar::Arith => f.write_str("arith"),
            Grammar::Sigil => f.write_str("sigil"),
        }
    }
}

/// Outcome for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The recognizer accepted the line.
    Expression,
    /// The evaluator computed a value.
    Value(i64),
    Rejected(LineError),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Verdict::Rejected(_))
    }
}

/// Tokenizes and judges `line`.
pub fn judge(grammar: Grammar, line: &str) -> Verdict {
    let verdict = match grammar {
        Grammar::Arith => match recognizer::check(&arith_tokens(line)) {
            Ok(()) => Verdict::Expression,
            Err(err) => Verdict::Rejected(err),
        },
        Grammar::Sigil => match evaluator::check_and_evaluate(&sigil_tokens(line)) {
            Ok(value) => Verdict::Value(value),
            Err(err) => Verdict::Rejected(err),
        },
    };
    log::debug!("{} {:?}: {:?}", grammar, line, verdict);
    verdict
}

/// A judged line, ready to print.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub grammar: Grammar,
    pub line: &'a str,
    pub verdict: Verdict,
}

impl<'a> Report<'a> {
    pub fn new(grammar: Grammar, line: &'a str) -> Self {
        Self {
            grammar,
            line,
            verdict: judge(grammar, line),
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line;
        match (self.grammar, &self.verdict) {
            (_, Verdict::Value(value)) => write!(f, "{value}"),
            (_, Verdict::Expression) => write!(f, "{line} is an expression"),
            (Grammar::Arith, Verdict::Rejected(err)) => match err.class() {
                ErrorClass::Lexical => write!(f, "{line} contains tokens which are not valid"),
                ErrorClass::Grammar | ErrorClass::Conversion => {
                    write!(f, "{line} is not an expression")
                }
            },
            (Grammar::Sigil, Verdict::Rejected(err)) => match err.class() {
                ErrorClass::Lexical => write!(
                    f,
                    "\"{line}\" contains invalid lexemes and thus is not an expression."
                ),
                ErrorClass::Grammar | ErrorClass::Conversion => {
                    write!(f, "\"{line}\" is not an expression")
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(grammar: Grammar, line: &str) -> String {
        Report::new(grammar, line).to_string()
    }

    #[test]
    fn arith_reports() {
        assert_eq!(render(Grammar::Arith, "1+2*3"), "1+2*3 is an expression");
        assert_eq!(render(Grammar::Arith, "1++2"), "1++2 is not an expression");
        assert_eq!(render(Grammar::Arith, "--"), "-- is not an expression");
        assert_eq!(render(Grammar::Arith, "1-2"), "1-2 is an expression");
        assert_eq!(render(Grammar::Arith, "1 -2"), "1 -2 is not an expression");
        assert_eq!(
            render(Grammar::Arith, "1+x"),
            "1+x contains tokens which are not valid"
        );
    }

    #[test]
    fn sigil_reports() {
        assert_eq!(render(Grammar::Sigil, "3@4^2"), "11");
        assert_eq!(render(Grammar::Sigil, "5!!3"), "\"5!!3\" is not an expression");
        assert_eq!(render(Grammar::Sigil, "3@"), "6");
        assert_eq!(
            render(Grammar::Sigil, "3+4"),
            "\"3+4\" contains invalid lexemes and thus is not an expression."
        );
        assert_eq!(
            render(Grammar::Sigil, "9223372036854775807^9"),
            "\"9223372036854775807^9\" is not an expression"
        );
    }

    #[test]
    fn lines_are_reported_untrimmed() {
        assert_eq!(render(Grammar::Arith, " 1 + 2 "), " 1 + 2  is an expression");
    }

    #[test]
    fn verdict_acceptance() {
        assert!(judge(Grammar::Arith, "7").is_accepted());
        assert!(judge(Grammar::Sigil, "7").is_accepted());
        assert!(!judge(Grammar::Sigil, "7 x").is_accepted());
    }
}
