//! # linexpr-calc
//!
//! Line-by-line judging of two small integer expression grammars, built on
//! the **linexpr** tokenizer and cursor.
//!
//! ## Overview
//!
//! - [`token`]: the two operator tables, [`ArithKind`] and [`SigilKind`].
//! - [`recognizer`]: recursive-descent membership test for the arithmetic
//!   grammar (`+ - *`, signed literals).
//! - [`evaluator`]: single-pass evaluator for the sigil grammar
//!   (`@` add, `^` multiply, `!` negate).
//! - [`report`]: per-line [`Verdict`]s and their printed form.
//! - [`run`] / [`dump_tokens`]: drive a whole input stream.
//!
//! ## Example
//!
//! ```rust
//! use linexpr_calc::{Grammar, run};
//!
//! let input = "1+2*3\n1++2\n1+x\n";
//! let mut out = Vec::new();
//! let stats = run(Grammar::Arith, input.as_bytes(), "standard input", &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "1+2*3 is an expression\n1++2 is not an expression\n1+x contains tokens which are not valid\n"
//! );
//! assert_eq!(stats.lines, 3);
//! assert_eq!(stats.accepted, 1);
//! ```
pub mod error;
pub mod evaluator;
pub mod recognizer;
pub mod report;
pub mod token;

pub use error::CalcError;
pub use evaluator::{Accumulator, PendingOp};
pub use report::{Grammar, Report, Verdict, judge};
pub use token::{ArithKind, ArithToken, SigilKind, SigilToken};

use linexpr::{ErrorClass, LexerStats, Token, TokenKind, TokenStream, Tokenizer};
use std::io::{BufRead, Write};

/// Counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub lines: usize,
    pub accepted: usize,
    pub lexical: usize,
    pub grammar: usize,
    pub conversion: usize,
}

impl RunStats {
    fn record(&mut self, verdict: &Verdict) {
        self.lines += 1;
        match verdict {
            Verdict::Expression | Verdict::Value(_) => self.accepted += 1,
            Verdict::Rejected(err) => match err.class() {
                ErrorClass::Lexical => self.lexical += 1,
                ErrorClass::Grammar => self.grammar += 1,
                ErrorClass::Conversion => self.conversion += 1,
            },
        }
    }
}

/// Judges every line of `reader` and writes one report per line.
///
/// Lines are handled strictly one after another; a bad line is reported and
/// the next one is read. `input` names the source in read errors.
///
/// # Errors
/// [`CalcError::Read`] when the stream fails; the reports for earlier lines
/// have already been written. [`CalcError::Write`] when `writer` fails.
pub fn run<R, W>(
    grammar: Grammar,
    reader: R,
    input: &str,
    mut writer: W,
) -> Result<RunStats, CalcError>
where
    R: BufRead,
    W: Write,
{
    let mut stats = RunStats::default();
    for line in reader.lines() {
        let line = line.map_err(|source| CalcError::Read {
            input: input.to_owned(),
            source,
        })?;
        let report = Report::new(grammar, &line);
        stats.record(&report.verdict);
        writeln!(writer, "{report}")?;
    }
    writer.flush()?;
    Ok(stats)
}

/// Writes the token stream of every line, one token per row, followed by a
/// blank row.
///
/// # Errors
/// Same as [`run`].
pub fn dump_tokens<R, W>(
    grammar: Grammar,
    reader: R,
    input: &str,
    mut writer: W,
) -> Result<LexerStats, CalcError>
where
    R: BufRead,
    W: Write,
{
    let mut total = LexerStats::default();
    for line in reader.lines() {
        let line = line.map_err(|source| CalcError::Read {
            input: input.to_owned(),
            source,
        })?;
        let stats = match grammar {
            Grammar::Arith => {
                write_tokens(&mut writer, Tokenizer::<ArithKind>::tokenize_with_stats(&line))?
            }
            Grammar::Sigil => {
                write_tokens(&mut writer, Tokenizer::<SigilKind>::tokenize_with_stats(&line))?
            }
        };
        total.chars += stats.chars;
        total.tokens += stats.tokens;
        total.invalid += stats.invalid;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(total)
}

fn write_tokens<K, W>(
    writer: &mut W,
    (tokens, stats): (TokenStream<K>, LexerStats),
) -> Result<LexerStats, CalcError>
where
    K: TokenKind + std::fmt::Display,
    W: Write,
{
    for tok in tokens.iter() {
        writeln!(writer, "{}", format_token(tok))?;
    }
    Ok(stats)
}

fn format_token<K: TokenKind + std::fmt::Display>(tok: &Token<K>) -> String {
    format!("{} {} {}", tok.kind(), tok.text(), tok.span())
}
