//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! Runtime pieces for small line-oriented expression grammars.
//!
//! `linexpr` provides the grammar-independent half of a line evaluator:
//!  * [`TokenKind`]: the operator table a grammar variant implements,
//!  * [`Tokenizer`]: a table-driven scanner producing a [`TokenStream`],
//!  * [`TokenCursor`]: the read position recursive-descent rules advance,
//!  * [`LineError`]: the per-line error taxonomy.
//!
//! Concrete grammars (a recognizer and an evaluator) live in `linexpr-calc`.

mod cursor;
mod error;
mod lexer;
mod token;

pub use crate::cursor::{Span, TokenCursor};
pub use crate::error::{ErrorClass, GrammarFault, LineError};
pub use crate::lexer::{LexMode, LexerStats, Tokenizer};
pub use crate::token::{Token, TokenKind, TokenStream};
