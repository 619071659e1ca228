//! Statement tokenizer for C and C++
//!
//! This module turns one statement-like span of source text into a
//! [`TokenChain`]:
//! - **logos** for fast lexing
//! - bracket folding so balanced `()` and `[]` regions (and `{}` regions
//!   nested inside them) become single composite tokens owning their
//!   nested chain
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Lexemes with RawToken
//!     ↓
//! Fold → TokenChain (arena + live id list, groups own nested ids)
//!     ↓
//! Extractor → TagRecords
//! ```

mod chain;
mod errors;
mod fold;
pub mod keywords;
mod lexer;
mod token;

pub use chain::TokenChain;
pub use errors::LexError;
pub use fold::tokenize;
pub use keywords::{Keyword, Language};
pub use lexer::{Lexeme, RawToken, lex};
pub use token::{GroupKind, Token, TokenId, TokenKind};
