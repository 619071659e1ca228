//! Lexer error handling module
//!
//! Lexing a statement span is the only fallible step of the crate; the
//! extractor itself never reports errors.

mod error;

pub use error::LexError;
