//! Lexer error types

use text_size::{TextRange, TextSize};
use thiserror::Error;

/// Failure to turn statement text into a token chain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A string or character literal runs past the end of its line
    #[error("unterminated {what} literal at offset {}", u32::from(.range.start()))]
    UnterminatedLiteral {
        what: &'static str,
        range: TextRange,
    },
    /// Input no C/C++ token starts with (`@`, `#`, backtick, ...)
    #[error("unexpected input {text:?} at offset {}", u32::from(.range.start()))]
    UnexpectedInput { text: String, range: TextRange },
}

impl LexError {
    pub(crate) fn unexpected(text: &str, offset: TextSize) -> Self {
        let range = TextRange::at(offset, TextSize::of(text));
        if text.starts_with('"') {
            LexError::UnterminatedLiteral {
                what: "string",
                range,
            }
        } else if text.starts_with('\'') {
            LexError::UnterminatedLiteral {
                what: "character",
                range,
            }
        } else {
            LexError::UnexpectedInput {
                text: text.to_string(),
                range,
            }
        }
    }

    /// Source range of the offending input
    pub fn range(&self) -> TextRange {
        match self {
            LexError::UnterminatedLiteral { range, .. } | LexError::UnexpectedInput { range, .. } => {
                *range
            }
        }
    }
}
