//! Variable declaration extraction.
//!
//! Given one statement's token chain, decide whether it declares variables
//! and emit a tag for each declarator found. The decision uses token shape
//! only: there is no type information and no symbol table.
//!
//! # Module structure
//!
//! - [`heuristics`]: constructor-argument and parameter-list shape checks
//! - [`variable`]: the declarator scanner and tag emission
//!
//! Everything the scanner needs from the enclosing parser is passed in an
//! [`ExtractionContext`] built per statement.

use std::path::Path;

use bitflags::bitflags;

use crate::config::IndexerOptions;
use crate::parser::{Keyword, LexError, TokenChain, TokenKind, tokenize};
use crate::scope::ScopeStack;
use crate::tags::TagSink;

pub mod heuristics;
mod variable;

pub use crate::parser::Language;
pub use variable::extract_variable_declarations;


bitflags! {
    /// Storage keywords seen on the current statement.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeywordState: u8 {
        const SEEN_EXTERN = 1 << 0;
        const SEEN_STATIC = 1 << 1;
    }
}

impl KeywordState {
    /// Collect the flags from the top-level keywords of a chain
    pub fn from_chain(chain: &TokenChain) -> Self {
        chain.iter().fold(KeywordState::empty(), |state, token| {
            match token.kind {
                TokenKind::Keyword(Keyword::Extern) => state | KeywordState::SEEN_EXTERN,
                TokenKind::Keyword(Keyword::Static) => state | KeywordState::SEEN_STATIC,
                _ => state,
            }
        })
    }
}

/// Facts about the file being indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileContext {
    pub language: Language,
    pub is_header: bool,
}

impl FileContext {
    pub fn new(language: Language, is_header: bool) -> Self {
        Self {
            language,
            is_header,
        }
    }

    /// Derive language and header-ness from a file name's extension
    pub fn for_path(path: &Path, options: &IndexerOptions) -> Self {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let language = if options.is_c_extension(extension) {
            Language::C
        } else {
            Language::Cpp
        };
        Self::new(language, options.is_header_extension(extension))
    }

    pub fn is_cpp(&self) -> bool {
        self.language.is_cpp()
    }
}

/// Everything one extraction call reads from or writes to the enclosing
/// parser. Built per statement; nothing here is global.
pub struct ExtractionContext<'a> {
    pub file: &'a FileContext,
    pub keywords: KeywordState,
    pub scopes: &'a mut ScopeStack,
    pub tags: &'a mut dyn TagSink,
}

impl<'a> ExtractionContext<'a> {
    pub fn new(
        file: &'a FileContext,
        keywords: KeywordState,
        scopes: &'a mut ScopeStack,
        tags: &'a mut dyn TagSink,
    ) -> Self {
        Self {
            file,
            keywords,
            scopes,
            tags,
        }
    }
}

/// Tokenize one statement and extract its variable declarations.
///
/// Storage keywords are read from the statement itself. Returns whether at
/// least one variable was found.
pub fn extract_statement(
    source: &str,
    file: &FileContext,
    scopes: &mut ScopeStack,
    tags: &mut dyn TagSink,
) -> Result<bool, LexError> {
    let mut chain = tokenize(source, file.language)?;
    let keywords = KeywordState::from_chain(&chain);
    let mut cx = ExtractionContext::new(file, keywords, scopes, tags);
    Ok(extract_variable_declarations(&mut chain, &mut cx))
}
