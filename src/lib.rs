//! # cxxtags-core
//!
//! Heuristic extraction of C/C++ variable declarations from lexed statements.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! extract   → Variable extractor, heuristics, per-statement contexts
//!   ↓
//! tags      → Tag records, emission sink, kind filter
//! scope     → Scope frames and the scope stack
//!   ↓
//! parser    → Logos lexer, bracket folding, token chain, keywords
//!   ↓
//! base      → Primitives (TextRange, Position, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → scope/tags → extract)
// ============================================================================

/// Foundation types: TextRange, Position, LineIndex
pub mod base;

/// Indexer options
pub mod config;

/// Parser: logos lexer, bracket folding, token chain
pub mod parser;

/// Scope stack used while qualifying declarator names
pub mod scope;

/// Tag records and the emission interface
pub mod tags;

/// Variable declaration extraction
pub mod extract;

// Re-export commonly needed items
pub use base::{LineIndex, Position, TextRange, TextSize};
pub use config::IndexerOptions;
pub use extract::{
    ExtractionContext, FileContext, KeywordState, Language, extract_statement,
    extract_variable_declarations,
};
pub use parser::{Keyword, LexError, TokenChain, TokenId, TokenKind, tokenize};
pub use scope::{ScopeAccess, ScopeFrame, ScopeKind, ScopeStack};
pub use tags::{TagCollector, TagKind, TagKinds, TagRecord, TagSink, TypeRef};
