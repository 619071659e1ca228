//! Tag records and the emission interface.
//!
//! Emission is two-phase: [`TagSink::begin`] creates a record (or refuses
//! under the sink's policy), the caller fills in the extension fields, and
//! [`TagSink::commit`] stores it.

use bitflags::bitflags;
use smol_str::SmolStr;

use crate::base::Position;
use crate::config::IndexerOptions;
use crate::parser::Token;
use crate::scope::{ScopeKind, ScopeStack};

/// Kind of an emitted variable tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TagKind {
    /// Variable at namespace or global level
    Variable,
    /// Declaration seen with `extern`
    ExternVariable,
    /// Data member of a class, struct or union
    Member,
    /// Variable local to a function
    Local,
}

impl TagKind {
    /// Single-letter kind code used in tag files
    pub fn letter(&self) -> char {
        match self {
            TagKind::Variable => 'v',
            TagKind::ExternVariable => 'x',
            TagKind::Member => 'm',
            TagKind::Local => 'l',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TagKind::Variable => "variable",
            TagKind::ExternVariable => "externvar",
            TagKind::Member => "member",
            TagKind::Local => "local",
        }
    }

    fn flag(self) -> TagKinds {
        match self {
            TagKind::Variable => TagKinds::VARIABLE,
            TagKind::ExternVariable => TagKinds::EXTERN_VARIABLE,
            TagKind::Member => TagKinds::MEMBER,
            TagKind::Local => TagKinds::LOCAL,
        }
    }
}

bitflags! {
    /// Set of tag kinds a sink accepts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TagKinds: u8 {
        const VARIABLE = 1 << 0;
        const EXTERN_VARIABLE = 1 << 1;
        const MEMBER = 1 << 2;
        const LOCAL = 1 << 3;
    }
}

impl Default for TagKinds {
    /// Locals and extern declarations are off unless asked for.
    fn default() -> Self {
        TagKinds::VARIABLE | TagKinds::MEMBER
    }
}

impl TagKinds {
    pub fn accepts(&self, kind: TagKind) -> bool {
        self.contains(kind.flag())
    }
}

/// `(keyword, name)` pair for `struct X y;`-style declarations
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeRef {
    pub keyword: SmolStr,
    pub name: SmolStr,
}

/// An emitted symbol
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TagRecord {
    pub name: SmolStr,
    pub kind: TagKind,
    /// Position of the declarator name
    pub position: Position,
    /// Enclosing scope qualified with `::`
    pub scope: Option<String>,
    pub scope_kind: Option<ScopeKind>,
    pub type_ref: Option<TypeRef>,
    /// Not visible outside the file it is declared in
    pub file_scope: bool,
}

impl TagRecord {
    pub fn new(name: impl Into<SmolStr>, kind: TagKind, anchor: &Token, scopes: &ScopeStack) -> Self {
        Self {
            name: name.into(),
            kind,
            position: anchor.position,
            scope: scopes.qualified_name(),
            scope_kind: scopes.top().map(|f| f.kind),
            type_ref: None,
            file_scope: false,
        }
    }
}

/// Receiver of emitted tags
pub trait TagSink {
    /// Start a tag. Returning `None` refuses it; nothing is committed then.
    fn begin(
        &mut self,
        name: &str,
        kind: TagKind,
        anchor: &Token,
        scopes: &ScopeStack,
    ) -> Option<TagRecord>;

    fn commit(&mut self, tag: TagRecord);
}

/// Sink collecting committed tags in emission order
#[derive(Debug, Clone, Default)]
pub struct TagCollector {
    kinds: TagKinds,
    tags: Vec<TagRecord>,
}

impl TagCollector {
    pub fn new(kinds: TagKinds) -> Self {
        Self {
            kinds,
            tags: Vec::new(),
        }
    }

    pub fn from_options(options: &IndexerOptions) -> Self {
        Self::new(options.kinds)
    }

    pub fn tags(&self) -> &[TagRecord] {
        &self.tags
    }

    pub fn into_tags(self) -> Vec<TagRecord> {
        self.tags
    }
}

impl TagSink for TagCollector {
    fn begin(
        &mut self,
        name: &str,
        kind: TagKind,
        anchor: &Token,
        scopes: &ScopeStack,
    ) -> Option<TagRecord> {
        if !self.kinds.accepts(kind) {
            tracing::trace!("[TAGS] kind '{}' disabled, refusing '{}'", kind.name(), name);
            return None;
        }
        Some(TagRecord::new(name, kind, anchor, scopes))
    }

    fn commit(&mut self, tag: TagRecord) {
        self.tags.push(tag);
    }
}
