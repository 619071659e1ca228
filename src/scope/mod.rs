//! Scope stack: the chain of enclosing namespaces, classes and functions.
//!
//! The enclosing parser pushes real scopes as it enters them; the variable
//! extractor pushes transient frames for the qualifiers of a declarator name
//! (`int Outer::Inner::value;`) and pops them once the tag is emitted.

use smol_str::SmolStr;

use crate::parser::TokenId;
use crate::tags::TagKind;

/// Kind of an enclosing scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ScopeKind {
    /// Namespace level, including the global scope
    Namespace,
    Class,
    Struct,
    Union,
    Enum,
    Function,
}

impl ScopeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeKind::Namespace => "namespace",
            ScopeKind::Class => "class",
            ScopeKind::Struct => "struct",
            ScopeKind::Union => "union",
            ScopeKind::Enum => "enum",
            ScopeKind::Function => "function",
        }
    }
}

/// Member access of a scope, when known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScopeAccess {
    #[default]
    Unknown,
    Public,
    Protected,
    Private,
}

/// One entry of the scope stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeFrame {
    pub name: SmolStr,
    pub kind: ScopeKind,
    pub access: ScopeAccess,
    /// Token the frame was created from, when it came from a chain
    pub anchor: Option<TokenId>,
}

impl ScopeFrame {
    pub fn new(name: impl Into<SmolStr>, kind: ScopeKind, access: ScopeAccess) -> Self {
        Self {
            name: name.into(),
            kind,
            access,
            anchor: None,
        }
    }

    pub fn with_anchor(mut self, anchor: TokenId) -> Self {
        self.anchor = Some(anchor);
        self
    }
}

/// Stack of enclosing scopes, innermost last
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    frames: Vec<ScopeFrame>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: ScopeFrame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<ScopeFrame> {
        self.frames.pop()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[ScopeFrame] {
        &self.frames
    }

    pub fn top(&self) -> Option<&ScopeFrame> {
        self.frames.last()
    }

    /// Kind of the innermost scope; the global scope counts as a namespace
    pub fn current_kind(&self) -> ScopeKind {
        self.top().map_or(ScopeKind::Namespace, |f| f.kind)
    }

    /// Tag kind a plain variable declared here gets
    pub fn variable_kind(&self) -> TagKind {
        match self.current_kind() {
            ScopeKind::Class | ScopeKind::Struct | ScopeKind::Union => TagKind::Member,
            ScopeKind::Function => TagKind::Local,
            ScopeKind::Namespace | ScopeKind::Enum => TagKind::Variable,
        }
    }

    /// Frame names joined with `::`, or `None` at global scope
    pub fn qualified_name(&self) -> Option<String> {
        if self.frames.is_empty() {
            return None;
        }
        Some(
            self.frames
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join("::"),
        )
    }
}
