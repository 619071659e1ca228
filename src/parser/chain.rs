//! Token chain: an arena of tokens plus the ordered list of live ids.
//!
//! Group tokens own the ids of their nested chain; those ids index the same
//! arena. Detaching a token only removes its id from the live list, so ids
//! handed out earlier stay valid for the lifetime of the chain.

use super::token::{GroupKind, Token, TokenId, TokenKind};

/// One statement-like span of tokens
#[derive(Debug, Clone, Default)]
pub struct TokenChain {
    tokens: Vec<Token>,
    root: Vec<TokenId>,
}

impl TokenChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a token in the arena without linking it into the chain.
    ///
    /// Used for the contents of a group before [`push_group`](Self::push_group).
    pub fn alloc(&mut self, token: Token) -> TokenId {
        let id = TokenId(self.tokens.len() as u32);
        self.tokens.push(token);
        id
    }

    /// Store a token and append it to the chain
    pub fn push(&mut self, token: Token) -> TokenId {
        let id = self.alloc(token);
        self.root.push(id);
        id
    }

    /// Store a group token owning `children` and append it to the chain.
    ///
    /// `children` are ids already allocated in this arena and not linked
    /// anywhere else; the first and last are expected to be the delimiters.
    pub fn push_group(&mut self, mut token: Token, children: Vec<TokenId>) -> TokenId {
        token.children = children;
        self.push(token)
    }

    pub(crate) fn set_root(&mut self, root: Vec<TokenId>) {
        self.root = root;
    }

    pub(crate) fn set_children(&mut self, id: TokenId, children: Vec<TokenId>) {
        self.tokens[id.index()].children = children;
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id.index()]
    }

    pub fn kind(&self, id: TokenId) -> TokenKind {
        self.tokens[id.index()].kind
    }

    /// Id of the live token at `pos`
    pub fn id_at(&self, pos: usize) -> Option<TokenId> {
        self.root.get(pos).copied()
    }

    pub fn get(&self, pos: usize) -> Option<&Token> {
        self.id_at(pos).map(|id| self.token(id))
    }

    pub fn kind_at(&self, pos: usize) -> Option<TokenKind> {
        self.get(pos).map(|t| t.kind)
    }

    pub fn first(&self) -> Option<&Token> {
        self.get(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.root.iter().map(|&id| self.token(id))
    }

    /// Nested chain of a group token (empty for plain tokens)
    pub fn children(&self, id: TokenId) -> &[TokenId] {
        self.token(id).children()
    }

    /// Current position of a live token
    pub fn position(&self, id: TokenId) -> Option<usize> {
        self.root.iter().position(|&other| other == id)
    }

    /// First position after `pos` whose kind satisfies `matches`
    pub fn next_of_kind(&self, pos: usize, matches: impl Fn(TokenKind) -> bool) -> Option<usize> {
        (pos + 1..self.root.len()).find(|&p| matches(self.kind(self.root[p])))
    }

    /// From a `<` at `pos`, find the position of its matching `>`.
    ///
    /// Nested `<`/`>` pairs are balanced; returns `None` when the run is
    /// never closed.
    pub fn skip_to_end_of_angle_bracket(&self, pos: usize) -> Option<usize> {
        debug_assert_eq!(self.kind_at(pos), Some(TokenKind::SmallerThan));
        let mut level = 1usize;
        for p in pos + 1..self.root.len() {
            match self.kind(self.root[p]) {
                TokenKind::SmallerThan => level += 1,
                TokenKind::GreaterThan => {
                    level -= 1;
                    if level == 0 {
                        return Some(p);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Detach the token at `pos` from the chain, handing its id to the caller.
    ///
    /// Positions after `pos` shift down by one.
    pub fn take(&mut self, pos: usize) -> TokenId {
        self.root.remove(pos)
    }

    /// Last token (scanning backward) in `ids` whose kind satisfies
    /// `matches`, descending into parenthesis groups.
    pub fn last_nested_of_kind(
        &self,
        ids: &[TokenId],
        matches: impl Fn(TokenKind) -> bool + Copy,
    ) -> Option<TokenId> {
        for &id in ids.iter().rev() {
            let kind = self.kind(id);
            if matches(kind) {
                return Some(id);
            }
            if kind.is_group(GroupKind::Parenthesis) {
                if let Some(found) = self.last_nested_of_kind(self.children(id), matches) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Condense the `<` at `pos` and everything up to its matching `>` into
    /// one angle-bracket group. Returns false when the run is unbalanced.
    pub fn fold_angle_brackets(&mut self, pos: usize) -> bool {
        if self.kind_at(pos) != Some(TokenKind::SmallerThan) {
            return false;
        }
        let Some(end) = self.skip_to_end_of_angle_bracket(pos) else {
            return false;
        };
        let children: Vec<TokenId> = self.root.drain(pos..=end).collect();
        let first = self.token(children[0]);
        let last = self.token(children[children.len() - 1]);
        let range = first.range.cover(last.range);
        let position = first.position;
        let text = self.join_ids(&children);
        let group = self.alloc(Token::new(
            TokenKind::Group(GroupKind::AngleBracket),
            text,
            range,
            position,
        ));
        self.set_children(group, children);
        self.root.insert(pos, group);
        true
    }

    /// Space-separated spelling of the live chain
    pub fn join(&self) -> String {
        self.join_ids(&self.root)
    }

    pub(crate) fn join_ids(&self, ids: &[TokenId]) -> String {
        ids.iter()
            .map(|&id| self.token(id).text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
