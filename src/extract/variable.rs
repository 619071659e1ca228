//! Declarator scanner. Finds the variables declared by one statement.
//!
//! Shapes recognized:
//!
//! ```text
//! type var;
//! type var1, var2;
//! type var[];
//! type var(constructor args);
//! type var = ...;
//! type (*ident)();
//! type var:bits;
//! very complex type with modifiers() namespace::namespace::var = ...;
//! type<with template> namespace::var[] = {
//! ```
//!
//! For each comma-separated declarator: run to a notable token, check that
//! an identifier precedes it (or sits inside a function-pointer group), walk
//! back over `::` qualifiers, check that a type precedes, emit, then run to
//! the next `,` `;` or `{`.
//!
//! Assumes function definitions and prototypes were already ruled out and
//! that the chain ends with one of `;` `=` `{`.

use tracing::{debug, trace};

use super::ExtractionContext;
use super::KeywordState;
use super::heuristics::{looks_like_constructor_parameter_set, looks_like_function_parameter_list};
use crate::parser::{GroupKind, TokenChain, TokenId, TokenKind};
use crate::scope::{ScopeAccess, ScopeFrame, ScopeKind};
use crate::tags::{TagKind, TypeRef};

/// Tokens that end the lead-in of a declarator
fn is_notable(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::SingleColon
            | TokenKind::Group(GroupKind::Parenthesis | GroupKind::SquareBracket)
            | TokenKind::Assignment
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::OpeningBrace
    )
}

/// Tokens that cannot appear before the first notable token of a declaration
fn disqualifies_prefix(kind: TokenKind) -> bool {
    kind.is_unmatched_closer()
        || matches!(
            kind,
            TokenKind::Operator
                | TokenKind::DoubleAmpersand
                | TokenKind::PointerOperator
                | TokenKind::Group(GroupKind::Brace | GroupKind::AngleBracket)
                | TokenKind::StringConstant
                | TokenKind::CharacterConstant
                | TokenKind::MultipleDots
        )
}

/// Notable tokens followed by initializer, dimension or width tokens
fn has_trailing_shape(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Group(GroupKind::Parenthesis | GroupKind::SquareBracket)
            | TokenKind::SingleColon
            | TokenKind::Assignment
    )
}

fn ends_declarator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Comma | TokenKind::Semicolon | TokenKind::OpeningBrace
    )
}

fn can_end_type(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Identifier
            | TokenKind::Keyword(_)
            | TokenKind::GreaterThan
            | TokenKind::Star
            | TokenKind::Ampersand
    )
}

/// Where a declarator name was found
struct Declarator {
    /// Name token; nested inside a group for function pointers
    identifier: TokenId,
    /// Live position of the token right before the name (or its group)
    before: usize,
    /// Live position of the notable token to resume from
    notable: usize,
}

/// Scanner state for one statement
struct VariableScan<'c, 'a> {
    chain: &'c mut TokenChain,
    cx: &'c mut ExtractionContext<'a>,
    /// Scope kind at entry, before any qualifier frames are pushed
    scope_kind: ScopeKind,
    /// Last token of the type, found on the first declarator
    type_end: Option<TokenId>,
    got_variable: bool,
}

/// Extract every variable declared by `chain`, emitting one tag each.
///
/// Returns true if at least one variable was found. Never fails: any shape
/// it does not recognize ends the scan and returns what was found so far.
/// Qualifier tokens of declarator names are detached from the chain.
pub fn extract_variable_declarations(chain: &mut TokenChain, cx: &mut ExtractionContext<'_>) -> bool {
    let Some(first) = chain.first() else {
        trace!("[VAR] chain is empty");
        return false;
    };

    if !matches!(first.kind, TokenKind::Identifier | TokenKind::Keyword(_)) {
        trace!("[VAR] statement does not start with identifier or keyword");
        return false;
    }

    debug!("[VAR] looking for variable declarations in '{}'", chain.join());

    let scope_kind = cx.scopes.current_kind();
    let mut scan = VariableScan {
        chain,
        cx,
        scope_kind,
        type_end: None,
        got_variable: false,
    };
    scan.run();
    scan.got_variable
}

impl VariableScan<'_, '_> {
    fn kind_at(&self, pos: usize) -> Option<TokenKind> {
        self.chain.kind_at(pos)
    }

    /// Scan declarators until the statement ends or a shape is rejected
    fn run(&mut self) {
        let mut pos = 0;
        while pos < self.chain.len() {
            match self.declarator(pos) {
                Some(next) => pos = next,
                None => return,
            }
        }
        trace!("[VAR] reached end of chain");
    }

    /// Handle the declarator starting at `pos`. Returns the position of the
    /// next declarator, or `None` when the scan is over.
    fn declarator(&mut self, pos: usize) -> Option<usize> {
        let notable = self.scan_prefix(pos)?;
        let found = self.identify(notable)?;
        let (before, scope_start) = self.skip_qualifiers(found.before)?;

        if self.type_end.is_none() {
            let kind = self.kind_at(before)?;
            if !can_end_type(kind) {
                trace!(
                    "[VAR] token '{}' ({:?}) does not seem to be part of a type name",
                    self.chain.get(before)?.text,
                    kind
                );
                return None;
            }
            self.type_end = self.chain.id_at(before);
        }

        // Past this point nothing aborts until the pushed frames are popped.
        let pushed = match scope_start {
            Some(start) => self.push_qualifiers(start, found.before + 1),
            None => 0,
        };
        let notable = found.notable - pushed;

        self.got_variable = true;
        self.emit(found.identifier);

        for _ in 0..pushed {
            self.cx.scopes.pop();
        }

        self.advance(notable)
    }

    /// Run to the next notable token, skipping template argument runs.
    fn scan_prefix(&self, mut pos: usize) -> Option<usize> {
        while let Some(kind) = self.kind_at(pos) {
            if is_notable(kind) {
                trace!(
                    "[VAR] found notable token '{}' ({:?})",
                    self.chain.get(pos)?.text,
                    kind
                );
                return Some(pos);
            }

            if kind == TokenKind::SmallerThan {
                let Some(end) = self.chain.skip_to_end_of_angle_bracket(pos) else {
                    trace!("[VAR] failed to skip past angle bracket run");
                    return None;
                };
                pos = end + 1;
                continue;
            }

            if disqualifies_prefix(kind) {
                trace!(
                    "[VAR] token '{}' ({:?}) should not appear in the lead-in of a declaration",
                    self.chain.get(pos)?.text,
                    kind
                );
                return None;
            }

            pos += 1;
        }
        trace!("[VAR] no notable token left");
        None
    }

    /// Find the declarator name relative to the notable token at `notable`.
    fn identify(&self, notable: usize) -> Option<Declarator> {
        if notable == 0 {
            trace!("[VAR] nothing before notable token");
            return None;
        }
        let previous = self.chain.id_at(notable - 1)?;
        let notable_id = self.chain.id_at(notable)?;

        if self.chain.kind(notable_id) == TokenKind::Group(GroupKind::Parenthesis) {
            if let Some(identifier) = self.function_pointer_name(notable, notable_id) {
                return Some(Declarator {
                    identifier,
                    before: notable - 1,
                    notable: notable + 1,
                });
            }

            if self.chain.kind(previous) == TokenKind::Identifier
                && matches!(self.scope_kind, ScopeKind::Namespace | ScopeKind::Function)
                && self.cx.file.is_cpp()
                && looks_like_constructor_parameter_set(self.chain, notable_id)
            {
                // might be `Type var(args)`; prototypes were excluded upstream
                return Some(Declarator {
                    identifier: previous,
                    before: self.before_identifier(notable - 1)?,
                    notable,
                });
            }

            trace!("[VAR] no recognizable parenthesis form for a variable");
            return None;
        }

        if self.chain.kind(previous) != TokenKind::Identifier {
            trace!("[VAR] no identifier before the notable token");
            return None;
        }

        Some(Declarator {
            identifier: previous,
            before: self.before_identifier(notable - 1)?,
            notable,
        })
    }

    /// `type (*name)(params)`: the group at `notable` followed by a
    /// parameter list, with an identifier somewhere inside the first group.
    fn function_pointer_name(&self, notable: usize, group: TokenId) -> Option<TokenId> {
        let next = self.chain.id_at(notable + 1)?;
        if self.chain.kind(next) != TokenKind::Group(GroupKind::Parenthesis)
            || !looks_like_function_parameter_list(self.chain, next)
        {
            return None;
        }
        let identifier = self
            .chain
            .last_nested_of_kind(self.chain.children(group), TokenKind::is_identifier)?;
        trace!(
            "[VAR] function pointer '{}'",
            self.chain.token(identifier).text
        );
        Some(identifier)
    }

    fn before_identifier(&self, identifier: usize) -> Option<usize> {
        if identifier == 0 {
            trace!("[VAR] identifier not preceded by a type");
            return None;
        }
        Some(identifier - 1)
    }

    /// Walk back over `A::B::` qualifiers ending at `before`.
    ///
    /// Returns the position of the token left before the qualifiers and the
    /// position of the outermost qualifier, if any.
    fn skip_qualifiers(&self, mut before: usize) -> Option<(usize, Option<usize>)> {
        let mut scope_start = None;

        while self.kind_at(before) == Some(TokenKind::DoubleColon) {
            if before == 0 {
                trace!("[VAR] identifier preceded by '::' but not by a type");
                return None;
            }
            before -= 1;

            if self.kind_at(before) != Some(TokenKind::Identifier) {
                trace!("[VAR] identifier preceded by '::' with probable syntax error");
                return None;
            }
            scope_start = Some(before);

            if before == 0 {
                trace!("[VAR] identifier preceded by '::' but not by a type");
                return None;
            }
            before -= 1;
        }

        Some((before, scope_start))
    }

    /// Detach the qualifier identifiers between `start` and `end` and push
    /// each as a transient scope frame. Returns the number pushed.
    ///
    /// The run alternates `Identifier ::` so every other token is a name.
    fn push_qualifiers(&mut self, start: usize, end: usize) -> usize {
        let count = (end - start) / 2;
        for i in 0..count {
            // each detach shifts the remaining qualifiers left by one
            let id = self.chain.take(start + i);
            let name = self.chain.token(id).text.clone();
            trace!("[VAR] pushing qualifier '{}'", name);
            // the real kind of the qualifier is unknown
            self.cx.scopes.push(
                ScopeFrame::new(name, ScopeKind::Class, ScopeAccess::Unknown).with_anchor(id),
            );
        }
        count
    }

    fn emit(&mut self, identifier: TokenId) {
        let kind = if self.cx.keywords.contains(KeywordState::SEEN_EXTERN) {
            TagKind::ExternVariable
        } else {
            self.cx.scopes.variable_kind()
        };

        let anchor = self.chain.token(identifier);
        let Some(mut tag) = self
            .cx
            .tags
            .begin(anchor.text.as_str(), kind, anchor, self.cx.scopes)
        else {
            trace!("[VAR] tag for '{}' refused", anchor.text);
            return;
        };

        tag.type_ref = self.simple_type_ref();
        match &tag.type_ref {
            Some(type_ref) => trace!("[VAR] typeref is {}:{}", type_ref.keyword, type_ref.name),
            None => trace!("[VAR] no typeref found"),
        }

        let is_header = self.cx.file.is_header;
        let seen_static = self.cx.keywords.contains(KeywordState::SEEN_STATIC);
        tag.file_scope = match self.scope_kind {
            ScopeKind::Namespace => seen_static && !is_header,
            // locals are always hidden
            ScopeKind::Function => true,
            _ => !is_header,
        };

        debug!("[VAR] emitting {} '{}'", tag.kind.name(), tag.name);
        self.cx.tags.commit(tag);
    }

    /// `struct X y;` and friends: exactly four tokens with the type being a
    /// type-ref keyword followed by a name.
    fn simple_type_ref(&self) -> Option<TypeRef> {
        let type_end = self.type_end?;
        if self.chain.len() != 4 || self.chain.kind(type_end) != TokenKind::Identifier {
            return None;
        }
        let at = self.chain.position(type_end)?;
        let keyword_token = self.chain.get(at.checked_sub(1)?)?;
        let keyword = keyword_token.kind.keyword()?;
        if !keyword.is_type_ref_marker() {
            return None;
        }
        Some(TypeRef {
            keyword: keyword_token.text.clone(),
            name: self.chain.token(type_end).text.clone(),
        })
    }

    /// Move past the declarator's trailing shape. Returns the position of
    /// the next declarator after a comma, or `None` when the statement ends.
    fn advance(&self, mut notable: usize) -> Option<usize> {
        if has_trailing_shape(self.kind_at(notable)?) {
            let Some(end) = self.chain.next_of_kind(notable, ends_declarator) else {
                trace!("[VAR] no comma, semicolon or '{{' after declarator");
                return None;
            };
            notable = end;
        }

        match self.kind_at(notable)? {
            TokenKind::Comma => {
                trace!("[VAR] at a comma, might have other declarations");
                Some(notable + 1)
            }
            _ => {
                trace!("[VAR] nothing else");
                None
            }
        }
    }
}
