//! Bracket folding: turns a flat lexeme stream into a token chain where
//! every balanced `()` and `[]` region is one composite token.
//!
//! Braces fold only when nested inside another group. At top level a `{`
//! ends the statement (`int a[] = {`, `int v {`), so it stays a plain
//! OpeningBrace and whatever follows stays flat.

use text_size::TextRange;
use tracing::trace;

use super::chain::TokenChain;
use super::errors::LexError;
use super::keywords::{Keyword, Language};
use super::lexer::{Lexeme, RawToken, lex};
use super::token::{GroupKind, Token, TokenId, TokenKind};
use crate::base::LineIndex;

/// An opener waiting for its closer
struct OpenGroup {
    group: GroupKind,
    items: Vec<TokenId>,
}

/// Lex `source` and fold its brackets into a [`TokenChain`].
pub fn tokenize(source: &str, language: Language) -> Result<TokenChain, LexError> {
    let lexemes = lex(source)?;
    let line_index = LineIndex::new(source);
    Ok(fold(&lexemes, language, &line_index))
}

fn classify(lexeme: &Lexeme<'_>, language: Language) -> TokenKind {
    match lexeme.kind {
        RawToken::Word => match Keyword::lookup(lexeme.text, language) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        },
        RawToken::Number => TokenKind::Number,
        RawToken::String => TokenKind::StringConstant,
        RawToken::Char => TokenKind::CharacterConstant,
        RawToken::LParen => TokenKind::OpeningParenthesis,
        RawToken::RParen => TokenKind::ClosingParenthesis,
        RawToken::LBracket => TokenKind::OpeningSquareBracket,
        RawToken::RBracket => TokenKind::ClosingSquareBracket,
        RawToken::LBrace => TokenKind::OpeningBrace,
        RawToken::RBrace => TokenKind::ClosingBrace,
        RawToken::ColonColon => TokenKind::DoubleColon,
        RawToken::Colon => TokenKind::SingleColon,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Eq => TokenKind::Assignment,
        RawToken::Lt => TokenKind::SmallerThan,
        RawToken::Gt => TokenKind::GreaterThan,
        RawToken::Star => TokenKind::Star,
        RawToken::Amp => TokenKind::Ampersand,
        RawToken::AmpAmp => TokenKind::DoubleAmpersand,
        RawToken::Arrow => TokenKind::PointerOperator,
        RawToken::Ellipsis => TokenKind::MultipleDots,
        RawToken::Operator => TokenKind::Operator,
    }
}

fn opens(kind: TokenKind) -> Option<GroupKind> {
    match kind {
        TokenKind::OpeningParenthesis => Some(GroupKind::Parenthesis),
        TokenKind::OpeningSquareBracket => Some(GroupKind::SquareBracket),
        TokenKind::OpeningBrace => Some(GroupKind::Brace),
        _ => None,
    }
}

fn closes(kind: TokenKind) -> Option<GroupKind> {
    match kind {
        TokenKind::ClosingParenthesis => Some(GroupKind::Parenthesis),
        TokenKind::ClosingSquareBracket => Some(GroupKind::SquareBracket),
        TokenKind::ClosingBrace => Some(GroupKind::Brace),
        _ => None,
    }
}

fn fold(lexemes: &[Lexeme<'_>], language: Language, line_index: &LineIndex) -> TokenChain {
    let mut chain = TokenChain::new();
    let mut root: Vec<TokenId> = Vec::new();
    let mut open: Vec<OpenGroup> = Vec::new();

    for lexeme in lexemes {
        let kind = classify(lexeme, language);
        let position = line_index.position(lexeme.range.start());
        let id = chain.alloc(Token::new(kind, lexeme.text, lexeme.range, position));

        if let Some(group) = opens(kind).filter(|&g| g != GroupKind::Brace || !open.is_empty()) {
            open.push(OpenGroup {
                group,
                items: vec![id],
            });
            continue;
        }

        if let Some(group) = closes(kind) {
            if open.last().is_some_and(|o| o.group == group) {
                if let Some(mut finished) = open.pop() {
                    finished.items.push(id);
                    let folded = alloc_group(&mut chain, finished);
                    current_level(&mut root, &mut open).push(folded);
                }
                continue;
            }
            trace!("[FOLD] unmatched '{}' left unfolded", lexeme.text);
        }

        current_level(&mut root, &mut open).push(id);
    }

    // Unclosed openers stay as plain tokens followed by what they collected.
    while let Some(unclosed) = open.pop() {
        trace!("[FOLD] unclosed {:?} left unfolded", unclosed.group);
        current_level(&mut root, &mut open).extend(unclosed.items);
    }

    chain.set_root(root);
    chain
}

fn current_level<'a>(root: &'a mut Vec<TokenId>, open: &'a mut [OpenGroup]) -> &'a mut Vec<TokenId> {
    match open.last_mut() {
        Some(group) => &mut group.items,
        None => root,
    }
}

fn alloc_group(chain: &mut TokenChain, finished: OpenGroup) -> TokenId {
    let first = chain.token(finished.items[0]);
    let last = chain.token(finished.items[finished.items.len() - 1]);
    let range: TextRange = first.range.cover(last.range);
    let position = first.position;
    let text = chain.join_ids(&finished.items);
    let id = chain.alloc(Token::new(
        TokenKind::Group(finished.group),
        text,
        range,
        position,
    ));
    chain.set_children(id, finished.items);
    id
}
