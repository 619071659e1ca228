//! Token kinds and tokens of a statement chain.

use smol_str::SmolStr;
use text_size::TextRange;

use super::keywords::Keyword;
use crate::base::Position;

/// Index of a token inside its [`TokenChain`](super::TokenChain) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenId(pub(crate) u32);

impl TokenId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The bracket pair a composite token stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// `( ... )`
    Parenthesis,
    /// `[ ... ]`
    SquareBracket,
    /// `{ ... }`
    Brace,
    /// `< ... >`
    AngleBracket,
}

impl GroupKind {
    pub fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            GroupKind::Parenthesis => ("(", ")"),
            GroupKind::SquareBracket => ("[", "]"),
            GroupKind::Brace => ("{", "}"),
            GroupKind::AngleBracket => ("<", ">"),
        }
    }
}

/// Lexical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword(Keyword),
    Number,
    StringConstant,
    CharacterConstant,
    /// Any operator without a dedicated kind (`+`, `==`, `.`, `->*`, ...)
    Operator,
    /// `*`
    Star,
    /// `&`
    Ampersand,
    /// `&&`
    DoubleAmpersand,
    /// `->`
    PointerOperator,
    /// `:`
    SingleColon,
    /// `::`
    DoubleColon,
    Comma,
    Semicolon,
    /// `=`
    Assignment,
    /// `<`
    SmallerThan,
    /// `>`
    GreaterThan,
    /// `...`
    MultipleDots,
    OpeningBrace,
    ClosingBrace,
    OpeningParenthesis,
    ClosingParenthesis,
    OpeningSquareBracket,
    ClosingSquareBracket,
    /// A balanced bracketed region folded into one token
    Group(GroupKind),
}

impl TokenKind {
    pub fn is_identifier(self) -> bool {
        self == TokenKind::Identifier
    }

    pub fn is_keyword(self) -> bool {
        matches!(self, TokenKind::Keyword(_))
    }

    pub fn keyword(self) -> Option<Keyword> {
        match self {
            TokenKind::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    pub fn is_group(self, group: GroupKind) -> bool {
        self == TokenKind::Group(group)
    }

    /// Literal constants: numbers, strings and characters
    pub fn is_constant(self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::StringConstant | TokenKind::CharacterConstant
        )
    }

    /// Closers left unfolded because they had no opener
    pub fn is_unmatched_closer(self) -> bool {
        matches!(
            self,
            TokenKind::ClosingBrace
                | TokenKind::ClosingParenthesis
                | TokenKind::ClosingSquareBracket
        )
    }
}

/// One lexical unit of a statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: SmolStr,
    pub range: TextRange,
    pub position: Position,
    pub(crate) children: Vec<TokenId>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<SmolStr>, range: TextRange, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            range,
            position,
            children: Vec::new(),
        }
    }

    /// Ids of the nested chain owned by a group token, delimiters included.
    /// Empty for non-group tokens.
    pub fn children(&self) -> &[TokenId] {
        &self.children
    }
}
