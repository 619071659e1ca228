//! Logos-based lexer for C and C++ statement text
//!
//! Fast tokenization using the logos crate. Whitespace, comments and line
//! continuations are skipped; bracket folding happens afterwards in
//! [`fold`](super::fold).

use logos::Logos;
use text_size::{TextRange, TextSize};

use super::errors::LexError;

/// A raw token with its kind, text, and byte range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub kind: RawToken,
    pub text: &'a str,
    pub range: TextRange,
}

/// Lexer wrapping the logos-generated tokenizer
pub(crate) struct Lexer<'a> {
    inner: logos::Lexer<'a, RawToken>,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            inner: RawToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Lexeme<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.inner.next()?;
        let text = self.inner.slice();
        let span = self.inner.span();
        let start = TextSize::new(span.start as u32);

        Some(match token {
            Ok(kind) => Ok(Lexeme {
                kind,
                text,
                range: TextRange::new(start, TextSize::new(span.end as u32)),
            }),
            Err(()) => Err(LexError::unexpected(text, start)),
        })
    }
}

/// Lex an entire string, stopping at the first error
pub fn lex(input: &str) -> Result<Vec<Lexeme<'_>>, LexError> {
    Lexer::new(input).collect()
}

/// Logos token enum
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"([ \t\r\n\f]+|\\\r?\n|//[^\n]*)")]
#[logos(skip r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
pub enum RawToken {
    // =========================================================================
    // WORDS AND LITERALS
    // =========================================================================
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Word,

    #[regex(r"0[xX][0-9a-fA-F']+[a-zA-Z_]*")]
    #[regex(r"[0-9][0-9']*(\.[0-9']*)?([eE][+-]?[0-9]+)?[a-zA-Z_]*")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?[a-zA-Z_]*")]
    Number,

    #[regex(r#"(u8|u|U|L)?"([^"\\\n]|\\.)*""#)]
    String,

    #[regex(r"(u8|u|U|L)?'([^'\\\n]|\\.)+'")]
    Char,

    // =========================================================================
    // BRACKETS
    // =========================================================================
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    // =========================================================================
    // PUNCTUATION WITH A DEDICATED KIND
    // =========================================================================
    #[token("::")]
    ColonColon,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token("=")]
    Eq,

    #[token("<")]
    Lt,

    /// `>>` lexes as two of these so template runs balance
    #[token(">")]
    Gt,

    #[token("*")]
    Star,

    #[token("&")]
    Amp,

    #[token("&&")]
    AmpAmp,

    #[token("->")]
    Arrow,

    #[token("...")]
    Ellipsis,

    // =========================================================================
    // EVERYTHING ELSE
    // =========================================================================
    #[token("->*")]
    #[token(".*")]
    #[token(".")]
    #[token("++")]
    #[token("--")]
    #[token("+")]
    #[token("-")]
    #[token("/")]
    #[token("%")]
    #[token("^")]
    #[token("|")]
    #[token("||")]
    #[token("~")]
    #[token("!")]
    #[token("?")]
    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("<=>")]
    #[token("<<")]
    #[token("<<=")]
    #[token(">>=")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    Operator,
}
