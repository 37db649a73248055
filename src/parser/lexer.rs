//! Logos-based lexer for the GTK CSS color dialect
//!
//! The lexer is deliberately fine-grained: it only distinguishes the pieces
//! the statement scanner needs (`@`, identifier runs, whitespace, quotes,
//! `;`) and lumps everything else into single-character `Other` tokens.

use logos::Logos;
use text_size::{TextRange, TextSize};

/// Token kinds seen by the statement scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    At,
    Ident,
    Whitespace,
    Quote,
    Semicolon,
    Other,
}

/// A token with its kind, text, and byte range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub range: TextRange,
}

impl Token<'_> {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Check for an identifier run with exactly this text.
    pub fn is_ident(&self, text: &str) -> bool {
        self.kind == TokenKind::Ident && self.text == text
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let span = self.inner.span();
        let range = TextRange::new(
            TextSize::new(span.start as u32),
            TextSize::new(span.end as u32),
        );

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Other,
        };

        Some(Token {
            kind,
            text: self.inner.slice(),
            range,
        })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    #[token("@")]
    At,

    #[regex(r"[A-Za-z0-9_-]+")]
    Ident,

    // Same set as an ECMAScript `\s`: ASCII spacing, NBSP, the Unicode space
    // separators, line/paragraph separators and the BOM.
    #[regex(r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+")]
    Whitespace,

    #[token("\"")]
    #[token("'")]
    Quote,

    #[token(";")]
    Semicolon,

    #[regex(r#"[^@;"'\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}A-Za-z0-9_-]"#)]
    Other,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::At => TokenKind::At,
            LogosToken::Ident => TokenKind::Ident,
            LogosToken::Whitespace => TokenKind::Whitespace,
            LogosToken::Quote => TokenKind::Quote,
            LogosToken::Semicolon => TokenKind::Semicolon,
            LogosToken::Other => TokenKind::Other,
        }
    }
}
