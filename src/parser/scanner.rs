//! Statement scanner for `@define-color`, `@import` and `@name` references.
//!
//! Each scan walks the token stream independently, so a reference inside a
//! definition's value (`@define-color fg @accent;`) is still reported as a
//! reference. Items come back in textual order.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::lexer::{Token, TokenKind, tokenize};
use crate::base::constants::{DEFINE_COLOR_KEYWORD, IMPORT_KEYWORD};

/// `@define-color <name> <value>;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorDefinition {
    pub name: SmolStr,
    /// Unparsed value text, trimmed.
    pub value: String,
    /// Whole statement, from `@` through `;`.
    pub range: TextRange,
    pub name_range: TextRange,
}

/// `@import "<path>";` or `@import '<path>';`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    /// Path literal as written, without quotes.
    pub path: String,
    pub range: TextRange,
    pub path_range: TextRange,
}

/// `@<name>` anywhere in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference {
    pub name: SmolStr,
    /// Range covering the `@` and the name.
    pub range: TextRange,
}

/// Everything the scanners find in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetItems {
    pub definitions: Vec<ColorDefinition>,
    pub imports: Vec<ImportStatement>,
    pub references: Vec<VariableReference>,
}

/// Tokenize once and run all three scans.
pub fn parse_stylesheet(text: &str) -> StylesheetItems {
    let tokens = tokenize(text);
    StylesheetItems {
        definitions: definitions_in(text, &tokens),
        imports: imports_in(text, &tokens),
        references: references_in(&tokens),
    }
}

pub fn scan_definitions(text: &str) -> Vec<ColorDefinition> {
    definitions_in(text, &tokenize(text))
}

pub fn scan_imports(text: &str) -> Vec<ImportStatement> {
    imports_in(text, &tokenize(text))
}

pub fn scan_references(text: &str) -> Vec<VariableReference> {
    references_in(&tokenize(text))
}

fn kind_at(tokens: &[Token<'_>], index: usize) -> Option<TokenKind> {
    tokens.get(index).map(|t| t.kind)
}

fn starts_keyword(tokens: &[Token<'_>], index: usize, keyword: &str) -> bool {
    tokens[index].is(TokenKind::At)
        && tokens.get(index + 1).is_some_and(|t| t.is_ident(keyword))
        && kind_at(tokens, index + 2) == Some(TokenKind::Whitespace)
}

fn definitions_in(text: &str, tokens: &[Token<'_>]) -> Vec<ColorDefinition> {
    let mut definitions = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        match match_definition(text, tokens, i) {
            Some((definition, next)) => {
                definitions.push(definition);
                i = next;
            }
            None => i += 1,
        }
    }
    definitions
}

/// Try to match a definition starting at `start`; returns it with the index
/// of the first token after its `;`.
fn match_definition(
    text: &str,
    tokens: &[Token<'_>],
    start: usize,
) -> Option<(ColorDefinition, usize)> {
    if !starts_keyword(tokens, start, DEFINE_COLOR_KEYWORD) {
        return None;
    }
    let name = tokens.get(start + 3).filter(|t| t.is(TokenKind::Ident))?;
    let separator = tokens.get(start + 4).filter(|t| t.is(TokenKind::Whitespace))?;
    let semicolon = (start + 5..tokens.len()).find(|&j| tokens[j].is(TokenKind::Semicolon))?;

    // The value starts right after the first separating whitespace character
    // and must not be empty.
    let first_space = separator.text.chars().next()?;
    let value_start = usize::from(separator.range.start()) + first_space.len_utf8();
    let value_end = usize::from(tokens[semicolon].range.start());
    if value_start >= value_end {
        return None;
    }

    let definition = ColorDefinition {
        name: SmolStr::new(name.text),
        value: text[value_start..value_end].trim().to_string(),
        range: TextRange::new(tokens[start].range.start(), tokens[semicolon].range.end()),
        name_range: name.range,
    };
    Some((definition, semicolon + 1))
}

fn imports_in(text: &str, tokens: &[Token<'_>]) -> Vec<ImportStatement> {
    let mut imports = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        match match_import(text, tokens, i) {
            Some((import, next)) => {
                imports.push(import);
                i = next;
            }
            None => i += 1,
        }
    }
    imports
}

fn match_import(text: &str, tokens: &[Token<'_>], start: usize) -> Option<(ImportStatement, usize)> {
    if !starts_keyword(tokens, start, IMPORT_KEYWORD) {
        return None;
    }
    let open = start + 3;
    if kind_at(tokens, open) != Some(TokenKind::Quote) {
        return None;
    }
    let close = (open + 1..tokens.len()).find(|&j| tokens[j].is(TokenKind::Quote))?;
    if close == open + 1 || kind_at(tokens, close + 1) != Some(TokenKind::Semicolon) {
        return None;
    }

    let path_range = TextRange::new(tokens[open].range.end(), tokens[close].range.start());
    let import = ImportStatement {
        path: text[path_range].to_string(),
        range: TextRange::new(tokens[start].range.start(), tokens[close + 1].range.end()),
        path_range,
    };
    Some((import, close + 2))
}

fn references_in(tokens: &[Token<'_>]) -> Vec<VariableReference> {
    tokens
        .windows(2)
        .filter(|pair| pair[0].is(TokenKind::At) && pair[1].is(TokenKind::Ident))
        .map(|pair| VariableReference {
            name: SmolStr::new(pair[1].text),
            range: TextRange::new(pair[0].range.start(), pair[1].range.end()),
        })
        .collect()
}

/// Find the reference whose range contains `offset` (ends inclusive).
pub fn reference_at(text: &str, offset: TextSize) -> Option<VariableReference> {
    scan_references(text)
        .into_iter()
        .find(|reference| reference.range.contains_inclusive(offset))
}
