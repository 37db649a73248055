//! Scanner for the GTK CSS color dialect
//!
//! Only three statement shapes matter for color previews, so there is no
//! full CSS parser here:
//!
//! ```text
//! @define-color <name> <value>;    → ColorDefinition
//! @import "<path>";                → ImportStatement
//! @<name>                          → VariableReference
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → fine-grained Tokens with byte ranges
//!     ↓
//! Scanners → definitions / imports / references in textual order
//! ```

mod lexer;
mod scanner;

pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use scanner::{
    ColorDefinition, ImportStatement, StylesheetItems, VariableReference, parse_stylesheet,
    reference_at, scan_definitions, scan_imports, scan_references,
};
