//! # gtk-color-base
//!
//! Core library for previewing GTK CSS `@define-color` variables.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Decoration planning, hover, PreviewHost
//!   ↓
//! semantic  → Import-aware definition resolver, color codec
//!   ↓
//! project   → DocumentLoader capability set, import path algebra
//!   ↓
//! parser    → Logos lexer, statement scanners
//!   ↓
//! base      → Primitives (TextRange, LineIndex, Span, constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → project → semantic → ide)
// ============================================================================

/// Foundation types: TextRange, LineIndex, Span, constants
pub mod base;

/// Parser: Logos lexer and `@define-color` / `@import` / `@name` scanners
pub mod parser;

/// Project access: document loaders and import path algebra
pub mod project;

/// Semantic model: definition resolver and color codec
pub mod semantic;

/// IDE features: decorations, hover, preview host
pub mod ide;

// Re-export the main entry points
pub use ide::{DecorationPlan, HoverResult, PreviewHost, hover, plan_decorations};
pub use project::{DocumentLoader, FsLoader, MemoryLoader};
pub use semantic::{
    CanonicalColor, ColorResolver, DefinitionTable, ResolveError, ResolveOptions, is_light,
    to_canonical_hex,
};

// Re-export foundation types
pub use base::{LineCol, LineIndex, Position, Span, TextRange, TextSize};
