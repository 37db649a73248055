//! Foundation types for the color preview toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`Position`], [`Span`] - Line/column ranges for editor consumers
//! - Domain constants (stylesheet extensions, contrast colors)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod position;
mod span;

pub use position::{Position, Span};
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
