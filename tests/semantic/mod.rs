//! Resolver and codec tests against on-disk themes
//!
//! Tests for:
//! - Import graphs (cycles, diamonds, missing files)
//! - Override ordering across files
//! - Color codec and luminance classification

pub mod tests_color_codec;
pub mod tests_import_resolution;
