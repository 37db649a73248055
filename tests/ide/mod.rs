//! IDE feature tests
//!
//! Tests for:
//! - Decoration planning against resolved themes
//! - Hover information
//! - PreviewHost buffers and caching

pub mod tests_preview_host;
