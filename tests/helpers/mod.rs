//! Shared helpers for integration tests.

pub mod table_assertions;
pub mod theme_fixtures;
