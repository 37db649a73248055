//! Project access: document loading and import path algebra.

pub mod loader;
pub mod paths;

pub use loader::{DocumentLoader, FsLoader, MemoryLoader, OverlayLoader};
pub use paths::{is_stylesheet, join_import_path, normalize_path};
