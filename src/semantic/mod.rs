//! Semantic layer: the import-aware definition resolver and the color codec.
//!
//! ```text
//! entry document ──► ColorResolver ──► DefinitionTable ──► consumers
//!                        │                                  (hover, decorations)
//!                        └── DocumentLoader (read / exists / resolve_path)
//! ```

pub mod color;
mod error;
mod resolver;
mod table;

pub use color::{CanonicalColor, is_light, to_canonical_hex};
pub use error::{ResolveError, ResolveResult};
pub use resolver::{ColorResolver, Resolution, ResolveOptions};
pub use table::DefinitionTable;
