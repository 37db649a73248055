//! IDE features — consumers of the resolved definitions.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: `plan_decorations` and `hover` take text and a
//!    table in, return data out
//! 2. **No editor types**: ranges are our own, converted at the host boundary
//! 3. **Fresh resolution**: every query re-resolves; only decoration plans
//!    are cached, and any change clears them
//!
//! ## Usage
//!
//! The recommended way to use this module is through `PreviewHost`:
//!
//! ```ignore
//! use gtkcolor::ide::PreviewHost;
//!
//! let mut host = PreviewHost::default();
//! host.set_file_content("/theme/gtk.css", "@define-color bg #fafafa;");
//! let plan = host.decorations("/theme/gtk.css")?;
//! ```

mod decorations;
mod host;
mod hover;

pub use decorations::{BackgroundGroup, ColorMarker, DecorationPlan, plan_decorations};
pub use host::PreviewHost;
pub use hover::{HoverResult, hover};
