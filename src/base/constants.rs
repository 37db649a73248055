//! Domain constants for the GTK CSS dialect and its previews.

/// Extension appended to import paths that lack a recognised one.
pub const DEFAULT_EXTENSION: &str = "css";

/// Extensions treated as stylesheets.
pub const STYLESHEET_EXTENSIONS: &[&str] = &["css"];

/// Keyword introducing a color definition (`@define-color name value;`).
pub const DEFINE_COLOR_KEYWORD: &str = "define-color";

/// Keyword introducing an import (`@import "path";`).
pub const IMPORT_KEYWORD: &str = "import";

/// Glyph drawn in front of every previewed reference.
pub const MARKER_GLYPH: &str = "●";

/// Alpha suffix for background groups (fully opaque).
pub const OPAQUE_SUFFIX: &str = "FF";

/// Foreground used on light backgrounds.
pub const DARK_FOREGROUND: &str = "#000000";

/// Foreground used on dark backgrounds.
pub const LIGHT_FOREGROUND: &str = "#ffffff";

/// Relative luminance above which a color counts as light.
pub const LUMINANCE_THRESHOLD: f64 = 0.5;

/// Relative luminance weights for the red, green and blue channels.
pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];
