//! On-disk theme fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary theme directory populated with stylesheets.
pub struct ThemeDir {
    dir: TempDir,
}

impl ThemeDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a theme from `(relative path, content)` pairs.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let theme = Self::new();
        for (path, content) in files {
            theme.write(path, content);
        }
        theme
    }

    /// Write a file, creating parent directories. Returns its full path.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&path, content).expect("Failed to write stylesheet");
        path
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// Entry stylesheet that imports variables and uses one of them.
pub const ENTRY_USING_ACCENT: &str = "@import \"vars.css\"; .a{color:@accent;}";

/// Variables file defining `accent`.
pub const ACCENT_VARS: &str = "@define-color accent #336699;";

/// A small Adwaita-like palette with aliases and computed colors.
pub const PALETTE: &str = r#"
@define-color blue_3 #3584e4;
@define-color light_1 #ffffff;
@define-color dark_5 rgb(0, 0, 0);
@define-color accent_bg_color @blue_3;
@define-color shade_color rgba(0, 0, 0, 0.07);
@define-color borders_color alpha(@dark_5, 0.15);
"#;
