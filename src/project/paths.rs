//! Path algebra for `@import` targets.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::base::constants::STYLESHEET_EXTENSIONS;

/// Check if an import literal is explicitly relative (`./x` or `../x`).
pub fn is_relative_import(literal: &str) -> bool {
    literal.starts_with("./") || literal.starts_with("../")
}

/// Join an import literal onto the directory containing `base`.
///
/// Relative literals resolve against that directory. Anything else is
/// treated as a sibling path under it, even with a leading `/`; there is
/// no search up a module path. The result is lexically normalised.
pub fn join_import_path(base: &Path, literal: &str) -> PathBuf {
    let dir = base.parent().unwrap_or_else(|| Path::new(""));
    let joined = if is_relative_import(literal) {
        dir.join(literal)
    } else {
        dir.join(literal.trim_start_matches('/'))
    };
    normalize_path(&joined)
}

/// Collapse `.` and `..` components without touching the filesystem.
///
/// `..` never climbs above a root; leading `..` on a relative path is kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

/// Check if the file name ends in `.ext` for one of `extensions`
/// (case-sensitive). A bare dotfile such as `.css` counts.
pub fn has_extension(path: &Path, extensions: &[impl AsRef<str>]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            extensions.iter().any(|known| {
                name.strip_suffix(known.as_ref())
                    .is_some_and(|stem| stem.ends_with('.'))
            })
        })
}

/// Append `.ext` to the full file name (`a.min` becomes `a.min.css`).
pub fn append_extension(path: PathBuf, extension: &str) -> PathBuf {
    let mut name: OsString = path.into_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Check if a document should get color previews.
pub fn is_stylesheet(path: &Path) -> bool {
    has_extension(path, STYLESHEET_EXTENSIONS)
}
