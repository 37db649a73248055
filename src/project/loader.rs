//! Document access behind a minimal capability set.
//!
//! The resolver never touches the filesystem directly; everything goes
//! through [`DocumentLoader`] so the traversal works the same against disk,
//! open editor buffers, or an in-memory fixture.

use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use super::paths::{join_import_path, normalize_path};

/// Read/exists/resolve-path capabilities the resolver depends on.
pub trait DocumentLoader {
    /// Read the full text of a document.
    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Check whether a document exists.
    fn exists(&self, path: &Path) -> bool;

    /// Produce the candidate target of `literal` imported from `base`.
    fn resolve_path(&self, base: &Path, literal: &str) -> PathBuf {
        join_import_path(base, literal)
    }
}

impl<L: DocumentLoader + ?Sized> DocumentLoader for &L {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        (**self).read_text(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn resolve_path(&self, base: &Path, literal: &str) -> PathBuf {
        (**self).resolve_path(base, literal)
    }
}

/// Loads documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl FsLoader {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentLoader for FsLoader {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Documents held in memory, keyed by normalised path.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    files: FxHashMap<PathBuf, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`MemoryLoader::insert`].
    pub fn with_file(mut self, path: impl AsRef<Path>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    /// Add or replace a document. Returns the previous text, if any.
    pub fn insert(&mut self, path: impl AsRef<Path>, text: impl Into<String>) -> Option<String> {
        self.files.insert(normalize_path(path.as_ref()), text.into())
    }

    pub fn remove(&mut self, path: impl AsRef<Path>) -> Option<String> {
        self.files.remove(&normalize_path(path.as_ref()))
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files
            .get(&normalize_path(path.as_ref()))
            .map(String::as_str)
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.files.contains_key(&normalize_path(path.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }
}

impl DocumentLoader for MemoryLoader {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        self.get(path).map(str::to_string).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("No document at {}", path.display()),
            )
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.contains(path)
    }
}

/// Open editor buffers layered over another loader.
///
/// Buffers win over the base loader, so unsaved edits are what the resolver
/// sees.
#[derive(Debug, Clone, Copy)]
pub struct OverlayLoader<'a, L> {
    overlay: &'a MemoryLoader,
    base: &'a L,
}

impl<'a, L: DocumentLoader> OverlayLoader<'a, L> {
    pub fn new(overlay: &'a MemoryLoader, base: &'a L) -> Self {
        Self { overlay, base }
    }
}

impl<L: DocumentLoader> DocumentLoader for OverlayLoader<'_, L> {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        match self.overlay.get(path) {
            Some(text) => Ok(text.to_string()),
            None => self.base.read_text(path),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.overlay.contains(path) || self.base.exists(path)
    }

    fn resolve_path(&self, base: &Path, literal: &str) -> PathBuf {
        self.base.resolve_path(base, literal)
    }
}
