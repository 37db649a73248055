//! PreviewHost — open documents, resolution and cached decoration plans.
//!
//! The host owns the editor buffers and answers preview queries against
//! them, falling back to a base loader (usually the filesystem) for files
//! that are not open.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = PreviewHost::new(FsLoader::new());
//!
//! // Apply buffer changes
//! host.set_file_content("/theme/gtk.css", text);
//!
//! // Query
//! let plan = host.decorations("/theme/gtk.css")?;
//! let hover = host.hover("/theme/gtk.css", line, col)?;
//! ```
//!
//! Plans are cached per document. Any buffer change clears every cached
//! plan, because an edit to one file can change the definitions every
//! importer sees.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use super::decorations::{DecorationPlan, plan_decorations};
use super::hover::{HoverResult, hover};
use crate::project::{
    DocumentLoader, FsLoader, MemoryLoader, OverlayLoader, is_stylesheet, normalize_path,
};
use crate::semantic::{
    ColorResolver, DefinitionTable, ResolveError, ResolveOptions, ResolveResult,
};

/// Owns all mutable preview state.
pub struct PreviewHost<L = FsLoader> {
    /// Loader for documents that are not open
    base: L,
    /// Open editor buffers
    open: MemoryLoader,
    options: ResolveOptions,
    /// Decoration plans keyed by normalised path
    plans: FxHashMap<PathBuf, Arc<DecorationPlan>>,
}

impl Default for PreviewHost<FsLoader> {
    fn default() -> Self {
        Self::new(FsLoader::new())
    }
}

impl<L: DocumentLoader> PreviewHost<L> {
    pub fn new(base: L) -> Self {
        Self {
            base,
            open: MemoryLoader::new(),
            options: ResolveOptions::default(),
            plans: FxHashMap::default(),
        }
    }

    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self.plans.clear();
        self
    }

    /// Set the text of an open document.
    pub fn set_file_content(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.open.insert(path, content);
        self.invalidate();
    }

    /// Close a document; later reads fall back to the base loader.
    pub fn remove_file(&mut self, path: impl AsRef<Path>) {
        self.open.remove(path);
        self.invalidate();
    }

    /// Check if a document is open.
    pub fn has_file(&self, path: impl AsRef<Path>) -> bool {
        self.open.contains(path)
    }

    pub fn file_count(&self) -> usize {
        self.open.len()
    }

    /// Drop every cached plan (call after external changes, e.g. on disk).
    pub fn invalidate(&mut self) {
        if !self.plans.is_empty() {
            debug!(count = self.plans.len(), "Invalidating decoration plans");
        }
        self.plans.clear();
    }

    /// Number of cached plans.
    pub fn cached_plan_count(&self) -> usize {
        self.plans.len()
    }

    /// Resolve the definitions visible from `path`.
    pub fn definitions(&self, path: impl AsRef<Path>) -> ResolveResult<DefinitionTable> {
        self.resolver().resolve(path)
    }

    /// Decoration plan for `path`, from cache when possible.
    ///
    /// Documents without a stylesheet extension get an empty plan.
    pub fn decorations(&mut self, path: impl AsRef<Path>) -> ResolveResult<Arc<DecorationPlan>> {
        let key = normalize_path(path.as_ref());
        if let Some(plan) = self.plans.get(&key) {
            return Ok(Arc::clone(plan));
        }

        let plan = if is_stylesheet(&key) {
            let text = self.read(&key)?;
            let table = self.resolver().resolve_text(&key, &text);
            plan_decorations(&text, &table)
        } else {
            DecorationPlan::default()
        };

        let plan = Arc::new(plan);
        self.plans.insert(key, Arc::clone(&plan));
        Ok(plan)
    }

    /// Hover for a position in `path`. Never cached.
    pub fn hover(
        &self,
        path: impl AsRef<Path>,
        line: u32,
        col: u32,
    ) -> ResolveResult<Option<HoverResult>> {
        let path = path.as_ref();
        if !is_stylesheet(path) {
            return Ok(None);
        }
        let text = self.read(path)?;
        let table = self.resolver().resolve_text(path, &text);
        Ok(hover(&text, &table, line, col))
    }

    fn resolver(&self) -> ColorResolver<OverlayLoader<'_, L>> {
        ColorResolver::new(OverlayLoader::new(&self.open, &self.base))
            .with_options(self.options.clone())
    }

    fn read(&self, path: &Path) -> ResolveResult<String> {
        OverlayLoader::new(&self.open, &self.base)
            .read_text(path)
            .map_err(|source| ResolveError::EntryUnreadable {
                path: path.to_path_buf(),
                source,
            })
    }
}
