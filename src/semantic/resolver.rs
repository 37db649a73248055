//! Import-aware color definition resolver.
//!
//! Walks the `@import` graph depth-first from an entry document and folds
//! every `@define-color` it meets into one [`DefinitionTable`]:
//!
//! ```text
//! visit(doc):
//!   already visited?  → return
//!   definitions       → table[name] = value   (textual order)
//!   imports           → resolve path, append default extension,
//!                       skip if missing, else visit(target)
//! ```
//!
//! Files are visited in the order their imports appear, and an imported
//! file's own imports finish before the next sibling import is followed.
//! Since later writes win, that order is observable in the result.
//!
//! The resolver holds no state between calls. Every call builds its own
//! [`ResolutionContext`], so one resolver can be shared across threads and
//! overlapping calls never see each other's partial tables.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use super::error::{ResolveError, ResolveResult};
use super::table::DefinitionTable;
use crate::base::constants::{DEFAULT_EXTENSION, STYLESHEET_EXTENSIONS};
use crate::parser::{ImportStatement, parse_stylesheet};
use crate::project::DocumentLoader;
use crate::project::paths::{append_extension, has_extension, normalize_path};

/// Extension handling for import targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Appended to targets without a recognised extension.
    pub default_extension: String,
    /// Extensions that count as stylesheets.
    pub extensions: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            default_extension: DEFAULT_EXTENSION.to_string(),
            extensions: STYLESHEET_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_extension(mut self, extension: impl Into<String>) -> Self {
        self.default_extension = extension.into();
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Check if a path already carries a recognised extension. The default
    /// extension always counts.
    pub fn is_recognized(&self, path: &Path) -> bool {
        has_extension(path, self.extensions.as_slice())
            || has_extension(path, std::slice::from_ref(&self.default_extension))
    }
}

/// Output of one pass: the table plus the files visited, in visit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub table: DefinitionTable,
    pub visited: Vec<PathBuf>,
}

/// Builds [`DefinitionTable`]s through a [`DocumentLoader`].
#[derive(Debug, Clone)]
pub struct ColorResolver<L> {
    loader: L,
    options: ResolveOptions,
}

impl<L: DocumentLoader> ColorResolver<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            options: ResolveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Resolve every definition reachable from the document at `entry`.
    ///
    /// Fails only if the entry document itself cannot be read.
    pub fn resolve(&self, entry: impl AsRef<Path>) -> ResolveResult<DefinitionTable> {
        self.resolution(entry).map(|resolution| resolution.table)
    }

    /// Like [`ColorResolver::resolve`], for an entry whose text is already
    /// in hand (an open editor buffer, for example).
    pub fn resolve_text(&self, entry: impl AsRef<Path>, text: &str) -> DefinitionTable {
        self.resolution_for_text(entry, text).table
    }

    /// Resolve and also report which files were visited.
    pub fn resolution(&self, entry: impl AsRef<Path>) -> ResolveResult<Resolution> {
        let entry = entry.as_ref();
        let text = self.read_entry(entry)?;
        Ok(self.resolution_for_text(entry, &text))
    }

    /// Read an entry document through the loader.
    pub fn read_entry(&self, entry: impl AsRef<Path>) -> ResolveResult<String> {
        let entry = entry.as_ref();
        self.loader
            .read_text(entry)
            .map_err(|source| ResolveError::EntryUnreadable {
                path: entry.to_path_buf(),
                source,
            })
    }

    pub fn resolution_for_text(&self, entry: impl AsRef<Path>, text: &str) -> Resolution {
        let entry = entry.as_ref();
        let mut context = ResolutionContext::new(self);
        context.visit(entry, text);

        debug!(
            entry = %entry.display(),
            files = context.order.len(),
            definitions = context.table.len(),
            "Resolved color definitions"
        );
        context.finish()
    }

    /// Candidate file for `literal` imported from `importer`, with the
    /// default extension applied.
    pub fn import_target(&self, importer: &Path, literal: &str) -> PathBuf {
        let candidate = normalize_path(&self.loader.resolve_path(importer, literal));
        // `dir/` names the extension-only file inside that directory.
        if literal.ends_with('/') {
            return candidate.join(format!(".{}", self.options.default_extension));
        }
        if self.options.is_recognized(&candidate) {
            candidate
        } else {
            append_extension(candidate, &self.options.default_extension)
        }
    }
}

/// Per-call traversal state. Dropped when the call returns.
struct ResolutionContext<'r, L> {
    resolver: &'r ColorResolver<L>,
    table: DefinitionTable,
    visited: FxHashSet<PathBuf>,
    order: Vec<PathBuf>,
}

impl<'r, L: DocumentLoader> ResolutionContext<'r, L> {
    fn new(resolver: &'r ColorResolver<L>) -> Self {
        Self {
            resolver,
            table: DefinitionTable::new(),
            visited: FxHashSet::default(),
            order: Vec::new(),
        }
    }

    fn visit(&mut self, path: &Path, text: &str) {
        let identity = normalize_path(path);
        if !self.visited.insert(identity.clone()) {
            trace!(path = %identity.display(), "Already visited");
            return;
        }
        self.order.push(identity.clone());

        let items = parse_stylesheet(text);
        for definition in items.definitions {
            trace!(
                file = %identity.display(),
                name = %definition.name,
                value = %definition.value,
                "Color definition"
            );
            self.table.define(definition.name, definition.value);
        }

        for import in &items.imports {
            self.follow_import(&identity, import);
        }
    }

    fn follow_import(&mut self, importer: &Path, import: &ImportStatement) {
        let target = self.resolver.import_target(importer, &import.path);
        if self.visited.contains(&target) {
            trace!(path = %target.display(), "Already visited");
            return;
        }

        let loader = &self.resolver.loader;
        if !loader.exists(&target) {
            debug!(
                importer = %importer.display(),
                import = %import.path,
                target = %target.display(),
                "Imported file not found, skipping"
            );
            return;
        }

        match loader.read_text(&target) {
            Ok(text) => self.visit(&target, &text),
            Err(err) => warn!(
                importer = %importer.display(),
                target = %target.display(),
                error = %err,
                "Failed to read imported file, skipping"
            ),
        }
    }

    fn finish(self) -> Resolution {
        Resolution {
            table: self.table,
            visited: self.order,
        }
    }
}
