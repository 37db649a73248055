//! Flat name → raw value mapping produced by one resolution pass.

use indexmap::IndexMap;
use smol_str::SmolStr;

/// Resolved color definitions. Later writes overwrite earlier ones; a
/// redefined name keeps the position of its first definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionTable {
    entries: IndexMap<SmolStr, String>,
}

impl DefinitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, returning the value it replaced.
    pub fn define(&mut self, name: impl Into<SmolStr>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<N: Into<SmolStr>, V: Into<String>> FromIterator<(N, V)> for DefinitionTable {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, value) in iter {
            table.define(name, value);
        }
        table
    }
}
