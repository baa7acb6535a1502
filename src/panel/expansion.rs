//! Per-document expansion state
//!
//! Remembers which rows are expanded for every document the panel has
//! shown, so switching between documents restores each one's expansion
//! instead of resetting it. State lives for the host session only.

use std::collections::{HashMap, HashSet};

use crate::outline::RowPath;

/// Expanded row paths, keyed by document URI
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    rows: HashMap<String, HashSet<RowPath>>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a row as expanded, creating the document's set on first use
    pub fn mark_expanded(&mut self, uri: &str, path: RowPath) {
        self.rows.entry(uri.to_string()).or_default().insert(path);
    }

    /// Record a row as collapsed (no-op if it wasn't marked expanded)
    pub fn mark_collapsed(&mut self, uri: &str, path: &RowPath) {
        if let Some(set) = self.rows.get_mut(uri) {
            set.remove(path);
        }
    }

    /// Whether any state was ever recorded for this document.
    /// Decides between "restore saved expansion" and "expand everything"
    /// when its tree is (re)loaded.
    pub fn is_known(&self, uri: &str) -> bool {
        self.rows.contains_key(uri)
    }

    /// Saved expanded paths for a document
    pub fn saved(&self, uri: &str) -> Option<&HashSet<RowPath>> {
        self.rows.get(uri)
    }

    /// Drop a document's entry entirely (document closed)
    pub fn forget(&mut self, uri: &str) {
        self.rows.remove(uri);
    }

    /// Wipe all recorded state (settings changed)
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
