//! Icon resolution for tree rows
//!
//! Maps icon keys (`source-<kind>`, plus the panel's own icon) to image
//! files under an icon directory. Unknown kinds resolve to the
//! `missing-image` placeholder instead of failing, so a language with an
//! exotic kind set still renders. Lookups are cached per key.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File name of the placeholder used for icons that have no image
pub const MISSING_ICON: &str = "missing-image.png";

/// Cached icon-name to file-path resolution
#[derive(Debug)]
pub struct IconSet {
    dir: PathBuf,
    cache: HashMap<String, PathBuf>,
}

impl IconSet {
    /// Icon set rooted at `dir` (e.g. `~/.config/tagtree/icons/16x16`)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: HashMap::new(),
        }
    }

    /// Path of the placeholder image
    pub fn missing(&self) -> PathBuf {
        self.dir.join(MISSING_ICON)
    }

    /// Resolve an icon key to an image path.
    ///
    /// Returns the placeholder path when the key's file is absent; the
    /// host decides what to render if even the placeholder is missing.
    pub fn resolve(&mut self, name: &str) -> &Path {
        if !self.cache.contains_key(name) {
            let candidate = self.dir.join(format!("{}.png", name));
            let resolved = if candidate.is_file() {
                candidate
            } else {
                tracing::warn!(
                    "No icon for '{}' at {}, using placeholder",
                    name,
                    candidate.display()
                );
                self.missing()
            };
            self.cache.insert(name.to_string(), resolved);
        }
        &self.cache[name]
    }
}
