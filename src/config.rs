//! Panel configuration persistence
//!
//! Stores user preferences in `~/.config/tagtree/config.yaml`. Mirrors the
//! settings the panel exposes: line-number display, default expansion,
//! sorting, remote-file loading, and the ctags executable to invoke.

use serde::{Deserialize, Serialize};

/// Panel configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Append `[line]` to symbol rows that carry a line number
    #[serde(default = "default_true")]
    pub show_line_numbers: bool,

    /// Expand every row when a document with no saved state loads
    #[serde(default = "default_true")]
    pub expand_rows: bool,

    /// Sort rows by name, ascending
    #[serde(default = "default_true")]
    pub sort_list: bool,

    /// Snapshot non-local buffers to a temp file for ctags
    #[serde(default = "default_true")]
    pub load_remote_files: bool,

    /// ctags executable name or path
    #[serde(default = "default_ctags")]
    pub ctags_executable: String,
}

fn default_true() -> bool {
    true
}

fn default_ctags() -> String {
    "ctags".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_line_numbers: true,
            expand_rows: true,
            sort_list: true,
            load_remote_files: true,
            ctags_executable: default_ctags(),
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
