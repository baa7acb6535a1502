//! Plugin facade and host integration
//!
//! The host editor drives the panel through this type: it calls
//! [`SymbolBrowserPlugin::activate`] once, forwards its document and row
//! events, and performs the side effects handed back. The editor itself is
//! only reached through the [`HostWindow`] trait, so the core stays free
//! of any toolkit types.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::commands::Cmd;
use crate::completion::CompletionProvider;
use crate::config::Config;
use crate::ctags;
use crate::messages::PanelMsg;
use crate::panel::{ExpandPlan, SourceTreePanel};

/// The active document as the host sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    /// Document identity (e.g. `file:///home/u/x.py`, `sftp://...`)
    pub uri: String,
    /// Local filesystem path, when the document is a local file
    pub local_path: Option<PathBuf>,
}

impl DocumentInfo {
    /// Last path segment of the URI, used to suffix temp snapshots so
    /// ctags still sees the file extension
    pub fn basename(&self) -> &str {
        self.uri.rsplit('/').next().unwrap_or(&self.uri)
    }
}

/// The slice of the host editor the plugin is allowed to touch
pub trait HostWindow {
    /// Currently active document, if any
    fn active_document(&self) -> Option<DocumentInfo>;

    /// Snapshot of a document's buffer contents. Used for non-local
    /// documents that ctags can't read from disk.
    fn document_text(&self, uri: &str) -> Option<String>;

    /// Move the editor to a location. `line` is 0-based.
    fn jump_to(&mut self, uri: &str, line: u32);
}

/// What the host should do to its tree widget after a plugin callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelRefresh {
    /// Tree replaced: re-render rows, then apply the expansion plan
    Loaded(ExpandPlan),
    /// Tree cleared: empty the widget
    Cleared,
}

/// Source Code Browser plugin core
///
/// Owns the panel model, the completion provider, and the configuration.
/// One instance per host window.
pub struct SymbolBrowserPlugin {
    config: Config,
    panel: SourceTreePanel,
    completion: CompletionProvider,
    ctags_version: Option<String>,
}

impl SymbolBrowserPlugin {
    pub fn new(config: Config) -> Self {
        let panel = SourceTreePanel::new(&config);
        Self {
            config,
            panel,
            completion: CompletionProvider::new(),
            ctags_version: None,
        }
    }

    /// Activate the plugin: probe ctags and load the active document.
    ///
    /// When the ctags executable can't be run, the panel is left in place
    /// but disabled; activation itself never fails.
    pub fn activate(&mut self, window: &dyn HostWindow) -> PanelRefresh {
        tracing::debug!("Activating plugin");
        self.ctags_version = ctags::ctags_version(&self.config.ctags_executable);

        match &self.ctags_version {
            Some(version) => {
                tracing::debug!("Found ctags: {}", version);
                self.panel.set_enabled(true);
                self.reload_active_document(window)
            }
            None => {
                tracing::warn!(
                    "Could not find ctags executable: {}",
                    self.config.ctags_executable
                );
                self.panel.set_enabled(false);
                PanelRefresh::Cleared
            }
        }
    }

    /// Deactivate the plugin, dropping the current tree and proposals
    pub fn deactivate(&mut self) {
        tracing::debug!("Deactivating plugin");
        self.panel.clear();
        self.completion.set_symbols(Vec::new());
    }

    /// The `--version` banner from activation, if the probe succeeded
    pub fn ctags_version(&self) -> Option<&str> {
        self.ctags_version.as_deref()
    }

    pub fn panel(&self) -> &SourceTreePanel {
        &self.panel
    }

    /// Completion provider backed by the last-loaded tree
    pub fn completion(&self) -> &CompletionProvider {
        &self.completion
    }

    /// Host callback: the active document changed
    pub fn on_active_document_changed(&mut self, window: &dyn HostWindow) -> PanelRefresh {
        self.reload_active_document(window)
    }

    /// Host callback: a document was closed.
    ///
    /// Its expansion entry is dropped; when nothing is left active the
    /// tree is cleared, otherwise the remaining active document reloads.
    pub fn on_document_closed(&mut self, window: &dyn HostWindow, uri: &str) -> PanelRefresh {
        self.panel.forget_document(uri);
        if window.active_document().is_none() {
            self.panel.clear();
            self.completion.set_symbols(Vec::new());
            return PanelRefresh::Cleared;
        }
        self.reload_active_document(window)
    }

    /// Host callback: settings changed. Expansion state resets and the
    /// active document reloads under the new settings.
    pub fn on_setting_changed(&mut self, window: &dyn HostWindow, config: Config) -> PanelRefresh {
        self.panel.apply_config(&config);
        let executable_changed = config.ctags_executable != self.config.ctags_executable;
        self.config = config;
        if executable_changed {
            return self.activate(window);
        }
        self.reload_active_document(window)
    }

    /// Forward a row event from the tree widget, performing any resulting
    /// navigation against the host. The 1-based ctags line becomes the
    /// host's 0-based addressing here.
    pub fn handle_panel_event(&mut self, window: &mut dyn HostWindow, msg: PanelMsg) {
        if let Some(Cmd::JumpTo { uri, line }) = self.panel.update(msg) {
            tracing::debug!("{}, line {}", uri, line);
            window.jump_to(&uri, line.saturating_sub(1));
        }
    }

    /// Reload symbols for the active document
    fn reload_active_document(&mut self, window: &dyn HostWindow) -> PanelRefresh {
        self.panel.clear();

        if !self.panel.is_enabled() {
            return PanelRefresh::Cleared;
        }

        let Some(document) = window.active_document() else {
            self.completion.set_symbols(Vec::new());
            return PanelRefresh::Cleared;
        };

        tracing::debug!("Loading {}...", document.uri);
        let tags = match self.extract_document(window, &document) {
            Ok(Some(tags)) => tags,
            Ok(None) => {
                self.completion.set_symbols(Vec::new());
                return PanelRefresh::Cleared;
            }
            Err(e) => {
                tracing::warn!("Could not extract symbols for {}: {:#}", document.uri, e);
                self.panel.set_enabled(false);
                self.completion.set_symbols(Vec::new());
                return PanelRefresh::Cleared;
            }
        };

        let plan = self.panel.load(&tags, &document.uri);
        self.completion.set_symbols(self.panel.symbol_names());
        PanelRefresh::Loaded(plan)
    }

    /// Run ctags for a document. Local files are parsed in place; other
    /// documents are snapshotted to a temp file that is deleted when the
    /// guard drops, whether extraction succeeded or not.
    ///
    /// `Ok(None)` means the document was skipped (remote loading off, or
    /// no buffer text available).
    fn extract_document(
        &self,
        window: &dyn HostWindow,
        document: &DocumentInfo,
    ) -> Result<Option<Vec<ctags::Tag>>> {
        if let Some(path) = &document.local_path {
            let tags = ctags::extract_file(&self.config.ctags_executable, path, &document.uri)?;
            return Ok(Some(tags));
        }

        if !self.config.load_remote_files {
            tracing::debug!("Remote file loading disabled, skipping {}", document.uri);
            return Ok(None);
        }

        let Some(text) = window.document_text(&document.uri) else {
            return Ok(None);
        };

        let snapshot = snapshot_to_temp(&text, document.basename())?;
        let tags =
            ctags::extract_file(&self.config.ctags_executable, snapshot.path(), &document.uri)?;
        Ok(Some(tags))
    }
}

/// Write buffer contents to a temp file named after the document so ctags
/// can detect the language from the extension.
fn snapshot_to_temp(text: &str, basename: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("tagtree-")
        .suffix(&format!(".{}", basename))
        .tempfile()
        .context("Failed to create snapshot temp file")?;
    file.write_all(text.as_bytes())
        .context("Failed to write snapshot temp file")?;
    Ok(file)
}
