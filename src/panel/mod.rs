//! Source tree panel state
//!
//! Owns the symbol tree for the active document and the per-document
//! expansion state, and maps row events from the host's tree widget to
//! state changes and navigation commands. The widget itself belongs to
//! the host; this is the model behind it.

mod expansion;

pub use expansion::ExpansionState;

use crate::commands::Cmd;
use crate::config::Config;
use crate::ctags::Tag;
use crate::messages::PanelMsg;
use crate::outline::{build_tree, BuildOptions, RowPath, SymbolTree};

/// What the host should expand after a tree load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandPlan {
    /// Re-expand exactly these saved paths
    Restore(Vec<RowPath>),
    /// No saved state for the document: expand every row
    All,
    /// No saved state and default expansion is off
    Collapsed,
}

/// Model behind the symbol tree side panel
#[derive(Debug)]
pub struct SourceTreePanel {
    show_line_numbers: bool,
    expand_rows: bool,
    sort_list: bool,
    enabled: bool,
    tree: Option<SymbolTree>,
    expansion: ExpansionState,
}

impl SourceTreePanel {
    pub fn new(config: &Config) -> Self {
        Self {
            show_line_numbers: config.show_line_numbers,
            expand_rows: config.expand_rows,
            sort_list: config.sort_list,
            enabled: true,
            tree: None,
            expansion: ExpansionState::new(),
        }
    }

    /// Apply changed settings. Recorded expansion state is reset so the
    /// next load starts from the configured default.
    pub fn apply_config(&mut self, config: &Config) {
        self.show_line_numbers = config.show_line_numbers;
        self.expand_rows = config.expand_rows;
        self.sort_list = config.sort_list;
        self.expansion.clear();
    }

    /// A panel without a working ctags is shown but inert
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Load a document's tags, replacing the current tree.
    ///
    /// Returns what the host should expand: the saved row set when the
    /// document was seen before, everything otherwise (unless default
    /// expansion is off). Saved paths that no longer resolve to a row are
    /// filtered out rather than reported.
    pub fn load(&mut self, tags: &[Tag], uri: &str) -> ExpandPlan {
        let options = BuildOptions {
            show_line_numbers: self.show_line_numbers,
            sort: self.sort_list,
        };
        let tree = build_tree(tags, uri, &options);
        tracing::debug!("Loaded {} root rows for {}", tree.rows.len(), uri);

        let plan = if self.expansion.is_known(uri) {
            let mut saved: Vec<RowPath> = self
                .expansion
                .saved(uri)
                .into_iter()
                .flatten()
                .filter(|path| tree.row_at(path).is_some())
                .cloned()
                .collect();
            saved.sort_by(|a, b| a.indexes().cmp(b.indexes()));
            ExpandPlan::Restore(saved)
        } else if self.expand_rows {
            ExpandPlan::All
        } else {
            ExpandPlan::Collapsed
        };

        self.tree = Some(tree);
        plan
    }

    /// Drop the current tree. Expansion state is retained so the document
    /// restores when it becomes active again.
    pub fn clear(&mut self) {
        self.tree = None;
    }

    /// Forget a closed document's expansion entry
    pub fn forget_document(&mut self, uri: &str) {
        self.expansion.forget(uri);
    }

    pub fn tree(&self) -> Option<&SymbolTree> {
        self.tree.as_ref()
    }

    /// Symbol names of the current tree, for the completion provider
    pub fn symbol_names(&self) -> Vec<String> {
        self.tree
            .as_ref()
            .map(|tree| tree.symbol_names())
            .unwrap_or_default()
    }

    /// Handle a row event from the host's tree widget.
    ///
    /// Activation of a row carrying both URI and line yields a jump
    /// command; kind groups and line-less symbols yield nothing.
    pub fn update(&mut self, msg: PanelMsg) -> Option<Cmd> {
        if !self.enabled {
            return None;
        }
        let tree = self.tree.as_ref()?;
        let uri = tree.uri.clone();

        match msg {
            PanelMsg::RowActivated(path) => {
                let (uri, line) = tree.row_at(&path)?.nav_target()?;
                Some(Cmd::JumpTo {
                    uri: uri.to_string(),
                    line,
                })
            }
            PanelMsg::RowExpanded(path) => {
                self.expansion.mark_expanded(&uri, path);
                None
            }
            PanelMsg::RowCollapsed(path) => {
                self.expansion.mark_collapsed(&uri, &path);
                None
            }
        }
    }
}
