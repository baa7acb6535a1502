//! Symbol outline tree
//!
//! Row model for the panel's tree view: a two-level hierarchy of kind
//! groups ("Classes", "Functions") with symbol leaves, and nested kind
//! groups under class symbols for their members. Built from flat ctags
//! records by [`build::build_tree`].

mod build;

pub use build::{build_tree, BuildOptions};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::ctags::TagKind;

/// Position of a row in the tree as child indexes from the root,
/// rendered `"0:2:1"` style like the toolkit's tree-path strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RowPath(Vec<usize>);

impl RowPath {
    pub fn new(indexes: Vec<usize>) -> Self {
        RowPath(indexes)
    }

    pub fn indexes(&self) -> &[usize] {
        &self.0
    }

    /// Path of a child row under this one
    pub fn child(&self, index: usize) -> RowPath {
        let mut indexes = self.0.clone();
        indexes.push(index);
        RowPath(indexes)
    }
}

impl fmt::Display for RowPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for index in &self.0 {
            if !first {
                write!(f, ":")?;
            }
            write!(f, "{}", index)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for RowPath {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let indexes = s
            .split(':')
            .map(|part| part.parse::<usize>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RowPath(indexes))
    }
}

/// What a tree row holds: a kind group header or a symbol leaf
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RowData {
    KindGroup {
        kind: TagKind,
        label: String,
        uri: String,
    },
    Symbol {
        name: String,
        kind: TagKind,
        uri: String,
        /// 1-based source line; `None` means the row is not navigable
        line: Option<u32>,
        /// Rendered label, `"name [line]"` when line display is on
        display: String,
    },
}

/// One row of the symbol tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeRow {
    pub data: RowData,
    pub children: Vec<TreeRow>,
}

impl TreeRow {
    pub fn is_group(&self) -> bool {
        matches!(self.data, RowData::KindGroup { .. })
    }

    /// The string the row displays
    pub fn display(&self) -> &str {
        match &self.data {
            RowData::KindGroup { label, .. } => label,
            RowData::Symbol { display, .. } => display,
        }
    }

    /// Bare symbol name, for parent lookup during tree building
    pub fn symbol_name(&self) -> Option<&str> {
        match &self.data {
            RowData::Symbol { name, .. } => Some(name),
            RowData::KindGroup { .. } => None,
        }
    }

    /// Navigation target, only for symbol rows that carry a line.
    /// Kind groups and line-less symbols are never navigable.
    pub fn nav_target(&self) -> Option<(&str, u32)> {
        match &self.data {
            RowData::Symbol {
                uri,
                line: Some(line),
                ..
            } => Some((uri, *line)),
            _ => None,
        }
    }

    /// Icon key for the row
    pub fn icon_name(&self) -> String {
        match &self.data {
            RowData::KindGroup { kind, .. } => kind.icon_name(),
            RowData::Symbol { kind, .. } => kind.icon_name(),
        }
    }
}

/// Complete symbol tree for one document
#[derive(Debug, Clone, Default, Serialize)]
pub struct SymbolTree {
    pub uri: String,
    pub rows: Vec<TreeRow>,
}

impl SymbolTree {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a row by its tree path
    pub fn row_at(&self, path: &RowPath) -> Option<&TreeRow> {
        let mut indexes = path.indexes().iter();
        let first = *indexes.next()?;
        let mut row = self.rows.get(first)?;
        for &index in indexes {
            row = row.children.get(index)?;
        }
        Some(row)
    }

    /// Paths of every row that has children, in depth-first order.
    /// This is the "expand everything" set for documents with no saved
    /// expansion state.
    pub fn expandable_paths(&self) -> Vec<RowPath> {
        let mut paths = Vec::new();
        for (index, row) in self.rows.iter().enumerate() {
            collect_expandable(row, RowPath::new(vec![index]), &mut paths);
        }
        paths
    }

    /// Names of every symbol in the tree, in row order.
    /// Snapshot source for the completion provider.
    pub fn symbol_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for row in &self.rows {
            collect_names(row, &mut names);
        }
        names
    }
}

fn collect_expandable(row: &TreeRow, path: RowPath, paths: &mut Vec<RowPath>) {
    if row.children.is_empty() {
        return;
    }
    paths.push(path.clone());
    for (index, child) in row.children.iter().enumerate() {
        collect_expandable(child, path.child(index), paths);
    }
}

fn collect_names(row: &TreeRow, names: &mut Vec<String>) {
    if let RowData::Symbol { name, .. } = &row.data {
        names.push(name.clone());
    }
    for child in &row.children {
        collect_names(child, names);
    }
}
