//! ctags symbol extraction
//!
//! Adapter around the exuberant-ctags command-line tool. Runs ctags against
//! a single file and parses its tab-separated output into [`Tag`] records.
//! Used by the panel to populate the symbol tree and by the completion
//! provider as its name source.

mod parser;
mod runner;

pub use parser::parse_output;
pub use runner::{ctags_version, extract_file};

use serde::Serialize;

/// Symbol category reported by ctags via the `kind:` field.
///
/// The fixed variants cover the kinds the panel knows icons and labels for;
/// anything else is preserved verbatim in `Other` so unexpected languages
/// still produce a usable tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TagKind {
    Class,
    Struct,
    Enum,
    Interface,
    Function,
    Method,
    Member,
    Field,
    Variable,
    Constant,
    Macro,
    Namespace,
    Typedef,
    Other(String),
}

impl TagKind {
    /// Parse the long kind name as ctags spells it (`--fields=K` output).
    pub fn from_name(name: &str) -> Self {
        match name {
            "class" => TagKind::Class,
            "struct" => TagKind::Struct,
            "enum" => TagKind::Enum,
            "interface" => TagKind::Interface,
            "function" => TagKind::Function,
            "method" => TagKind::Method,
            "member" => TagKind::Member,
            "field" => TagKind::Field,
            "variable" => TagKind::Variable,
            "constant" => TagKind::Constant,
            "macro" => TagKind::Macro,
            "namespace" => TagKind::Namespace,
            "typedef" => TagKind::Typedef,
            other => TagKind::Other(other.to_string()),
        }
    }

    /// The kind name as ctags spells it
    pub fn name(&self) -> &str {
        match self {
            TagKind::Class => "class",
            TagKind::Struct => "struct",
            TagKind::Enum => "enum",
            TagKind::Interface => "interface",
            TagKind::Function => "function",
            TagKind::Method => "method",
            TagKind::Member => "member",
            TagKind::Field => "field",
            TagKind::Variable => "variable",
            TagKind::Constant => "constant",
            TagKind::Macro => "macro",
            TagKind::Namespace => "namespace",
            TagKind::Typedef => "typedef",
            TagKind::Other(name) => name,
        }
    }

    /// Display label for the kind's group row.
    ///
    /// Naive pluralization: "variable" becomes "Variables", "class" becomes
    /// "Classes", "entry" becomes "Entries". It works more often than not.
    pub fn group_label(&self) -> String {
        let name = self.name();
        let plural = if name.ends_with('s') {
            format!("{}es", name)
        } else if let Some(stem) = name.strip_suffix('y') {
            format!("{}ies", stem)
        } else {
            format!("{}s", name)
        };

        let mut chars = plural.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => plural,
        }
    }

    /// Icon key in the form `source-<kind>`
    pub fn icon_name(&self) -> String {
        format!("source-{}", self.name())
    }
}

/// One symbol extracted from a source file.
///
/// Immutable after parsing. `line` is 1-based as ctags reports it; `None`
/// means the symbol is not navigable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
    pub kind: TagKind,
    /// Enclosing class name, when ctags reports one (`class:` field).
    /// A dotted value (nested class syntax) is carried through untouched;
    /// the tree builder leaves such tags unattached.
    pub class: Option<String>,
    /// 1-based source line (`line:` field)
    pub line: Option<u32>,
    /// URI of the document the symbol came from, as known by the editor
    pub uri: String,
}
