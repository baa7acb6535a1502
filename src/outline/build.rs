//! Tree construction from flat ctags records
//!
//! Two passes over the tag list:
//!
//! 1. Tags with no enclosing class become leaves under their kind's group
//!    row at the root. Kind groups are created lazily, first symbol wins.
//! 2. Tags whose `class` field names a first-pass symbol (no dot in the
//!    value) are placed under a nested kind group beneath that symbol's
//!    leaf. Orphans (parent name not found at the root) are dropped.
//!
//! Tags with a dotted class path (nested classes) are left unattached.
//! Going at least one level deeper would handle the inline classes common
//! in Python projects; recursion would be better still.

use super::{RowData, SymbolTree, TreeRow};
use crate::ctags::{Tag, TagKind};

/// Knobs the panel config exposes for tree construction
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Render symbol rows as `"name [line]"` when the line is known
    pub show_line_numbers: bool,
    /// Sort sibling rows by display label, ascending, case-sensitive
    pub sort: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            show_line_numbers: true,
            sort: true,
        }
    }
}

/// Build the two-level symbol tree for one document.
pub fn build_tree(tags: &[Tag], uri: &str, options: &BuildOptions) -> SymbolTree {
    let mut roots: Vec<TreeRow> = Vec::new();

    // First pass: root-level symbols grouped by kind
    for tag in tags {
        if tag.class.is_some() {
            continue;
        }
        let group = find_or_create_group(&mut roots, &tag.kind, uri);
        group.children.push(symbol_row(tag, options));
    }

    // Second pass: class members nested under their parent's leaf
    for tag in tags {
        let Some(class) = &tag.class else {
            continue;
        };
        // Dotted class paths (nested classes) are not handled
        if class.contains('.') {
            continue;
        }

        let Some(parent_kind) = root_symbol_kind(tags, class) else {
            tracing::trace!("Dropping {}: parent class {} not in tree", tag.name, class);
            continue;
        };

        let Some(parent) = find_symbol_mut(&mut roots, &parent_kind, class) else {
            continue;
        };
        let group = find_or_create_group(&mut parent.children, &tag.kind, uri);
        group.children.push(symbol_row(tag, options));
    }

    if options.sort {
        sort_rows(&mut roots);
    }

    SymbolTree {
        uri: uri.to_string(),
        rows: roots,
    }
}

fn symbol_row(tag: &Tag, options: &BuildOptions) -> TreeRow {
    let display = match tag.line {
        Some(line) if options.show_line_numbers => format!("{} [{}]", tag.name, line),
        _ => tag.name.clone(),
    };
    TreeRow {
        data: RowData::Symbol {
            name: tag.name.clone(),
            kind: tag.kind.clone(),
            uri: tag.uri.clone(),
            line: tag.line,
            display,
        },
        children: Vec::new(),
    }
}

/// Find the kind group among `rows`, creating it on first use.
/// Lookup-before-create keeps a (kind, parent) pair unique.
fn find_or_create_group<'a>(
    rows: &'a mut Vec<TreeRow>,
    kind: &TagKind,
    uri: &str,
) -> &'a mut TreeRow {
    let position = rows.iter().position(|row| match &row.data {
        RowData::KindGroup { kind: k, .. } => k == kind,
        RowData::Symbol { .. } => false,
    });

    let index = match position {
        Some(index) => index,
        None => {
            rows.push(TreeRow {
                data: RowData::KindGroup {
                    kind: kind.clone(),
                    label: kind.group_label(),
                    uri: uri.to_string(),
                },
                children: Vec::new(),
            });
            rows.len() - 1
        }
    };
    &mut rows[index]
}

/// Kind of the first root-pass tag with the given name, if any.
/// Only classless tags count: a member can't parent another member.
fn root_symbol_kind(tags: &[Tag], name: &str) -> Option<TagKind> {
    tags.iter()
        .find(|tag| tag.class.is_none() && tag.name == name)
        .map(|tag| tag.kind.clone())
}

/// Locate the leaf for `name` under its kind group at the root.
fn find_symbol_mut<'a>(
    roots: &'a mut [TreeRow],
    kind: &TagKind,
    name: &str,
) -> Option<&'a mut TreeRow> {
    let group = roots.iter_mut().find(|row| match &row.data {
        RowData::KindGroup { kind: k, .. } => k == kind,
        RowData::Symbol { .. } => false,
    })?;
    group
        .children
        .iter_mut()
        .find(|row| row.symbol_name() == Some(name))
}

/// Rows order by the bare symbol name (group label for kind groups), so
/// line-number display never affects ordering.
fn sort_key(row: &TreeRow) -> &str {
    match &row.data {
        RowData::KindGroup { label, .. } => label,
        RowData::Symbol { name, .. } => name,
    }
}

fn sort_rows(rows: &mut [TreeRow]) {
    rows.sort_by(|a, b| sort_key(a).cmp(sort_key(b)));
    for row in rows {
        sort_rows(&mut row.children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::RowPath;

    fn tag(name: &str, kind: TagKind, class: Option<&str>, line: Option<u32>) -> Tag {
        Tag {
            name: name.to_string(),
            kind,
            class: class.map(|c| c.to_string()),
            line,
            uri: "file:///x.py".to_string(),
        }
    }

    #[test]
    fn test_root_symbols_group_by_kind() {
        let tags = vec![
            tag("foo", TagKind::Function, None, Some(1)),
            tag("bar", TagKind::Function, None, Some(5)),
            tag("X", TagKind::Class, None, Some(10)),
        ];
        let tree = build_tree(&tags, "file:///x.py", &BuildOptions::default());

        assert_eq!(tree.rows.len(), 2);
        let labels: Vec<&str> = tree.rows.iter().map(|r| r.display()).collect();
        assert_eq!(labels, vec!["Classes", "Functions"]);

        let functions = &tree.rows[1];
        assert_eq!(functions.children.len(), 2);
        assert_eq!(functions.children[0].symbol_name(), Some("bar"));
        assert_eq!(functions.children[1].symbol_name(), Some("foo"));
    }

    #[test]
    fn test_class_member_nests_under_parent_leaf() {
        let tags = vec![
            tag("Foo", TagKind::Class, None, None),
            tag("bar", TagKind::Method, Some("Foo"), Some(10)),
        ];
        let tree = build_tree(&tags, "file:///x.py", &BuildOptions::default());

        // Classes > Foo > Methods > bar
        let classes = &tree.rows[0];
        assert_eq!(classes.display(), "Classes");
        let foo = &classes.children[0];
        assert_eq!(foo.symbol_name(), Some("Foo"));
        let methods = &foo.children[0];
        assert_eq!(methods.display(), "Methods");
        let bar = &methods.children[0];
        assert_eq!(bar.symbol_name(), Some("bar"));
        assert_eq!(bar.nav_target(), Some(("file:///x.py", 10)));
    }

    #[test]
    fn test_orphan_member_is_dropped_without_error() {
        let tags = vec![
            tag("foo", TagKind::Function, None, Some(1)),
            tag("ghost", TagKind::Method, Some("Missing"), Some(2)),
        ];
        let tree = build_tree(&tags, "file:///x.py", &BuildOptions::default());

        assert_eq!(tree.symbol_names(), vec!["foo".to_string()]);
    }

    #[test]
    fn test_dotted_class_path_is_left_unattached() {
        let tags = vec![
            tag("Outer", TagKind::Class, None, Some(1)),
            tag("inner_method", TagKind::Method, Some("Outer.Inner"), Some(5)),
        ];
        let tree = build_tree(&tags, "file:///x.py", &BuildOptions::default());

        assert_eq!(tree.symbol_names(), vec!["Outer".to_string()]);
    }

    #[test]
    fn test_each_root_symbol_appears_exactly_once() {
        let tags = vec![
            tag("a", TagKind::Variable, None, Some(1)),
            tag("b", TagKind::Variable, None, Some(2)),
            tag("c", TagKind::Function, None, Some(3)),
        ];
        let tree = build_tree(&tags, "file:///x.py", &BuildOptions::default());

        let mut names = tree.symbol_names();
        names.sort();
        assert_eq!(names, vec!["a", "b", "c"]);

        // variables only under the Variables group
        let functions = tree
            .rows
            .iter()
            .find(|r| r.display() == "Functions")
            .unwrap();
        assert_eq!(functions.children.len(), 1);
    }

    #[test]
    fn test_rows_sorted_by_name_case_sensitive() {
        let tags = vec![
            tag("beta", TagKind::Function, None, None),
            tag("Alpha", TagKind::Function, None, None),
            tag("alpha", TagKind::Function, None, None),
        ];
        let options = BuildOptions {
            show_line_numbers: false,
            sort: true,
        };
        let tree = build_tree(&tags, "file:///x.py", &options);

        let names: Vec<_> = tree.rows[0]
            .children
            .iter()
            .map(|r| r.display().to_string())
            .collect();
        // ASCII order: uppercase before lowercase
        assert_eq!(names, vec!["Alpha", "alpha", "beta"]);
    }

    #[test]
    fn test_sort_ignores_line_number_suffix() {
        // duplicate names (e.g. C++ overloads): the [line] suffix must not
        // reorder them, so input order survives the stable sort
        let tags = vec![
            tag("foo", TagKind::Function, None, Some(2)),
            tag("foo", TagKind::Function, None, Some(10)),
        ];
        let tree = build_tree(&tags, "file:///x.cpp", &BuildOptions::default());

        let displays: Vec<_> = tree.rows[0]
            .children
            .iter()
            .map(|r| r.display().to_string())
            .collect();
        assert_eq!(displays, vec!["foo [2]", "foo [10]"]);
    }

    #[test]
    fn test_sort_disabled_keeps_input_order() {
        let tags = vec![
            tag("zeta", TagKind::Function, None, None),
            tag("alpha", TagKind::Function, None, None),
        ];
        let options = BuildOptions {
            show_line_numbers: false,
            sort: false,
        };
        let tree = build_tree(&tags, "file:///x.py", &options);

        let names: Vec<_> = tree.rows[0]
            .children
            .iter()
            .map(|r| r.display().to_string())
            .collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_line_number_display() {
        let tags = vec![tag("foo", TagKind::Function, None, Some(42))];
        let tree = build_tree(&tags, "file:///x.py", &BuildOptions::default());
        assert_eq!(tree.rows[0].children[0].display(), "foo [42]");

        let options = BuildOptions {
            show_line_numbers: false,
            sort: true,
        };
        let tree = build_tree(&tags, "file:///x.py", &options);
        assert_eq!(tree.rows[0].children[0].display(), "foo");
    }

    #[test]
    fn test_row_lookup_by_path() {
        let tags = vec![
            tag("Foo", TagKind::Class, None, Some(1)),
            tag("bar", TagKind::Method, Some("Foo"), Some(10)),
        ];
        let tree = build_tree(&tags, "file:///x.py", &BuildOptions::default());

        let bar = tree
            .row_at(&RowPath::new(vec![0, 0, 0, 0]))
            .expect("Classes > Foo > Methods > bar");
        assert_eq!(bar.symbol_name(), Some("bar"));
        assert!(tree.row_at(&RowPath::new(vec![5])).is_none());
    }

    #[test]
    fn test_expandable_paths_cover_groups_and_class_leaves() {
        let tags = vec![
            tag("Foo", TagKind::Class, None, Some(1)),
            tag("bar", TagKind::Method, Some("Foo"), Some(10)),
            tag("baz", TagKind::Function, None, Some(20)),
        ];
        let tree = build_tree(&tags, "file:///x.py", &BuildOptions::default());

        let paths: Vec<String> = tree
            .expandable_paths()
            .iter()
            .map(|p| p.to_string())
            .collect();
        // Classes, Classes>Foo, Classes>Foo>Methods, Functions
        assert_eq!(paths, vec!["0", "0:0", "0:0:0", "1"]);
    }
}
