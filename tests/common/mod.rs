//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tagtree::ctags::{Tag, TagKind};
use tagtree::plugin::{DocumentInfo, HostWindow};

/// ctags output for a small Python file: class Foo with method bar,
/// plus free functions and a module variable.
pub const SAMPLE_CTAGS_OUTPUT: &str = "\
!_TAG_FILE_FORMAT\t2\t/extended format; --format=1 will not append ;\" to lines/\n\
Foo\tx.py\t1;\"\tkind:class\tline:1\tlanguage:Python\n\
bar\tx.py\t10;\"\tkind:member\tline:10\tlanguage:Python\tclass:Foo\n\
baz\tx.py\t20;\"\tkind:function\tline:20\tlanguage:Python\n\
qux\tx.py\t30;\"\tkind:function\tline:30\tlanguage:Python\n\
VERSION\tx.py\t40;\"\tkind:variable\tline:40\tlanguage:Python\n";

pub fn tag(name: &str, kind: TagKind, class: Option<&str>, line: Option<u32>) -> Tag {
    Tag {
        name: name.to_string(),
        kind,
        class: class.map(|c| c.to_string()),
        line,
        uri: "file:///x.py".to_string(),
    }
}

/// Host double that records jumps and serves a fixed document
pub struct MockHost {
    pub document: Option<DocumentInfo>,
    pub text: Option<String>,
    pub jumps: Vec<(String, u32)>,
}

impl MockHost {
    pub fn new(document: Option<DocumentInfo>) -> Self {
        Self {
            document,
            text: None,
            jumps: Vec::new(),
        }
    }

    pub fn with_text(document: DocumentInfo, text: &str) -> Self {
        Self {
            document: Some(document),
            text: Some(text.to_string()),
            jumps: Vec::new(),
        }
    }
}

impl HostWindow for MockHost {
    fn active_document(&self) -> Option<DocumentInfo> {
        self.document.clone()
    }

    fn document_text(&self, _uri: &str) -> Option<String> {
        self.text.clone()
    }

    fn jump_to(&mut self, uri: &str, line: u32) {
        self.jumps.push((uri.to_string(), line));
    }
}

/// Write a fake ctags shell script into `dir` that prints `output` for any
/// extraction run and a plausible banner for `--version`. The path of each
/// extracted file is appended to `invocations.log` next to the script.
#[cfg(unix)]
pub fn fake_ctags(dir: &Path, output: &str) -> PathBuf {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let log = dir.join("invocations.log");
    let script = dir.join("fake-ctags");
    let mut body = String::from("#!/bin/sh\n");
    body.push_str("if [ \"$1\" = \"--version\" ]; then\n");
    body.push_str("  echo \"Exuberant Ctags 5.9~svn20110310, fake\"\n");
    body.push_str("  exit 0\n");
    body.push_str("fi\n");
    body.push_str(&format!("echo \"$5\" >> \"{}\"\n", log.display()));
    body.push_str("cat <<'CTAGS_EOF'\n");
    body.push_str(output);
    body.push_str("CTAGS_EOF\n");
    fs::write(&script, body).unwrap();

    let mut permissions = fs::metadata(&script).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&script, permissions).unwrap();
    script
}

/// Paths the fake ctags script was invoked against, in order
#[cfg(unix)]
pub fn recorded_invocations(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_to_string(dir.join("invocations.log"))
        .unwrap_or_default()
        .lines()
        .map(PathBuf::from)
        .collect()
}
