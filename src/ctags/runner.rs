//! Synchronous ctags subprocess invocation
//!
//! ctags runs to completion on the caller's thread. That can stall the UI
//! for the duration of the subprocess call on large files; moving this off
//! the event thread would change observable panel behavior and is left to
//! the host.

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use super::{parse_output, Tag};

/// Fixed extension fields requested from ctags. `K` gives long kind names,
/// `n` gives line numbers, `s` gives scope (class membership).
const FIELD_FLAGS: &str = "--fields=fiKlmnsSzt";

/// Probe the ctags executable, returning its `--version` banner.
///
/// `None` means the executable could not be run at all; the caller is
/// expected to disable the panel rather than fail.
pub fn ctags_version(executable: &str) -> Option<String> {
    let output = Command::new(executable)
        .arg("--version")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output();

    match output {
        Ok(output) => {
            let banner = String::from_utf8_lossy(&output.stdout);
            let first_line = banner.lines().next().unwrap_or("").trim().to_string();
            if first_line.is_empty() {
                None
            } else {
                Some(first_line)
            }
        }
        Err(e) => {
            tracing::warn!("Could not execute ctags (executable={}): {}", executable, e);
            None
        }
    }
}

/// Run ctags against one file and parse the resulting tags.
///
/// `path` is the local file handed to ctags; `uri` is the document identity
/// as the editor knows it. They differ for remote or unsaved buffers that
/// were snapshotted to a temp file.
///
/// A ctags run that exits non-zero or prints garbage yields an empty tag
/// list, not an error; only a failure to start the subprocess is an error.
pub fn extract_file(executable: &str, path: &Path, uri: &str) -> Result<Vec<Tag>> {
    let output = Command::new(executable)
        .args(["-nu", FIELD_FLAGS, "-f", "-"])
        .arg(path)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .with_context(|| format!("Failed to run ctags (executable={})", executable))?;

    if !output.status.success() {
        tracing::warn!(
            "ctags exited with {} for {}: {}",
            output.status,
            path.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return Ok(Vec::new());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_output(&stdout, uri))
}
