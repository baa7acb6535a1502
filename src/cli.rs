//! Command-line argument parsing for the outline dump tool
//!
//! Supports:
//! - Dumping the symbol outline of a single file
//! - Overriding the ctags executable
//! - JSON output for piping into other tools

use clap::Parser;
use std::path::PathBuf;

use crate::outline::BuildOptions;

/// Print the ctags symbol outline of a file
#[derive(Parser, Debug)]
#[command(name = "tagtree", version, about = "Print the symbol outline of a file")]
pub struct CliArgs {
    /// File to outline
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// ctags executable to use (defaults to the configured one)
    #[arg(long, value_name = "PATH")]
    pub ctags: Option<String>,

    /// Keep ctags output order instead of sorting by name
    #[arg(long)]
    pub no_sort: bool,

    /// Hide line numbers in symbol rows
    #[arg(long)]
    pub no_line_numbers: bool,

    /// Emit the tree as JSON instead of indented text
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Tree-building options implied by the flags
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            show_line_numbers: !self.no_line_numbers,
            sort: !self.no_sort,
        }
    }
}
