use anyhow::{bail, Context, Result};
use clap::Parser;

use tagtree::cli::CliArgs;
use tagtree::config::Config;
use tagtree::ctags;
use tagtree::outline::{build_tree, TreeRow};

fn main() -> Result<()> {
    tagtree::tracing::init();

    let args = CliArgs::parse();
    let config = Config::load();
    let executable = args
        .ctags
        .clone()
        .unwrap_or_else(|| config.ctags_executable.clone());

    let Some(version) = ctags::ctags_version(&executable) else {
        bail!("Could not find ctags executable: {}", executable);
    };
    tracing::debug!("Using {}", version);

    let path = args
        .file
        .canonicalize()
        .with_context(|| format!("No such file: {}", args.file.display()))?;
    let uri = format!("file://{}", path.display());

    // A ctags run with nothing to say yields an empty tree, not an error
    let tags = ctags::extract_file(&executable, &path, &uri)?;
    let tree = build_tree(&tags, &uri, &args.build_options());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
    } else {
        print_rows(&tree.rows, 0);
    }

    Ok(())
}

fn print_rows(rows: &[TreeRow], depth: usize) {
    for row in rows {
        println!("{}{}", "  ".repeat(depth), row.display());
        print_rows(&row.children, depth + 1);
    }
}
