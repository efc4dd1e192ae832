//! lank — manage local module checkouts from a per-project rc file.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use lank::config;
use lank::output;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use indexmap::IndexMap;

use cli::args::{Cli, Command};
use config::ModuleEntry;
use output::{Formatter, LineColor};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let cfg = match cli.path {
        Some(ref path) => {
            let dir = std::fs::canonicalize(path)
                .with_context(|| format!("--path directory not found: {}", path.display()))?;
            config::load_config(&dir).await
        }
        None => config::load_config_cwd().await,
    }
    .context("failed to load configuration")?;

    match cli.action() {
        Command::List => run_list(&cfg),
        Command::Tags => run_tags(&cfg),
    }

    Ok(())
}

/// Print one line per configured module.
fn run_list(cfg: &[ModuleEntry]) {
    let fmt = Formatter::new(cfg);

    if cfg.is_empty() {
        println!(
            "{}",
            fmt.line(LineColor::Yellow, "main", "no modules configured")
        );
        return;
    }

    for entry in cfg {
        let msg = if entry.tags.is_empty() {
            "(no tags)".to_string()
        } else {
            entry.tags.join(", ")
        };
        println!("{}", fmt.line(LineColor::Cyan, &entry.module, &msg));
    }
}

/// Print each distinct tag with the modules carrying it.
fn run_tags(cfg: &[ModuleEntry]) {
    let fmt = Formatter::new(cfg);

    let mut by_tag: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for entry in cfg {
        for tag in &entry.tags {
            by_tag
                .entry(tag.as_str())
                .or_default()
                .push(entry.module.as_str());
        }
    }

    if by_tag.is_empty() {
        println!(
            "{}",
            fmt.line(LineColor::Yellow, "main", "no tags configured")
        );
        return;
    }

    for (tag, modules) in &by_tag {
        println!("{}", fmt.line(LineColor::Green, tag, &modules.join(", ")));
    }
}
