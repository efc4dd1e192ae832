//! Clap argument types for the lank CLI.

use clap::Parser;
use std::path::PathBuf;

/// Manage local module checkouts from a per-project rc file.
#[derive(Parser, Debug)]
#[command(name = "lank", version)]
pub struct Cli {
    /// Directory to resolve the rc file from (default: current directory).
    #[arg(long, global = true)]
    pub path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available actions. Each receives the canonical configuration.
#[derive(clap::Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// List configured modules and their tags (the default action).
    List,

    /// List distinct tags and the modules carrying each.
    Tags,
}

impl Cli {
    /// The action to run, defaulting to `list` when none was given.
    pub fn action(&self) -> Command {
        self.command.unwrap_or(Command::List)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_list_action() {
        let cli = Cli::try_parse_from(["lank"]).unwrap();
        assert_eq!(cli.action(), Command::List);
        assert!(cli.path.is_none());
    }

    #[test]
    fn parses_tags_action() {
        let cli = Cli::try_parse_from(["lank", "tags"]).unwrap();
        assert_eq!(cli.action(), Command::Tags);
    }

    #[test]
    fn parses_path_flag() {
        let cli = Cli::try_parse_from(["lank", "list", "--path", "/work"]).unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("/work")));
    }

    #[test]
    fn path_flag_is_global() {
        let cli = Cli::try_parse_from(["lank", "--path", "/work"]).unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("/work")));
        assert_eq!(cli.action(), Command::List);
    }

    #[test]
    fn rejects_unknown_action() {
        assert!(Cli::try_parse_from(["lank", "frobnicate"]).is_err());
    }
}
