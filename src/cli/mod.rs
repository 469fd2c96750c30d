//! CLI argument parsing for git-sync.
//!
//! The command takes no arguments; clap still provides `--help` and
//! `--version` and rejects anything else.

use clap::Parser;

/// Sync local branches with the `origin` remote.
///
/// Fetches `origin` with pruning, then for each local branch:
/// - fast-forwards it when it is behind its remote counterpart
/// - deletes it when its upstream is gone and it is merged into the default branch
/// - warns when it has unpushed or unmerged commits
#[derive(Parser, Debug)]
#[command(name = "git-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
