//! Reconcile local branches with the sync remote after a fetch.
//!
//! The run, in order:
//!
//! 1. Confirm the working directory is a repository
//! 2. Resolve the remote's default branch and the checked-out branch
//! 3. `fetch --prune` the remote
//! 4. For every local branch, [`classify`] it and [`reconcile`] the verdict
//!
//! Branches are handled one at a time in the order git lists them. The first
//! error aborts the whole run; per-branch warnings do not.

mod classify;
mod reconcile;
mod report;


use classify::classify;
use reconcile::{BranchOutcome, reconcile};
use report::Reporter;

use crate::config::SyncConfig;
use crate::error::{Result, SyncError};
use crate::repo::{GitCli, RemoteBranchMap, RepoMutations, RepoQueries};
use std::io::Write;
use tracing::{debug, info};

/// Read-only facts shared by every branch in one run.
#[derive(Debug, Clone)]
pub struct SyncContext {
    pub remote: String,
    pub default_branch: String,
    pub remotes: RemoteBranchMap,
}

impl SyncContext {
    /// `refs/remotes/<remote>/<default branch>`.
    pub fn default_ref(&self) -> String {
        format!("refs/remotes/{}/{}", self.remote, self.default_branch)
    }
}

/// Everything that was decided during a completed run.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub outcomes: Vec<BranchOutcome>,
}

/// Execute `git-sync` against the repository in the current directory.
pub fn cmd_sync(config: &SyncConfig) -> Result<SyncReport> {
    let cwd = std::env::current_dir().map_err(|_| SyncError::NotAGitRepo)?;
    let repo = GitCli::new(cwd);
    let mut reporter = Reporter::new(std::io::stdout().lock(), config.stdout_palette());
    run_sync(&repo, config, &mut reporter)
}

/// Fetch, then classify and reconcile every local branch.
pub fn run_sync<R, W>(repo: &R, config: &SyncConfig, reporter: &mut Reporter<W>) -> Result<SyncReport>
where
    R: RepoQueries + RepoMutations + ?Sized,
    W: Write,
{
    if !repo.is_vcs_root() {
        return Err(SyncError::NotAGitRepo);
    }

    let default_branch = repo.resolve_default_branch(&config.remote)?;
    let mut current_branch = repo.current_branch();
    info!(
        remote = %config.remote,
        default_branch = %default_branch,
        current_branch = %current_branch,
        "syncing"
    );

    repo.fetch(&config.remote)?;

    let branches = repo.list_local_branches()?;
    let ctx = SyncContext {
        remote: config.remote.clone(),
        default_branch,
        remotes: repo.branch_remote_config()?,
    };

    if ctx.remotes.is_empty() {
        debug!("no branch has a configured remote");
    } else {
        debug!(configured = ctx.remotes.len(), "read branch remotes");
    }

    let mut report = SyncReport::default();
    for name in &branches {
        let classification = classify(repo, &ctx, name)?;
        let outcome = reconcile(repo, &ctx, &mut current_branch, &classification, reporter)?;
        report.outcomes.push(outcome);
    }

    info!(branches = report.outcomes.len(), "sync complete");
    Ok(report)
}
