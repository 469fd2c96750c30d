//! Repository access for git-sync.
//!
//! Two seams separate decision logic from the git executable:
//!
//! - [`RepoQueries`]: read-only introspection (refs, ancestry, config)
//! - [`RepoMutations`]: the handful of commands that change the repository
//!
//! [`GitCli`] implements both by shelling out to `git`. Tests substitute
//! in-memory implementations so branch classification can run without a
//! repository.

mod git_cli;
mod parse;

pub use git_cli::GitCli;
pub use parse::{RemoteBranchMap, parse_branch_remotes, strip_remote_prefix};

use crate::error::Result;

/// Read-only questions asked of the repository.
pub trait RepoQueries {
    /// Whether the working directory is inside a repository.
    fn is_vcs_root(&self) -> bool;

    /// Branch name that `refs/remotes/<remote>/HEAD` points to.
    fn resolve_default_branch(&self, remote: &str) -> Result<String>;

    /// Checked-out branch name, or an empty string when there is none.
    fn current_branch(&self) -> String;

    /// Short names of every ref under `refs/heads/`, in git's order.
    fn list_local_branches(&self) -> Result<Vec<String>>;

    /// Snapshot of every `branch.<name>.remote` entry.
    fn branch_remote_config(&self) -> Result<RemoteBranchMap>;

    /// Full symbolic name of the branch's configured upstream.
    fn resolve_upstream(&self, branch: &str) -> Result<String>;

    /// Whether a path under the git metadata directory exists on disk.
    fn path_exists(&self, segments: &[&str]) -> bool;

    /// Resolve both names to commit ids in a single call.
    fn resolve_pair(&self, a: &str, b: &str) -> Result<Vec<String>>;

    /// Whether `a` is reachable from `b` (or equal to it).
    fn is_ancestor(&self, a: &str, b: &str) -> bool;
}

/// Commands that change refs, the index, or the working tree.
pub trait RepoMutations {
    fn fetch(&self, remote: &str) -> Result<()>;

    /// `merge --ff-only` of `target` into the checked-out branch.
    fn fast_forward_merge(&self, target: &str) -> Result<()>;

    /// Point `full_ref` at `id` without touching the working tree.
    fn update_ref(&self, full_ref: &str, id: &str) -> Result<()>;

    fn delete_branch(&self, branch: &str) -> Result<()>;

    fn checkout(&self, branch: &str) -> Result<()>;
}
