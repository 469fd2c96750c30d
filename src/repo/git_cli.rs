//! [`RepoQueries`] and [`RepoMutations`] backed by the `git` executable.

use super::parse::{RemoteBranchMap, parse_branch_remotes, strip_remote_prefix};
use super::{RepoMutations, RepoQueries};
use crate::error::{MutationOp, Result, SyncError};
use crate::git::{git_message, run_git};
use std::path::{Path, PathBuf};

/// Repository handle that runs every command in `workdir`.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new<P: AsRef<Path>>(workdir: P) -> Self {
        Self {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    fn mutate(&self, op: MutationOp, args: &[&str]) -> Result<()> {
        run_git(&self.workdir, args)
            .map(|_| ())
            .map_err(|e| SyncError::MutationFailed {
                op,
                message: git_message(e),
            })
    }
}

impl RepoQueries for GitCli {
    fn is_vcs_root(&self) -> bool {
        run_git(&self.workdir, &["rev-parse", "--git-dir"]).is_ok()
    }

    fn resolve_default_branch(&self, remote: &str) -> Result<String> {
        let head = format!("refs/remotes/{}/HEAD", remote);
        let output = run_git(&self.workdir, &["symbolic-ref", &head]).map_err(|e| {
            SyncError::DefaultBranchUnresolvable {
                remote: remote.to_string(),
                message: git_message(e),
            }
        })?;
        Ok(strip_remote_prefix(&output.stdout, remote))
    }

    fn current_branch(&self) -> String {
        match run_git(&self.workdir, &["rev-parse", "--abbrev-ref", "HEAD"]) {
            // Detached HEAD reports the literal "HEAD".
            Ok(output) if !output.is_empty() && output.stdout != "HEAD" => output.stdout,
            _ => String::new(),
        }
    }

    fn list_local_branches(&self) -> Result<Vec<String>> {
        let output = run_git(
            &self.workdir,
            &["for-each-ref", "--format=%(refname:short)", "refs/heads/"],
        )?;
        Ok(output.lines().into_iter().map(str::to_string).collect())
    }

    fn branch_remote_config(&self) -> Result<RemoteBranchMap> {
        match run_git(&self.workdir, &["config", "--get-regexp", "branch.*.remote"]) {
            Ok(output) => Ok(parse_branch_remotes(output.lines())),
            // Exit status 1 with no output means "no matching keys".
            Err(SyncError::Git {
                code: Some(1),
                message,
                ..
            }) if message.is_empty() => Ok(RemoteBranchMap::default()),
            Err(e) => Err(e),
        }
    }

    fn resolve_upstream(&self, branch: &str) -> Result<String> {
        let upstream = format!("{}@{{upstream}}", branch);
        let output = run_git(
            &self.workdir,
            &["rev-parse", "--symbolic-full-name", &upstream],
        )
        .map_err(|e| SyncError::NoUpstream {
            branch: branch.to_string(),
            message: git_message(e),
        })?;
        Ok(output.stdout)
    }

    fn path_exists(&self, segments: &[&str]) -> bool {
        let relative = segments.join("/");
        let Ok(output) = run_git(&self.workdir, &["rev-parse", "--quiet", "--git-path", &relative])
        else {
            return false;
        };

        match output.lines().as_slice() {
            [path] => self.workdir.join(path).exists(),
            _ => false,
        }
    }

    fn resolve_pair(&self, a: &str, b: &str) -> Result<Vec<String>> {
        let output = run_git(&self.workdir, &["rev-parse", "--quiet", a, b])?;
        Ok(output.lines().into_iter().map(str::to_string).collect())
    }

    fn is_ancestor(&self, a: &str, b: &str) -> bool {
        run_git(&self.workdir, &["merge-base", "--is-ancestor", a, b]).is_ok()
    }
}

impl RepoMutations for GitCli {
    fn fetch(&self, remote: &str) -> Result<()> {
        run_git(
            &self.workdir,
            &["fetch", "--prune", "--quiet", "--progress", remote],
        )
        .map(|_| ())
        .map_err(|e| SyncError::FetchFailed {
            remote: remote.to_string(),
            message: git_message(e),
        })
    }

    fn fast_forward_merge(&self, target: &str) -> Result<()> {
        self.mutate(
            MutationOp::FastForwardMerge,
            &["merge", "--ff-only", "--quiet", target],
        )
    }

    fn update_ref(&self, full_ref: &str, id: &str) -> Result<()> {
        self.mutate(MutationOp::UpdateRef, &["update-ref", full_ref, id])
    }

    fn delete_branch(&self, branch: &str) -> Result<()> {
        self.mutate(MutationOp::DeleteBranch, &["branch", "-D", branch])
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.mutate(MutationOp::Checkout, &["checkout", "--quiet", branch])
    }
}
