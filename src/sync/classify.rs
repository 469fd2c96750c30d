//! Branch classification: decide what should happen to one local branch.
//!
//! Classification only reads from the repository. The decision is made in
//! full before the reconciler runs any mutating command.

use super::SyncContext;
use crate::error::Result;
use crate::range::Range;
use crate::repo::RepoQueries;
use std::fmt;
use tracing::debug;

/// What a local branch looks like relative to the remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBranch {
    /// Short name, e.g. `feature-a`.
    pub name: String,
    /// `refs/heads/<name>`.
    pub full_ref: String,
    /// Remote from `branch.<name>.remote`, if configured.
    pub tracked_remote: Option<String>,
    /// Live remote ref to compare against.
    pub remote_ref: Option<String>,
    /// The branch tracks the sync remote but its upstream no longer resolves.
    pub is_gone: bool,
}

impl LocalBranch {
    /// Find the comparison target for `name`.
    ///
    /// A branch configured for the sync remote compares against its upstream,
    /// and is gone when that upstream fails to resolve. Any other branch
    /// compares against `refs/remotes/<remote>/<name>` when that ref exists
    /// on disk.
    pub fn inspect<Q: RepoQueries + ?Sized>(repo: &Q, ctx: &SyncContext, name: &str) -> Self {
        let tracked_remote = ctx.remotes.remote_for(name).map(str::to_string);
        let mut remote_ref = None;
        let mut is_gone = false;

        if tracked_remote.as_deref() == Some(ctx.remote.as_str()) {
            match repo.resolve_upstream(name) {
                Ok(upstream) => remote_ref = Some(upstream.trim().to_string()),
                Err(err) => {
                    debug!(branch = name, error = %err, "upstream no longer resolves");
                    is_gone = true;
                }
            }
        } else {
            let candidate = format!("refs/remotes/{}/{}", ctx.remote, name);
            let segments: Vec<&str> = candidate.split('/').collect();
            if repo.path_exists(&segments) {
                remote_ref = Some(candidate);
            }
        }

        Self {
            name: name.to_string(),
            full_ref: format!("refs/heads/{}", name),
            tracked_remote,
            remote_ref,
            is_gone,
        }
    }
}

/// The disposition of a branch, without the data needed to act on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    UpToDate,
    FastForward,
    DivergedWarning,
    OrphanMerged,
    OrphanUnmerged,
    NoRemoteCounterpart,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Disposition::UpToDate => "up-to-date",
            Disposition::FastForward => "fast-forward",
            Disposition::DivergedWarning => "diverged",
            Disposition::OrphanMerged => "orphan-merged",
            Disposition::OrphanUnmerged => "orphan-unmerged",
            Disposition::NoRemoteCounterpart => "no-remote-counterpart",
        };
        f.write_str(name)
    }
}

/// A disposition together with the refs and ids the reconciler needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    UpToDate(Range),
    /// `target` is the remote ref; `range.b` is its resolved id.
    FastForward { target: String, range: Range },
    DivergedWarning(Range),
    /// `range.b` is the default branch tip.
    OrphanMerged(Range),
    OrphanUnmerged(Range),
    NoRemoteCounterpart,
}

impl Verdict {
    pub fn disposition(&self) -> Disposition {
        match self {
            Verdict::UpToDate(_) => Disposition::UpToDate,
            Verdict::FastForward { .. } => Disposition::FastForward,
            Verdict::DivergedWarning(_) => Disposition::DivergedWarning,
            Verdict::OrphanMerged(_) => Disposition::OrphanMerged,
            Verdict::OrphanUnmerged(_) => Disposition::OrphanUnmerged,
            Verdict::NoRemoteCounterpart => Disposition::NoRemoteCounterpart,
        }
    }
}

/// Result of classifying one branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub branch: LocalBranch,
    pub verdict: Verdict,
}

/// Classify a single local branch.
///
/// # Errors
///
/// [`crate::error::SyncError::UnresolvableRange`] when the branch or its
/// comparison target cannot be resolved to a commit.
pub fn classify<Q: RepoQueries + ?Sized>(
    repo: &Q,
    ctx: &SyncContext,
    name: &str,
) -> Result<Classification> {
    let branch = LocalBranch::inspect(repo, ctx, name);

    let verdict = if let Some(target) = &branch.remote_ref {
        let range = Range::new(repo, &branch.full_ref, target)?;
        if range.is_identical() {
            Verdict::UpToDate(range)
        } else if range.is_ancestor(repo) {
            Verdict::FastForward {
                target: target.clone(),
                range,
            }
        } else {
            Verdict::DivergedWarning(range)
        }
    } else if branch.is_gone {
        let range = Range::new(repo, &branch.full_ref, &ctx.default_ref())?;
        if range.is_ancestor(repo) {
            Verdict::OrphanMerged(range)
        } else {
            Verdict::OrphanUnmerged(range)
        }
    } else {
        Verdict::NoRemoteCounterpart
    };

    debug!(
        branch = name,
        tracked_remote = ?branch.tracked_remote,
        gone = branch.is_gone,
        disposition = %verdict.disposition(),
        "classified"
    );

    Ok(Classification { branch, verdict })
}
