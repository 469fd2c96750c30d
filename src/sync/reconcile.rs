//! Apply the single mutating action that matches a branch's verdict.

use super::SyncContext;
use super::classify::{Classification, Disposition, Verdict};
use super::report::Reporter;
use crate::error::Result;
use crate::repo::RepoMutations;
use std::io::Write;
use tracing::debug;

/// What happened to one branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchOutcome {
    pub branch: String,
    pub disposition: Disposition,
    /// Abbreviated tip before the branch was moved or deleted.
    pub previous_tip: Option<String>,
}

/// Run the action for `classification`.
///
/// `current_branch` is updated when the checked-out branch is deleted and
/// the default branch is checked out in its place.
///
/// A checked-out branch is fast-forwarded with `merge --ff-only` so the index
/// and working tree follow the ref; other branches have their ref moved
/// directly.
///
/// # Errors
///
/// [`crate::error::SyncError::MutationFailed`] from the first git command
/// that fails. Nothing further is attempted for the branch.
pub fn reconcile<R, W>(
    repo: &R,
    ctx: &SyncContext,
    current_branch: &mut String,
    classification: &Classification,
    reporter: &mut Reporter<W>,
) -> Result<BranchOutcome>
where
    R: RepoMutations + ?Sized,
    W: Write,
{
    let branch = &classification.branch;
    let is_current = *current_branch == branch.name;
    let mut previous_tip = None;

    match &classification.verdict {
        Verdict::UpToDate(_) | Verdict::NoRemoteCounterpart => {}
        Verdict::DivergedWarning(_) => reporter.unpushed(&branch.name),
        Verdict::OrphanUnmerged(_) => {
            reporter.unmerged(&branch.name, &ctx.remote, &ctx.default_branch)
        }
        Verdict::FastForward { target, range } => {
            if is_current {
                repo.fast_forward_merge(target)?;
            } else {
                repo.update_ref(&branch.full_ref, &range.b)?;
            }
            reporter.updated(&branch.name, range.short_a());
            previous_tip = Some(range.short_a().to_string());
        }
        Verdict::OrphanMerged(range) => {
            if is_current {
                repo.checkout(&ctx.default_branch)?;
                debug!(from = %branch.name, to = %ctx.default_branch, "switched branch before delete");
                *current_branch = ctx.default_branch.clone();
            }
            repo.delete_branch(&branch.name)?;
            reporter.deleted(&branch.name, range.short_a());
            previous_tip = Some(range.short_a().to_string());
        }
    }

    Ok(BranchOutcome {
        branch: branch.name.clone(),
        disposition: classification.verdict.disposition(),
        previous_tip,
    })
}
