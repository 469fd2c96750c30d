//! A pair of resolved commit ids compared against each other.

use crate::error::{Result, SyncError};
use crate::git::git_message;
use crate::repo::RepoQueries;

/// Tip of a local branch (`a`) and the tip it is compared with (`b`).
///
/// Both ids come from one `rev-parse` call so they describe the same
/// repository state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    pub a: String,
    pub b: String,
}

impl Range {
    /// Resolve `a` and `b` to commit ids.
    ///
    /// Fails with [`SyncError::UnresolvableRange`] when git rejects either
    /// name or does not print exactly two ids.
    pub fn new<Q: RepoQueries + ?Sized>(repo: &Q, a: &str, b: &str) -> Result<Self> {
        let ids = repo
            .resolve_pair(a, b)
            .map_err(|e| SyncError::UnresolvableRange {
                a: a.to_string(),
                b: b.to_string(),
                message: git_message(e),
            })?;

        match <[String; 2]>::try_from(ids) {
            Ok([a_id, b_id]) if !a_id.is_empty() && !b_id.is_empty() => Ok(Self { a: a_id, b: b_id }),
            _ => Err(SyncError::UnresolvableRange {
                a: a.to_string(),
                b: b.to_string(),
                message: format!("cannot parse range {}..{}", a, b),
            }),
        }
    }

    /// Both sides name the same commit. Hex case is ignored.
    pub fn is_identical(&self) -> bool {
        self.a.eq_ignore_ascii_case(&self.b)
    }

    /// `a` is reachable from `b`, so `b` can be reached by fast-forward.
    pub fn is_ancestor<Q: RepoQueries + ?Sized>(&self, repo: &Q) -> bool {
        repo.is_ancestor(&self.a, &self.b)
    }

    /// Seven-character abbreviation of `a`, for recovery hints.
    pub fn short_a(&self) -> &str {
        self.a.get(..7).unwrap_or(&self.a)
    }
}
