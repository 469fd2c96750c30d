//! Error types for git-sync.
//!
//! Every variant carries the raw message produced by git so the fatal line
//! shown to the user is the tool's own text, while callers can still branch
//! on the kind of failure.

use crate::exit_codes;
use std::fmt;
use thiserror::Error;

/// Mutating git operations performed by the reconciler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOp {
    FastForwardMerge,
    UpdateRef,
    DeleteBranch,
    Checkout,
}

impl fmt::Display for MutationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MutationOp::FastForwardMerge => "merge",
            MutationOp::UpdateRef => "update-ref",
            MutationOp::DeleteBranch => "branch",
            MutationOp::Checkout => "checkout",
        };
        f.write_str(name)
    }
}

/// Main error type for git-sync operations.
#[derive(Error, Debug)]
#[allow(dead_code)]
pub enum SyncError {
    /// The working directory is not inside a git repository.
    #[error("not a git repository")]
    NotAGitRepo,

    /// `refs/remotes/<remote>/HEAD` does not resolve to a branch.
    #[error("{message}")]
    DefaultBranchUnresolvable { remote: String, message: String },

    /// Fetching from the remote failed.
    #[error("{message}")]
    FetchFailed { remote: String, message: String },

    /// Two refs could not be resolved to commit ids in one call.
    #[error("{message}")]
    UnresolvableRange {
        a: String,
        b: String,
        message: String,
    },

    /// The branch's configured upstream no longer resolves.
    #[error("{message}")]
    NoUpstream { branch: String, message: String },

    /// A mutating git command failed.
    #[error("{message}")]
    MutationFailed { op: MutationOp, message: String },

    /// Any other git command failed.
    #[error("{message}")]
    Git {
        command: String,
        code: Option<i32>,
        message: String,
    },
}

impl SyncError {
    /// Returns the process exit code for this error.
    ///
    /// Every error aborts the run, so all kinds share the fatal code.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FATAL
    }

    /// Text shown after `fatal: `, without a duplicated prefix from git.
    pub fn fatal_message(&self) -> String {
        let text = self.to_string();
        let text = text.trim();
        text.strip_prefix("fatal: ").unwrap_or(text).to_string()
    }
}

/// Result type alias for git-sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_errors_are_fatal() {
        let errors = [
            SyncError::NotAGitRepo,
            SyncError::FetchFailed {
                remote: "origin".to_string(),
                message: "could not read from remote".to_string(),
            },
            SyncError::MutationFailed {
                op: MutationOp::Checkout,
                message: "error: pathspec".to_string(),
            },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), exit_codes::FATAL);
        }
    }

    #[test]
    fn fatal_message_strips_git_prefix() {
        let err = SyncError::FetchFailed {
            remote: "origin".to_string(),
            message: "fatal: 'origin' does not appear to be a git repository\n".to_string(),
        };
        assert_eq!(
            err.fatal_message(),
            "'origin' does not appear to be a git repository"
        );
    }

    #[test]
    fn fatal_message_strips_only_one_prefix() {
        let err = SyncError::Git {
            command: "config".to_string(),
            code: Some(128),
            message: "fatal: fatal: twice".to_string(),
        };
        assert_eq!(err.fatal_message(), "fatal: twice");
    }

    #[test]
    fn not_a_git_repo_message() {
        assert_eq!(SyncError::NotAGitRepo.fatal_message(), "not a git repository");
    }

    #[test]
    fn mutation_op_names_match_git_subcommands() {
        assert_eq!(MutationOp::FastForwardMerge.to_string(), "merge");
        assert_eq!(MutationOp::UpdateRef.to_string(), "update-ref");
        assert_eq!(MutationOp::DeleteBranch.to_string(), "branch");
        assert_eq!(MutationOp::Checkout.to_string(), "checkout");
    }
}
