//! Git command runner for git-sync.
//!
//! Provides a thin wrapper around the `git` executable with captured
//! stdout/stderr. All repository access goes through this module.

use crate::error::{Result, SyncError};
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }

    /// The message git printed, preferring stderr.
    fn message(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else {
            self.stderr.clone()
        }
    }
}

/// Run a git command in `cwd`.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On exit code 0
/// * `Err(SyncError::Git)` - On non-zero exit code or when git cannot be spawned,
///   carrying git's own message verbatim
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();
    let command = args.first().copied().unwrap_or_default().to_string();

    debug!(cwd = %cwd.display(), "git {}", args.join(" "));

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| SyncError::Git {
            command: command.clone(),
            code: None,
            message: format!("failed to execute git {}: {}", command, e),
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        Err(SyncError::Git {
            command,
            code: output.status.code(),
            message: git_output.message(),
        })
    }
}

/// Strip the runner's error down to git's message for re-tagging.
pub fn git_message(err: SyncError) -> String {
    match err {
        SyncError::Git { message, .. } => message,
        other => other.to_string(),
    }
}
