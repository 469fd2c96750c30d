//! Exit code constants for git-sync.
//!
//! - 0: Success (warnings included)
//! - 1: Fatal error (run aborted)

/// Successful execution, including runs that printed per-branch warnings.
pub const SUCCESS: i32 = 0;

/// Fatal error: the run was aborted and a `fatal:` line was printed.
pub const FATAL: i32 = 1;
