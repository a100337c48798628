//! Version-control error types.

use thiserror::Error;

/// Errors from git operations.
#[derive(Debug, Error)]
pub enum VcsError {
    /// The git binary could not be executed.
    #[error("failed to execute git {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A git command exited non-zero.
    #[error("git {command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
}
