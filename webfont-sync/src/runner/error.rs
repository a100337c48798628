//! Run-level error types.

use thiserror::Error;

use crate::release::ReleaseError;

/// Errors that abort an entire run.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Latest-release fetch or HTTP session construction errors.
    #[error(transparent)]
    Release(#[from] ReleaseError),

    /// The run-scoped scratch directory could not be created.
    #[error("failed to prepare scratch directory: {0}")]
    Io(#[from] std::io::Error),
}
