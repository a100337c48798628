//! Hosting-service error types.

use thiserror::Error;

/// Errors from hosting-service operations.
#[derive(Debug, Error)]
pub enum HostingError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),
}
