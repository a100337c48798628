//! Release API and download error types.

use thiserror::Error;

/// Errors from the upstream release API or asset downloads.
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// Transport failure or non-success HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
