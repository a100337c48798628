//! Provisioning error types.

use thiserror::Error;

use crate::hosting::HostingError;
use crate::vcs::VcsError;

/// Errors that can occur while provisioning a target repository.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Hosting-service lookup or creation failed.
    #[error(transparent)]
    Hosting(#[from] HostingError),

    /// Cloning the working copy failed.
    #[error(transparent)]
    Vcs(#[from] VcsError),
}
