//! Asset synchronization error types.

use thiserror::Error;

use crate::provision::ProvisionError;
use crate::readme::ReadmeError;
use crate::release::ReleaseError;
use crate::vcs::VcsError;

/// Errors that can occur while syncing one release asset.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Asset filename did not match the `webfont-{variant}-{release}.zip`
    /// pattern.
    #[error("asset '{asset}' does not match the webfont pattern for release {release}")]
    UnrecognizedAsset { asset: String, release: String },

    /// Provisioning the target repository failed.
    #[error(transparent)]
    Provision(#[from] ProvisionError),

    /// Downloading the asset failed.
    #[error(transparent)]
    Release(#[from] ReleaseError),

    /// The downloaded archive could not be unpacked.
    #[error("failed to unpack webfont archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// README rendering failed.
    #[error(transparent)]
    Readme(#[from] ReadmeError),

    /// A git operation failed.
    #[error(transparent)]
    Vcs(#[from] VcsError),

    /// Local file bookkeeping (marker, README write, cleanup) failed.
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}
