#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod hosting;
pub mod marker;
pub mod provision;
pub mod readme;
pub mod release;
pub mod runner;
pub mod summary;
pub mod variant;
pub mod vcs;
pub mod workflow;

pub use hosting::{GithubHost, HostingError, RepositoryHost};
pub use marker::{check_and_update, MARKER_FILE};
pub use provision::{provision, ProvisionError};
pub use readme::{display_name, font_family, stylesheet_variant, ReadmeError, ReadmeRenderer};
pub use release::{
    numeric_release, AssetFetcher, Release, ReleaseAsset, ReleaseClient, ReleaseError,
};
pub use runner::{Runner, RunnerError, SyncConfig};
pub use summary::{AssetFailure, RunSummary};
pub use variant::{derive_variant, WEBFONT_MARKER};
pub use vcs::{GitCli, VcsError, VersionControl};
pub use workflow::{AssetOutcome, AssetSync, SyncError};
