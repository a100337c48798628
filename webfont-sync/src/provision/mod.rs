//! Target repository provisioning.
//!
//! Ensures the per-variant repository exists on the hosting service and
//! yields a fresh local working copy for this run.

mod error;

pub use error::ProvisionError;

use std::path::{Path, PathBuf};
use tracing::info;

use crate::hosting::RepositoryHost;
use crate::runner::SyncConfig;
use crate::vcs::VersionControl;

/// Ensures `config.org()/repo_name` exists and clones it under `dest`.
///
/// A missing repository is created with the standard license and Pages
/// publishing enabled; any other lookup, creation or clone failure is fatal
/// for this variant. Returns the path of the fresh working copy.
///
/// # Errors
///
/// Returns [`ProvisionError`] if a hosting call or the clone fails.
pub async fn provision(
    host: &dyn RepositoryHost,
    vcs: &dyn VersionControl,
    config: &SyncConfig,
    repo_name: &str,
    dest: &Path,
) -> Result<PathBuf, ProvisionError> {
    let org = config.org();

    if !host.repo_exists(org, repo_name).await? {
        info!(repo = %format!("{org}/{repo_name}"), "Repository missing, creating it");
        host.create_repo(org, repo_name).await?;
        host.enable_pages(org, repo_name).await?;
    }

    let remote_url = format!(
        "https://{}:{}@github.com/{}/{}.git",
        config.git_username(),
        config.github_token(),
        org,
        repo_name
    );
    let working_copy = dest.join(repo_name);
    vcs.clone_repo(&remote_url, &working_copy).await?;

    Ok(working_copy)
}
