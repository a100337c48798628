//! Hosting-service operations on target repositories.
//!
//! Repository lookup and creation go through the regular client API.
//! Enabling Pages publishing is not exposed by the client library, so it is
//! issued as a raw authenticated POST against the `pages` sub-resource.

mod error;

pub use error::HostingError;

use async_trait::async_trait;
use octocrab::Octocrab;
use serde_json::json;
use tracing::{debug, info};

/// License template applied to newly created repositories.
const LICENSE_TEMPLATE: &str = "apache-2.0";

/// Hosting-service operations the provisioner needs.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Returns whether `owner/repo` exists on the hosting service.
    async fn repo_exists(&self, owner: &str, repo: &str) -> Result<bool, HostingError>;

    /// Creates `org/repo` with the standard license and an initial commit.
    async fn create_repo(&self, org: &str, repo: &str) -> Result<(), HostingError>;

    /// Enables static-site publishing for `org/repo` from the `main` branch
    /// root.
    async fn enable_pages(&self, org: &str, repo: &str) -> Result<(), HostingError>;
}

/// GitHub-backed [`RepositoryHost`].
pub struct GithubHost {
    octocrab: Octocrab,
}

impl GithubHost {
    /// Builds an authenticated GitHub client.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be constructed.
    pub fn new(token: String) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder().personal_token(token).build()?;
        Ok(Self { octocrab })
    }
}

#[async_trait]
impl RepositoryHost for GithubHost {
    async fn repo_exists(&self, owner: &str, repo: &str) -> Result<bool, HostingError> {
        debug!(repo = %format!("{owner}/{repo}"), "Looking up repository");

        match self.octocrab.repos(owner, repo).get().await {
            Ok(_) => Ok(true),
            Err(e) if is_not_found(&e) => Ok(false),
            Err(e) => Err(HostingError::GitHubError(e)),
        }
    }

    async fn create_repo(&self, org: &str, repo: &str) -> Result<(), HostingError> {
        info!(repo = %format!("{org}/{repo}"), "Creating repository");

        let body = json!({
            "name": repo,
            "license_template": LICENSE_TEMPLATE,
            "auto_init": true,
        });
        let _created: serde_json::Value = self
            .octocrab
            .post(format!("/orgs/{org}/repos"), Some(&body))
            .await?;

        Ok(())
    }

    async fn enable_pages(&self, org: &str, repo: &str) -> Result<(), HostingError> {
        info!(repo = %format!("{org}/{repo}"), "Enabling Pages publishing");

        let body = json!({
            "source": {"branch": "main", "path": "/"},
        });
        let _pages: serde_json::Value = self
            .octocrab
            .post(format!("/repos/{org}/{repo}/pages"), Some(&body))
            .await?;

        Ok(())
    }
}

/// Checks if an error indicates repository-not-found.
fn is_not_found(error: &octocrab::Error) -> bool {
    if let octocrab::Error::GitHub { source, .. } = error {
        return source.status_code.as_u16() == 404;
    }
    let msg = error.to_string().to_lowercase();
    msg.contains("404") || msg.contains("not found")
}
