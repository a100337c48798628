//! Run configuration.

/// Configuration for a synchronization run.
///
/// All credentials are passed in explicitly; core logic never reads the
/// ambient environment.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Upstream source project, "owner/repo".
    upstream: String,
    /// Organization hosting the per-variant repositories.
    org: String,
    /// Hosting-API token, also used for authenticated clone/push.
    github_token: String,
    /// Username paired with the token in clone URLs.
    git_username: String,
    /// Re-sync every variant even when its marker matches.
    force_update: bool,
}

impl SyncConfig {
    /// Creates a new configuration for a run.
    pub fn new(
        upstream: String,
        org: String,
        github_token: String,
        git_username: String,
        force_update: bool,
    ) -> Self {
        Self {
            upstream,
            org,
            github_token,
            git_username,
            force_update,
        }
    }

    /// Returns the upstream source project slug.
    pub fn upstream(&self) -> &str {
        &self.upstream
    }

    /// Returns the target organization name.
    pub fn org(&self) -> &str {
        &self.org
    }

    /// Returns the hosting-API token.
    pub fn github_token(&self) -> &str {
        &self.github_token
    }

    /// Returns the username used in authenticated clone URLs.
    pub fn git_username(&self) -> &str {
        &self.git_username
    }

    /// Returns whether markers are ignored and every variant re-synced.
    pub fn force_update(&self) -> bool {
        self.force_update
    }
}
