//! Upstream release metadata and asset downloads.
//!
//! One [`ReleaseClient`] is built per run and reused serially for the
//! latest-release lookup and every asset download.

mod error;
mod metadata;

pub use error::ReleaseError;
pub use metadata::{Release, ReleaseAsset};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tracing::debug;

/// GitHub REST API version header value.
const API_VERSION: &str = "2022-11-28";

/// Strips the version-scheme marker from a release tag.
///
/// Upstream tags releases as `v17.1.0`; asset filenames, marker files and
/// commit messages all use the numeric form. A single leading `v` is
/// stripped if present; anything else passes through unchanged.
#[must_use]
pub fn numeric_release(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

/// Downloads release asset bodies.
///
/// The sync workflow depends on this seam rather than a concrete HTTP
/// client so tests can substitute canned archives.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Fetches the full body at `url`.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ReleaseError>;
}

/// HTTP session for the upstream release API and asset downloads.
pub struct ReleaseClient {
    http: reqwest::Client,
}

impl ReleaseClient {
    /// Builds the shared HTTP session with the GitHub API headers applied
    /// to every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be constructed.
    pub fn new() -> Result<Self, ReleaseError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));

        let http = reqwest::Client::builder()
            .user_agent(concat!("webfont-sync/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self { http })
    }

    /// Fetches the latest release metadata for `upstream` ("owner/repo").
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn latest_release(&self, upstream: &str) -> Result<Release, ReleaseError> {
        let url = format!("https://api.github.com/repos/{upstream}/releases/latest");
        debug!(url = %url, "Fetching latest release metadata");

        let release = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Release>()
            .await?;

        Ok(release)
    }
}

#[async_trait]
impl AssetFetcher for ReleaseClient {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ReleaseError> {
        debug!(url = %url, "Downloading asset");

        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(body.to_vec())
    }
}
