//! Orchestrates one full synchronization run.

mod config;
mod error;

pub use config::SyncConfig;
pub use error::RunnerError;

use tracing::{error, info, warn};

use crate::hosting::GithubHost;
use crate::readme::ReadmeRenderer;
use crate::release::{numeric_release, ReleaseClient};
use crate::summary::RunSummary;
use crate::variant::WEBFONT_MARKER;
use crate::vcs::GitCli;
use crate::workflow::AssetSync;

/// Orchestrates a full release synchronization run.
pub struct Runner {
    config: SyncConfig,
    releases: ReleaseClient,
    host: GithubHost,
    vcs: GitCli,
    renderer: ReadmeRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be constructed.
    pub fn new(config: SyncConfig) -> Result<Self, RunnerError> {
        let releases = ReleaseClient::new()?;
        let host = GithubHost::new(config.github_token().to_string())?;
        Ok(Self {
            config,
            releases,
            host,
            vcs: GitCli,
            renderer: ReadmeRenderer::new(),
        })
    }

    /// Executes one run: fetch the latest release, then sync each webfont
    /// asset sequentially.
    ///
    /// A failed asset is logged and recorded in the summary; the remaining
    /// assets still sync. Only failures before the per-asset loop (metadata
    /// fetch, scratch directory creation) abort the run.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the latest release cannot be fetched or
    /// the scratch directory cannot be created.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let upstream = self.config.upstream();
        info!(upstream = %upstream, "Fetching latest release");

        let latest = self.releases.latest_release(upstream).await?;
        let release = numeric_release(&latest.tag_name);
        info!(tag = %latest.tag_name, "Latest release");

        let assets: Vec<_> = latest
            .assets
            .iter()
            .filter(|asset| asset.name.contains(WEBFONT_MARKER))
            .collect();

        let mut summary = RunSummary::new(latest.tag_name.clone());
        summary.assets_matched = assets.len();

        if assets.is_empty() {
            warn!("No webfont assets in latest release");
            return Ok(summary);
        }

        info!(count = assets.len(), "Found webfont assets");

        // All per-variant working copies live under one run-scoped scratch
        // directory, reclaimed on drop even when an asset failed mid-way.
        let work_root = tempfile::tempdir()?;
        let workflow = AssetSync::new(
            &self.releases,
            &self.host,
            &self.vcs,
            &self.renderer,
            &self.config,
            work_root.path(),
        );

        for asset in assets {
            match workflow.sync(release, asset).await {
                Ok(outcome) => summary.record_outcome(&outcome),
                Err(e) => {
                    error!(asset = %asset.name, error = %e, "Asset sync failed");
                    summary.record_failure(asset.name.clone(), e.to_string());
                }
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use crate::release::ReleaseAsset;
    use crate::variant::WEBFONT_MARKER;

    #[test]
    fn filters_webfont_assets() {
        let assets = vec![
            ReleaseAsset {
                name: "webfont-iosevka-17.1.0.zip".to_string(),
                download_url: String::new(),
            },
            ReleaseAsset {
                name: "ttf-iosevka-17.1.0.zip".to_string(),
                download_url: String::new(),
            },
            ReleaseAsset {
                name: "webfont-iosevka-slab-17.1.0.zip".to_string(),
                download_url: String::new(),
            },
        ];

        let matched: Vec<_> = assets
            .iter()
            .filter(|a| a.name.contains(WEBFONT_MARKER))
            .collect();

        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].name, "webfont-iosevka-17.1.0.zip");
        assert_eq!(matched[1].name, "webfont-iosevka-slab-17.1.0.zip");
    }
}
