//! Per-asset synchronization workflow.
//!
//! For one webfont asset this module provisions the variant repository,
//! short-circuits on the release marker, downloads and extracts the
//! package, regenerates the README, commits and pushes when the tree
//! changed, and cleans up the local working copy.

mod error;
mod outcome;

pub use error::SyncError;
pub use outcome::AssetOutcome;

use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::{info, info_span, Instrument};

use crate::hosting::RepositoryHost;
use crate::marker::{check_and_update, MARKER_FILE};
use crate::provision::provision;
use crate::readme::ReadmeRenderer;
use crate::release::{AssetFetcher, ReleaseAsset};
use crate::runner::SyncConfig;
use crate::variant::derive_variant;
use crate::vcs::VersionControl;

/// Collaborators and configuration for syncing release assets.
pub struct AssetSync<'a> {
    fetcher: &'a dyn AssetFetcher,
    host: &'a dyn RepositoryHost,
    vcs: &'a dyn VersionControl,
    renderer: &'a ReadmeRenderer,
    config: &'a SyncConfig,
    work_root: &'a Path,
}

impl<'a> AssetSync<'a> {
    /// Bundles the collaborators for a run. `work_root` is the run-scoped
    /// scratch directory holding every per-variant working copy.
    pub fn new(
        fetcher: &'a dyn AssetFetcher,
        host: &'a dyn RepositoryHost,
        vcs: &'a dyn VersionControl,
        renderer: &'a ReadmeRenderer,
        config: &'a SyncConfig,
        work_root: &'a Path,
    ) -> Self {
        Self {
            fetcher,
            host,
            vcs,
            renderer,
            config,
            work_root,
        }
    }

    /// Synchronizes one release asset into its variant repository.
    ///
    /// `release` is the numeric release (tag without the leading `v`); it is
    /// used for variant derivation, the marker file, the README and the
    /// commit message.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] on an unrecognized filename or when
    /// provisioning, download, extraction or a git operation fails. Errors
    /// abort this asset only; the caller decides whether to continue.
    pub async fn sync(
        &self,
        release: &str,
        asset: &ReleaseAsset,
    ) -> Result<AssetOutcome, SyncError> {
        let variant =
            derive_variant(&asset.name, release).ok_or_else(|| SyncError::UnrecognizedAsset {
                asset: asset.name.clone(),
                release: release.to_string(),
            })?;

        let span = info_span!("sync_asset", variant = %variant, release = %release);
        self.sync_variant(variant, release, asset).instrument(span).await
    }

    async fn sync_variant(
        &self,
        variant: &str,
        release: &str,
        asset: &ReleaseAsset,
    ) -> Result<AssetOutcome, SyncError> {
        info!("Updating variant repository");

        let working_copy =
            provision(self.host, self.vcs, self.config, variant, self.work_root).await?;

        let marker_path = working_copy.join(MARKER_FILE);
        if check_and_update(&marker_path, release, self.config.force_update())? {
            info!("Release already synced, skipping");
            fs::remove_dir_all(&working_copy)?;
            return Ok(AssetOutcome::UpToDate {
                variant: variant.to_string(),
            });
        }

        info!(asset = %asset.name, "Downloading webfont package");
        let body = self.fetcher.fetch(&asset.download_url).await?;
        extract_archive(&body, &working_copy)?;

        let readme = self.renderer.render(variant, release)?;
        fs::write(working_copy.join("README.md"), readme)?;

        let outcome = if self.vcs.has_changes(&working_copy).await? {
            let message = format!("Update {variant}-{release}");
            self.vcs.commit_all(&working_copy, &message).await?;
            self.vcs.push(&working_copy).await?;
            info!("Pushed updated webfonts");
            AssetOutcome::Synced {
                variant: variant.to_string(),
            }
        } else {
            info!("Working copy unchanged, skipping commit");
            AssetOutcome::Unchanged {
                variant: variant.to_string(),
            }
        };

        // Reclaim disk before the next variant. Error paths above leave the
        // directory behind; the run-scoped temp dir removes it on drop.
        fs::remove_dir_all(&working_copy)?;

        Ok(outcome)
    }
}

/// Unpacks a downloaded zip archive into the working copy.
fn extract_archive(body: &[u8], dest: &Path) -> Result<(), SyncError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(body))?;
    archive.extract(dest)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    #[test]
    fn extracts_archive_contents() {
        let mut raw = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(Cursor::new(&mut raw));
            writer
                .start_file("iosevka-regular.woff2", SimpleFileOptions::default())
                .unwrap();
            writer.write_all(b"woff2").unwrap();
            writer.finish().unwrap();
        }

        let dir = tempfile::tempdir().unwrap();
        extract_archive(&raw, dir.path()).unwrap();

        assert_eq!(
            fs::read(dir.path().join("iosevka-regular.woff2")).unwrap(),
            b"woff2"
        );
    }

    #[test]
    fn rejects_corrupt_archive() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            extract_archive(b"not a zip", dir.path()),
            Err(SyncError::Archive(_))
        ));
    }
}
