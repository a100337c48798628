//! Upstream release metadata types.

use serde::Deserialize;

/// A downloadable asset attached to an upstream release.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    /// Asset filename, e.g. `webfont-iosevka-17.1.0.zip`.
    pub name: String,

    /// Direct download URL for the asset body.
    #[serde(rename = "browser_download_url")]
    pub download_url: String,
}

/// Latest-release metadata as returned by the hosting API.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Release tag, e.g. `v17.1.0`.
    pub tag_name: String,

    /// Assets attached to the release, in API order.
    pub assets: Vec<ReleaseAsset>,
}
