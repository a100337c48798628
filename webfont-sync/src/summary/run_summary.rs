//! Summary of a complete synchronization run.

use crate::workflow::AssetOutcome;

/// An asset that failed to sync during a run.
#[derive(Debug, Clone)]
pub struct AssetFailure {
    /// Asset filename.
    pub asset: String,

    /// Error message.
    pub error: String,
}

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Latest release tag as reported upstream.
    pub release_tag: String,

    /// Number of webfont assets in the release.
    pub assets_matched: usize,

    /// Number of variants committed and pushed.
    pub synced: usize,

    /// Number of variants whose working copy was unchanged.
    pub unchanged: usize,

    /// Number of variants skipped by the release marker.
    pub up_to_date: usize,

    /// Number of variants that failed.
    pub failed: usize,

    /// Details for each failed asset.
    pub failures: Vec<AssetFailure>,
}

impl RunSummary {
    /// Creates an empty summary for a release.
    #[must_use]
    pub fn new(release_tag: String) -> Self {
        Self {
            release_tag,
            ..Default::default()
        }
    }

    /// Records a resolved asset outcome.
    pub fn record_outcome(&mut self, outcome: &AssetOutcome) {
        match outcome {
            AssetOutcome::Synced { .. } => self.synced += 1,
            AssetOutcome::Unchanged { .. } => self.unchanged += 1,
            AssetOutcome::UpToDate { .. } => self.up_to_date += 1,
        }
    }

    /// Records a failed asset.
    pub fn record_failure(&mut self, asset: String, error: String) {
        self.failed += 1;
        self.failures.push(AssetFailure { asset, error });
    }

    /// Returns true if any asset failed to sync.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_outcomes_and_failures() {
        let mut summary = RunSummary::new("v17.1.0".to_string());

        summary.record_outcome(&AssetOutcome::Synced {
            variant: "iosevka".to_string(),
        });
        summary.record_outcome(&AssetOutcome::UpToDate {
            variant: "iosevka-slab".to_string(),
        });
        summary.record_failure(
            "webfont-iosevka-curly-17.1.0.zip".to_string(),
            "push failed".to_string(),
        );

        assert_eq!(summary.synced, 1);
        assert_eq!(summary.up_to_date, 1);
        assert_eq!(summary.failed, 1);
        assert!(summary.has_failures());
        assert_eq!(summary.failures[0].asset, "webfont-iosevka-curly-17.1.0.zip");
    }

    #[test]
    fn clean_run_has_no_failures() {
        let mut summary = RunSummary::new("v17.1.0".to_string());
        summary.record_outcome(&AssetOutcome::Unchanged {
            variant: "iosevka".to_string(),
        });

        assert!(!summary.has_failures());
        assert_eq!(summary.unchanged, 1);
    }
}
