//! Per-asset sync outcomes.

use serde::Serialize;

/// How a single asset's synchronization resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AssetOutcome {
    /// New content was committed and pushed.
    Synced {
        /// Variant identifier.
        variant: String,
    },

    /// The marker was stale but the working copy ended up unchanged, so
    /// commit and push were skipped.
    Unchanged {
        /// Variant identifier.
        variant: String,
    },

    /// The release marker already matched the latest release.
    UpToDate {
        /// Variant identifier.
        variant: String,
    },
}

impl AssetOutcome {
    /// Returns the variant this outcome refers to.
    #[must_use]
    pub fn variant(&self) -> &str {
        match self {
            Self::Synced { variant } | Self::Unchanged { variant } | Self::UpToDate { variant } => {
                variant
            }
        }
    }
}
