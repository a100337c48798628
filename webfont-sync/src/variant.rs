//! Variant identifiers derived from webfont asset filenames.
//!
//! Upstream packages each variant as `webfont-{variant}-{release}.zip`, e.g.
//! `webfont-ss01-iosevka-17.1.0.zip`. The variant token names the target
//! repository one-to-one.

/// Substring marking a release asset as a packaged webfont distribution.
pub const WEBFONT_MARKER: &str = "webfont";

/// Filename prefix of a webfont asset.
pub const WEBFONT_PREFIX: &str = "webfont-";

/// Derives the variant identifier from an asset filename.
///
/// Strips the `webfont-` prefix and the `-{release}.zip` suffix, where
/// `release` is the numeric release (tag without the leading `v`). Case and
/// internal hyphens are preserved as-is.
///
/// Returns `None` when either strip fails or nothing remains, so callers can
/// fail the asset explicitly instead of syncing under a malformed name.
#[must_use]
pub fn derive_variant<'a>(asset_name: &'a str, release: &str) -> Option<&'a str> {
    let stem = asset_name.strip_prefix(WEBFONT_PREFIX)?;
    let suffix = format!("-{release}.zip");
    let variant = stem.strip_suffix(suffix.as_str())?;
    if variant.is_empty() {
        return None;
    }
    Some(variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_plain_variant() {
        assert_eq!(
            derive_variant("webfont-iosevka-17.1.0.zip", "17.1.0"),
            Some("iosevka")
        );
    }

    #[test]
    fn derives_hyphenated_variant() {
        assert_eq!(
            derive_variant("webfont-ss01-iosevka-17.1.0.zip", "17.1.0"),
            Some("ss01-iosevka")
        );
    }

    #[test]
    fn rejects_missing_prefix() {
        assert_eq!(derive_variant("ttf-iosevka-17.1.0.zip", "17.1.0"), None);
    }

    #[test]
    fn rejects_mismatched_release() {
        assert_eq!(derive_variant("webfont-iosevka-17.1.0.zip", "17.2.0"), None);
    }

    #[test]
    fn rejects_empty_variant() {
        assert_eq!(derive_variant("webfont--17.1.0.zip", "17.1.0"), None);
    }

    #[test]
    fn round_trips_arbitrary_variants() {
        for (variant, release) in [
            ("iosevka", "17.1.0"),
            ("unhinted-iosevka-slab", "2.0.0-beta.1"),
            ("ss09-iosevka-curly", "33.3.3"),
        ] {
            let name = format!("webfont-{variant}-{release}.zip");
            assert_eq!(derive_variant(&name, release), Some(variant));
        }
    }
}
