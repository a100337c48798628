//! README generation for variant repositories.
//!
//! Every non-skipped sync overwrites the target repository's `README.md`
//! with a document rendered from a fixed Handlebars template. The template
//! is consumed by the published Pages site, so the placeholders are a
//! contract; the surrounding prose is not.

mod error;
mod renderer;

pub use error::ReadmeError;
pub use renderer::{create_handlebars_registry, ReadmeRenderer};

/// Two-letter marker for stylistic-set variants (`ss01`, `ss02`, ...).
const STYLE_SET_MARKER: &str = "ss";

/// Prefix segment marking an unhinted build of a variant.
const UNHINTED_PREFIX: &str = "unhinted-";

/// Builds the human-readable display name for a variant.
///
/// Splits on hyphens and capitalizes each token; stylistic-set tokens are
/// upper-cased whole to preserve their conventional spelling
/// (`ss01-iosevka` -> "SS01 Iosevka").
#[must_use]
pub fn display_name(variant: &str) -> String {
    variant
        .split('-')
        .map(capitalize_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the stylesheet filename token for a variant.
///
/// The published CSS for unhinted builds is named with `unhinted` as a
/// suffix segment, so a leading `unhinted-` moves to the end
/// (`unhinted-iosevka` -> `iosevka-unhinted`).
#[must_use]
pub fn stylesheet_variant(variant: &str) -> String {
    match variant.strip_prefix(UNHINTED_PREFIX) {
        Some(rest) => format!("{rest}-unhinted"),
        None => variant.to_string(),
    }
}

/// Builds the CSS font-family name for a variant.
///
/// The family is the display name plus `" Web"`; hinted and unhinted builds
/// of a variant share a family, so any `"Unhinted "` fragment is removed.
#[must_use]
pub fn font_family(variant: &str) -> String {
    format!("{} Web", display_name(variant)).replace("Unhinted ", "")
}

fn capitalize_token(token: &str) -> String {
    if token.starts_with(STYLE_SET_MARKER) {
        return token.to_uppercase();
    }
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_capitalizes_tokens() {
        assert_eq!(display_name("iosevka"), "Iosevka");
        assert_eq!(display_name("iosevka-curly"), "Iosevka Curly");
    }

    #[test]
    fn display_name_uppercases_style_sets() {
        assert_eq!(display_name("ss01-iosevka"), "SS01 Iosevka");
    }

    #[test]
    fn stylesheet_variant_moves_unhinted_to_suffix() {
        assert_eq!(stylesheet_variant("unhinted-iosevka"), "iosevka-unhinted");
        assert_eq!(stylesheet_variant("iosevka"), "iosevka");
    }

    #[test]
    fn font_family_appends_web() {
        assert_eq!(font_family("iosevka"), "Iosevka Web");
    }

    #[test]
    fn font_family_drops_unhinted_fragment() {
        assert_eq!(font_family("unhinted-iosevka"), "Iosevka Web");
    }
}
