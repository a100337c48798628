//! README renderer.

use handlebars::{no_escape, Handlebars};
use serde_json::json;

use super::{display_name, font_family, stylesheet_variant, ReadmeError};

/// Fixed README template for every variant repository.
///
/// Placeholders: `display_name`, `release`, `variant`, `stylesheet_variant`,
/// `font_family`.
const README_TEMPLATE: &str = r#"# {{display_name}}

Webfont distribution of [Iosevka](https://github.com/be5invis/Iosevka) {{display_name}}, release {{release}}.

This repository is generated and republished automatically for every
upstream release; do not edit it by hand.

## Usage

Load the stylesheet from GitHub Pages:

```html
<link rel="stylesheet" href="https://iosevka-webfonts.github.io/{{variant}}/{{stylesheet_variant}}.css" />
```

Then select the font family in your CSS:

```css
body {
    font-family: "{{font_family}}", monospace;
}
```
"#;

/// Creates a configured Handlebars registry for README rendering.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// Renders variant READMEs from the fixed template.
pub struct ReadmeRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for ReadmeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadmeRenderer {
    /// Creates a new README renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the README for a variant at a given release.
    ///
    /// `release` is the numeric release, i.e. the tag without its leading
    /// version marker.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(&self, variant: &str, release: &str) -> Result<String, ReadmeError> {
        let data = json!({
            "display_name": display_name(variant),
            "release": release,
            "variant": variant,
            "stylesheet_variant": stylesheet_variant(variant),
            "font_family": font_family(variant),
        });

        Ok(self.handlebars.render_template(README_TEMPLATE, &data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_plain_variant() {
        let readme = ReadmeRenderer::new().render("iosevka", "17.1.0").unwrap();

        assert!(readme.contains("# Iosevka"));
        assert!(readme.contains("release 17.1.0"));
        assert!(readme.contains("iosevka-webfonts.github.io/iosevka/iosevka.css"));
        assert!(readme.contains("\"Iosevka Web\""));
    }

    #[test]
    fn renders_unhinted_variant() {
        let readme = ReadmeRenderer::new()
            .render("unhinted-iosevka", "17.1.0")
            .unwrap();

        assert!(readme.contains("iosevka-webfonts.github.io/unhinted-iosevka/iosevka-unhinted.css"));
        assert!(readme.contains("\"Iosevka Web\""));
    }

    #[test]
    fn renders_style_set_variant() {
        let readme = ReadmeRenderer::new().render("ss01-iosevka", "x").unwrap();

        assert!(readme.contains("# SS01 Iosevka"));
        assert!(readme.contains("release x"));
    }
}
