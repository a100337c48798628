//! README rendering error types.

/// README rendering error.
#[derive(Debug, thiserror::Error)]
pub enum ReadmeError {
    /// Handlebars rendering error.
    #[error("README rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),
}
