//! # Render Errors

use thiserror::Error;

/// Errors raised while choosing or producing an output format.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Output format name not recognised.
    #[error("Unknown output format: '{0}'. Valid options: text, html, json")]
    UnknownFormat(String),

    /// Locale name not recognised.
    #[error("Unknown locale: '{0}'. Valid options: en-US, de-DE")]
    UnknownLocale(String),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RenderError::UnknownFormat("pdf".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown output format: 'pdf'. Valid options: text, html, json"
        );
    }
}
