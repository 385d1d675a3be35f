//! Error types for the fallible edges of folio.
//!
//! Presentation-state operations (scrolling, nav activation, project
//! selection) never fail. Only loading content/config, starting the logger
//! and talking to the terminal can.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Terminal or file I/O failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON could not be parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Content catalog failed validation.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Logger could not be started.
    #[error("logging error: {0}")]
    Logging(String),

    /// The flexbox pass rejected the page tree.
    #[error("layout error: {0}")]
    Layout(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = FolioError::InvalidCatalog("duplicate section id `home`".into());
        assert_eq!(err.to_string(), "invalid catalog: duplicate section id `home`");

        let err = FolioError::InvalidConfig("cursor_ease out of range".into());
        assert!(err.to_string().starts_with("invalid config:"));
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FolioError = io.into();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
