//! Error types for feed scraping
//!
//! Extraction itself never fails: missing optional fields degrade to defaults.
//! What can fail is everything around it: talking to the browser, reading the
//! document, driving the viewport, and copying exports to the clipboard.

use thiserror::Error;

/// Result type alias for feed scraping operations
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// Error types for feed scraping operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Browser launch or CDP communication failed
    #[error("Browser error: {0}")]
    Browser(String),

    /// The document source could not produce a snapshot
    #[error("Failed to read document: {0}")]
    Document(String),

    /// Viewport metrics could not be read or the viewport could not be moved
    #[error("Viewport error: {0}")]
    Viewport(String),

    /// No usable clipboard on this system
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// Records could not be serialized for export
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// A run is already in progress on this session
    #[error("A scrape run is already in progress on this session")]
    AlreadyRunning,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<anyhow::Error> for ScrapeError {
    fn from(err: anyhow::Error) -> Self {
        // Use {:#} to preserve full error chain with context
        Self::Browser(format!("{err:#}"))
    }
}
