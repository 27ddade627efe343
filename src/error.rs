//! Reader error types
//!
//! Unified error handling for manifest parsing, pagination, and settings.

use thiserror::Error;

/// Unified reader error type
#[derive(Debug, Error)]
pub enum ReaderError {
    /// Manifest document was not a JSON object of the expected shape
    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    /// Render target rejected a layout change
    #[error("Layout error: {0}")]
    Layout(String),

    /// Settings store failure
    #[error("Settings store error: {0}")]
    Store(String),

    /// Settings configuration error (e.g. empty option sets)
    #[error("Settings error: {0}")]
    Settings(String),

    /// No pagination strategy with the requested name
    #[error("Unknown view: {0}")]
    UnknownView(String),

    /// IO error (std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for reader operations
pub type Result<T> = std::result::Result<T, ReaderError>;
