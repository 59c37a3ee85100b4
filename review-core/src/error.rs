//! Error types for review tracking

use thiserror::Error;

/// Result type alias for review tracking operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for review tracking operations
///
/// Cursor moves at a boundary and saving without a current item are not
/// errors; those operations return `None` instead.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected slide count or URL list
    #[error("{0}")]
    InvalidInput(String),
}
