//! Error types for the interactive feedback bridge
//!
//! Call-level failures (the UI could not run, or its result could not be read)
//! are explicit variants so the MCP layer can report them verbatim. Per-image
//! decode problems never surface here; they are logged and skipped.

use std::time::Duration;
use thiserror::Error;

/// Main error type for feedback operations
#[derive(Error, Debug)]
pub enum FeedbackError {
    /// The UI process exited unsuccessfully (`None` when killed by a signal)
    #[error("Failed to launch feedback UI: {}", format_exit_code(.code))]
    Launch { code: Option<i32> },

    /// The UI process could not be started at all
    #[error("Failed to launch feedback UI: {0}")]
    Spawn(#[source] std::io::Error),

    /// The result file was missing or not a valid feedback document
    #[error("Failed to read feedback result: {0}")]
    ReadResult(String),

    /// The UI did not exit within the configured timeout
    #[error("Feedback UI timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Tool arguments did not match the declared schema
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

fn format_exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "terminated by signal".to_string(),
    }
}

/// Result type alias for feedback operations
pub type Result<T> = std::result::Result<T, FeedbackError>;

/// Convert anyhow::Error to FeedbackError
impl From<anyhow::Error> for FeedbackError {
    fn from(err: anyhow::Error) -> Self {
        FeedbackError::Other(err.to_string())
    }
}

impl From<toml::de::Error> for FeedbackError {
    fn from(err: toml::de::Error) -> Self {
        FeedbackError::Config(err.to_string())
    }
}
