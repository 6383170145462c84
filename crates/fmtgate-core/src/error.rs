// Rust guideline compliant 2026-02-06

//! Error types for the fmtgate core library.

use thiserror::Error;

/// Result type alias for fmtgate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for fmtgate operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file or environment value.
    #[error("Invalid config: {0}")]
    Config(String),

    /// The format-check process could not be started or run to completion.
    #[error("Format check failed to run: {0}")]
    CheckFailed(String),
}
