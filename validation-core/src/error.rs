//! Error types for the validation core

use thiserror::Error;

/// Validation core error
///
/// The validation engines themselves never fail: malformed input becomes a
/// negative verdict. Errors only arise from loading configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
