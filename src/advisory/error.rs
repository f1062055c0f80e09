//! Error types for advisory operations

use thiserror::Error;

/// Errors that can occur while fetching or decoding an advisory suggestion
#[derive(Error, Debug)]
pub enum AdvisoryError {
    /// Failed to reach the advisory service
    #[error("Failed to connect to advisory service: {0}")]
    ConnectionError(String),

    /// Request timeout
    #[error("Advisory request timed out after {0} seconds")]
    Timeout(u64),

    /// No API key configured
    #[error("No advisory API key configured (set {0})")]
    MissingCredential(&'static str),

    /// Service answered but not with what we asked for
    #[error("Invalid advisory response: {0}")]
    InvalidResponse(String),

    /// Failed to parse the response payload as JSON
    #[error("Failed to parse advisory response as JSON: {0}")]
    ParseError(String),

    /// Feature not compiled in
    #[error("Advisory feature '{0}' not available. Enable with --features {1}")]
    FeatureNotAvailable(&'static str, &'static str),
}

impl From<serde_json::Error> for AdvisoryError {
    fn from(err: serde_json::Error) -> Self {
        AdvisoryError::ParseError(err.to_string())
    }
}

/// Result type for advisory operations
pub type AdvisoryResult<T> = Result<T, AdvisoryError>;
