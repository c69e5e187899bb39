//! Error types for the message provider.

use thiserror::Error;

/// Result type for message provider operations.
pub type MessageResult<T> = Result<T, MessageError>;

/// Errors that can occur while configuring a provider.
#[derive(Debug, Error)]
pub enum MessageError {
    /// The JSON configuration could not be parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
