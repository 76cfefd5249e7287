//! Error types shared by the model and knowledge-base clients.

use thiserror::Error;

/// Errors raised while talking to Bedrock.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BedrockError {
    /// The remote call itself failed (network, credentials, throttling, service fault).
    #[error("Service call failed: {0}")]
    ServiceError(String),
    /// The response did not have the expected shape.
    #[error("Failed to parse response: {0}")]
    ParseError(String),
    /// The request could not be built locally.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl BedrockError {
    /// Whether this error came from the remote service rather than local handling.
    pub fn is_service_error(&self) -> bool {
        matches!(self, BedrockError::ServiceError(_))
    }
}

impl From<serde_json::Error> for BedrockError {
    fn from(err: serde_json::Error) -> Self {
        BedrockError::ParseError(err.to_string())
    }
}
