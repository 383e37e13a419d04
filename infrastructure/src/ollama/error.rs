//! Error types for the Ollama adapter

use reviewbot_application::GatewayError;
use thiserror::Error;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when talking to a local Ollama server
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Ollama returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Ollama error: {0}")]
    Api(String),
}

impl From<OllamaError> for GatewayError {
    fn from(err: OllamaError) -> Self {
        match err {
            OllamaError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            OllamaError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            OllamaError::ModelNotFound(model) => GatewayError::ModelNotAvailable(model),
            other => GatewayError::RequestFailed(other.to_string()),
        }
    }
}
