//! Infrastructure layer for reviewbot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod ollama;

// Re-export commonly used types
pub use config::{
    ConfigLoader, DEFAULT_BIND, FileConfig, FileExample, FileOllamaConfig, FileOutputConfig,
    FilePromptConfig, FileServerConfig,
};
pub use ollama::{
    error::{OllamaError, Result},
    gateway::{OLLAMA_DEFAULT_URL, OllamaClientConfig, OllamaLlmGateway},
    session::OllamaSession,
};
