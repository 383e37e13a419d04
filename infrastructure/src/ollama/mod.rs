//! Ollama adapter
//!
//! Implements the `LlmGateway` port against a local Ollama server:
//!
//! - `GET /` - health check
//! - `GET /api/tags` - list pulled models
//! - `POST /api/generate` - generate a reply (streamed as NDJSON)

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
