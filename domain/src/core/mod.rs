//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - Ollama models that can label a review
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod model;
