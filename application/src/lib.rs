//! Application layer for reviewbot
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ClassifierConfig;
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway, LlmSession, StreamHandle},
    stream_observer::{NoStreamObserver, StreamObserver},
};
pub use use_cases::classify_review::{ClassifyReviewError, ClassifyReviewUseCase};
