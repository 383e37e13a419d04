//! Domain layer for reviewbot
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Example**: a review paired with an internal [`Label`] (`alpha`/`beta`)
//! - **Few-shot prompt**: prefix, every example, then the user's review
//! - **Verdict**: the model's free-text reply read as a [`Sentiment`]

pub mod classification;
pub mod config;
pub mod core;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use classification::{
    example::{Example, ExampleSet},
    label::{Label, Sentiment},
    verdict::{Classification, interpret_reply},
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, model::Model};
pub use prompt::FewShotPrompt;
pub use session::stream::StreamEvent;
