//! Application-level configuration.
//!
//! - [`ClassifierConfig`] - model, examples and prompt layout for classification

pub mod classifier_config;

pub use classifier_config::ClassifierConfig;
