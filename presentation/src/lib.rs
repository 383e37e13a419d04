//! Presentation layer for reviewbot
//!
//! This crate contains the CLI definition, the web form,
//! console output formatting and stream echo.

pub mod cli;
pub mod output;
pub mod progress;
pub mod web;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::echo::ConsoleStreamEcho;
pub use progress::spinner::ReplySpinner;
pub use web::{ReviewForm, WebState};
