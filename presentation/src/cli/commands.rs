//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for a one-shot classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Only "Positive" or "Negative"
    Label,
    /// Label together with the model and its raw reply
    Full,
    /// JSON output
    Json,
}

impl From<OutputFormat> for reviewbot_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Label => Self::Label,
            OutputFormat::Full => Self::Full,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for reviewbot
#[derive(Parser, Debug)]
#[command(name = "reviewbot")]
#[command(author, version, about = "Mess Review Bot - label food reviews with a local LLM")]
#[command(long_about = r#"
Mess Review Bot asks a local Ollama model to label a mess-food review,
using twenty labeled example reviews as a few-shot prompt.

Without a review argument it serves a web form. With one, it classifies
that review once and prints "Positive" or "Negative".

Configuration files are loaded from (in priority order):
1. REVIEWBOT_* environment variables
2. --config <path>       Explicit config file
3. ./reviewbot.toml      Project-level config
4. ~/.config/reviewbot/config.toml   Global config

Example:
  reviewbot
  reviewbot "The mess meals are a daily delight"
  reviewbot -m mistral --output full "Cold rice again"
"#)]
pub struct Cli {
    /// Review to classify once (serves the web form when omitted)
    pub review: Option<String>,

    /// Ollama model to ask
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Base URL of the Ollama server
    #[arg(long, value_name = "URL")]
    pub ollama_url: Option<String>,

    /// Address for the web form
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Output format for one-shot classification
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Do not echo the model reply or show progress
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the rendered prompt for the review and exit
    #[arg(long)]
    pub show_prompt: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
