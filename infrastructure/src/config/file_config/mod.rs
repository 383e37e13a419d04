//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod examples;
mod ollama;
mod output;
mod prompt;
mod server;

pub use examples::{FileExample, parse_examples};
pub use ollama::FileOllamaConfig;
pub use output::FileOutputConfig;
pub use prompt::FilePromptConfig;
pub use server::{DEFAULT_BIND, FileServerConfig};

use reviewbot_application::ClassifierConfig;
use reviewbot_domain::{ConfigIssue, ExampleSet};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Ollama connection and model
    pub ollama: FileOllamaConfig,
    /// Web form settings
    pub server: FileServerConfig,
    /// Prompt layout overrides
    pub prompt: FilePromptConfig,
    /// Console output settings
    pub output: FileOutputConfig,
    /// Replacement few-shot examples (builtin set when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<FileExample>>,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.ollama.parse_model().1);
        issues.extend(self.prompt.parse_prompt().1);
        issues.extend(parse_examples(self.examples.as_ref()).1);
        issues
    }

    /// Build the classifier configuration.
    ///
    /// Parts with issues fall back to their defaults; call [`validate`](Self::validate)
    /// first to decide whether that is acceptable.
    pub fn to_classifier_config(&self) -> ClassifierConfig {
        let model = self.ollama.parse_model().0.unwrap_or_default();
        let prompt = self.prompt.parse_prompt().0;
        let examples = parse_examples(self.examples.as_ref())
            .0
            .unwrap_or_else(ExampleSet::builtin);

        ClassifierConfig::new(model, examples, prompt)
    }
}
