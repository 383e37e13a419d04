//! Prompt layout overrides from TOML (`[prompt]` section)

use reviewbot_domain::{ConfigIssue, ConfigIssueCode, FewShotPrompt};
use serde::{Deserialize, Serialize};

/// Raw prompt configuration from TOML
///
/// Unset fields keep the builtin template.
///
/// # Example
///
/// ```toml
/// [prompt]
/// prefix = "Read these canteen reviews"
/// suffix = "Label this review: {input}"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptConfig {
    pub prefix: Option<String>,
    /// Template for each example; `{review}` and `{label}` are substituted
    pub example_template: Option<String>,
    pub example_separator: Option<String>,
    /// Closing instruction; `{input}` is replaced by the review
    pub suffix: Option<String>,
}

impl FilePromptConfig {
    /// Apply overrides onto the builtin template, collecting issues.
    pub fn parse_prompt(&self) -> (FewShotPrompt, Vec<ConfigIssue>) {
        let defaults = FewShotPrompt::default();
        let prompt = FewShotPrompt {
            prefix: self.prefix.clone().unwrap_or(defaults.prefix),
            example_template: self
                .example_template
                .clone()
                .unwrap_or(defaults.example_template),
            example_separator: self
                .example_separator
                .clone()
                .unwrap_or(defaults.example_separator),
            suffix: self.suffix.clone().unwrap_or(defaults.suffix),
        };

        let mut issues = Vec::new();
        if !prompt.has_input_placeholder() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingInputPlaceholder,
                "prompt.suffix: no {input} placeholder, the review will not be sent to the model",
            ));
        }

        (prompt, issues)
    }
}
