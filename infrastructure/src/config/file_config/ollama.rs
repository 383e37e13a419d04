//! Ollama connection configuration from TOML (`[ollama]` section)

use crate::ollama::gateway::{OLLAMA_DEFAULT_URL, OllamaClientConfig};
use crate::ollama::protocol::GenerateOptions;
use reviewbot_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// Raw Ollama configuration from TOML
///
/// # Example
///
/// ```toml
/// [ollama]
/// base_url = "http://127.0.0.1:11434"
/// model = "llama2"
/// temperature = 0.0
/// num_predict = 16
/// timeout_secs = 120
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    /// Base URL of the Ollama server
    pub base_url: String,
    /// Model tag to classify with
    #[serde(deserialize_with = "model_name")]
    pub model: String,
    /// Sampling temperature (server default when unset)
    pub temperature: Option<f32>,
    /// Maximum number of tokens to generate (server default when unset)
    pub num_predict: Option<i32>,
    /// Request timeout in seconds; unset waits indefinitely
    pub timeout_secs: Option<u64>,
}

/// Read a model tag that env parsing may have typed as a number.
fn model_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tag {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Tag::deserialize(deserializer)? {
        Tag::Text(name) => name,
        Tag::Integer(n) => n.to_string(),
        Tag::Float(n) => n.to_string(),
    })
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            base_url: OLLAMA_DEFAULT_URL.to_string(),
            model: Model::default().to_string(),
            temperature: None,
            num_predict: None,
            timeout_secs: None,
        }
    }
}

impl FileOllamaConfig {
    /// Parse the model name, collecting an issue when it is empty.
    pub fn parse_model(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        if self.model.trim().is_empty() {
            let issue = ConfigIssue::error(
                ConfigIssueCode::EmptyModelName,
                "ollama.model: model name cannot be empty",
            );
            return (None, vec![issue]);
        }
        let Ok(model) = self.model.trim().parse::<Model>();
        (Some(model), Vec::new())
    }

    /// Build the HTTP client settings for the gateway
    pub fn to_client_config(&self) -> OllamaClientConfig {
        OllamaClientConfig {
            base_url: self.base_url.clone(),
            options: GenerateOptions {
                temperature: self.temperature,
                num_predict: self.num_predict,
            },
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}
