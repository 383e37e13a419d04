//! Output configuration from TOML (`[output]` section)

use reviewbot_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format for one-shot classification
    pub format: Option<OutputFormat>,
    /// Echo the model reply to stdout while it streams
    pub echo: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            echo: true,
        }
    }
}
