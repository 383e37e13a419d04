//! Web server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Default address for the review form
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

/// Raw server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address the web form listens on
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}
