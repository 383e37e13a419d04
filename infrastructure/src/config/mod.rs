//! Configuration file loading for reviewbot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `REVIEWBOT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./reviewbot.toml` or `./.reviewbot.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/reviewbot/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_BIND, FileConfig, FileExample, FileOllamaConfig, FileOutputConfig, FilePromptConfig,
    FileServerConfig,
};
pub use loader::ConfigLoader;
