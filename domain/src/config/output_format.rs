//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for a classification printed on the console
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Only the display label (default)
    #[default]
    Label,
    /// Label plus the raw model reply
    Full,
    /// JSON output
    Json,
}
