//! Console output formatter for classifications

use colored::Colorize;
use reviewbot_domain::{Classification, OutputFormat, Sentiment};

/// Formats classifications for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a classification in the requested format
    pub fn format(result: &Classification, format: OutputFormat) -> String {
        match format {
            OutputFormat::Label => Self::format_label(result),
            OutputFormat::Full => Self::format_full(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Only the display label
    pub fn format_label(result: &Classification) -> String {
        Self::colored_label(result.sentiment)
    }

    /// Label with the model and its raw reply
    pub fn format_full(result: &Classification) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Mess Review Bot ===".cyan().bold()
        ));
        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), result.model));
        output.push_str(&format!("{} {}\n", "Review:".cyan().bold(), result.review));
        output.push_str(&format!(
            "{} {}\n\n",
            "Reply:".cyan().bold(),
            result.reply.trim()
        ));
        output.push_str(&format!(
            "{} {}",
            "Label:".cyan().bold(),
            Self::colored_label(result.sentiment)
        ));

        output
    }

    /// Format as JSON
    pub fn format_json(result: &Classification) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    fn colored_label(sentiment: Sentiment) -> String {
        match sentiment {
            Sentiment::Positive => sentiment.as_str().green().bold().to_string(),
            Sentiment::Negative => sentiment.as_str().red().bold().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewbot_domain::Model;

    fn classification(reply: &str) -> Classification {
        Classification::new(
            Model::Llama2,
            "I love mess food!".to_string(),
            "prompt".to_string(),
            reply.to_string(),
        )
    }

    #[test]
    fn test_label_format() {
        colored::control::set_override(false);
        assert_eq!(
            ConsoleFormatter::format(&classification("Label: alpha"), OutputFormat::Label),
            "Positive"
        );
        assert_eq!(
            ConsoleFormatter::format(&classification("Label: beta"), OutputFormat::Label),
            "Negative"
        );
    }

    #[test]
    fn test_full_format_includes_reply() {
        colored::control::set_override(false);
        let output =
            ConsoleFormatter::format(&classification(" Label: alpha\n"), OutputFormat::Full);
        assert!(output.contains("Model: llama2"));
        assert!(output.contains("Review: I love mess food!"));
        assert!(output.contains("Reply: Label: alpha\n"));
        assert!(output.ends_with("Label: Positive"));
    }

    #[test]
    fn test_json_format() {
        let output = ConsoleFormatter::format(&classification("beta"), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["sentiment"], "Negative");
        assert_eq!(value["model"], "llama2");
        assert_eq!(value["reply"], "beta");
    }
}
