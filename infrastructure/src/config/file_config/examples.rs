//! Example overrides from TOML (`[[examples]]` array)

use reviewbot_domain::{ConfigIssue, ConfigIssueCode, Example, ExampleSet, Label};
use serde::{Deserialize, Serialize};

/// One raw `[[examples]]` entry
///
/// # Example
///
/// ```toml
/// [[examples]]
/// review = "The paneer was great"
/// label = "alpha"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileExample {
    pub review: String,
    pub label: String,
}

/// Parse configured examples into an [`ExampleSet`], collecting issues.
///
/// `None` means "use the builtin set". Any invalid entry yields no set.
pub fn parse_examples(
    entries: Option<&Vec<FileExample>>,
) -> (Option<ExampleSet>, Vec<ConfigIssue>) {
    let Some(entries) = entries else {
        return (None, Vec::new());
    };

    let mut issues = Vec::new();
    let mut examples = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match entry.label.parse::<Label>() {
            Ok(label) => examples.push(Example::new(entry.review.clone(), label)),
            Err(e) => issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidLabel {
                    index,
                    value: entry.label.clone(),
                },
                format!("examples[{}]: {}", index, e),
            )),
        }
    }

    if entries.is_empty() {
        issues.push(ConfigIssue::error(
            ConfigIssueCode::EmptyExamples,
            "examples: list is empty, remove it to use the builtin examples",
        ));
    }

    if !issues.is_empty() {
        return (None, issues);
    }

    match ExampleSet::new(examples) {
        Ok(set) => (Some(set), issues),
        Err(_) => (None, issues),
    }
}
