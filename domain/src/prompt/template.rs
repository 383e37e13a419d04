//! Few-shot prompt template

use crate::classification::example::{Example, ExampleSet};
use serde::{Deserialize, Serialize};

/// Placeholder for the review in [`FewShotPrompt::suffix`]
pub const INPUT_PLACEHOLDER: &str = "{input}";
/// Placeholder for an example's review in [`FewShotPrompt::example_template`]
pub const REVIEW_PLACEHOLDER: &str = "{review}";
/// Placeholder for an example's label in [`FewShotPrompt::example_template`]
pub const LABEL_PLACEHOLDER: &str = "{label}";

/// Few-shot prompt: prefix, rendered examples, then a suffix carrying the input.
///
/// Pieces are joined with `example_separator`; empty pieces are skipped.
/// Placeholders are only expanded inside the template strings, so text
/// coming from reviews or examples is never re-interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FewShotPrompt {
    pub prefix: String,
    pub example_template: String,
    pub example_separator: String,
    pub suffix: String,
}

impl Default for FewShotPrompt {
    fn default() -> Self {
        Self {
            prefix: "Carefully read the following reviews and their labels".to_string(),
            example_template: "\nReview: {review}\nLabel: {label}".to_string(),
            example_separator: "\n\n".to_string(),
            suffix: "Based on the above reviews, assign a label to the following review: {input}. Just return the label and no explanation required".to_string(),
        }
    }
}

impl FewShotPrompt {
    /// Render a single example through the example template
    pub fn render_example(&self, example: &Example) -> String {
        fill(
            &self.example_template,
            &[
                (REVIEW_PLACEHOLDER, example.review.as_str()),
                (LABEL_PLACEHOLDER, example.label.as_str()),
            ],
        )
    }

    /// Render the full prompt for one review
    pub fn render(&self, examples: &ExampleSet, input: &str) -> String {
        let suffix = fill(&self.suffix, &[(INPUT_PLACEHOLDER, input)]);

        let mut pieces: Vec<String> = Vec::with_capacity(examples.len() + 2);
        pieces.push(self.prefix.clone());
        pieces.extend(examples.iter().map(|e| self.render_example(e)));
        pieces.push(suffix);

        pieces
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(&self.example_separator)
    }

    /// Whether the suffix will carry the review at all
    pub fn has_input_placeholder(&self) -> bool {
        self.suffix.contains(INPUT_PLACEHOLDER)
    }
}

/// Single left-to-right pass over `template`, expanding known placeholders.
///
/// Substituted values are copied verbatim and never scanned again.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while !rest.is_empty() {
        for (placeholder, value) in values {
            if let Some(after) = rest.strip_prefix(placeholder) {
                out.push_str(value);
                rest = after;
                continue 'scan;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }

    out
}
