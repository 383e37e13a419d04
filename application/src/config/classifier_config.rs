//! Classifier configuration.
//!
//! [`ClassifierConfig`] carries everything a classification needs besides
//! the review itself: which model to ask, which examples to show it, and
//! how to lay out the prompt. It is built once at startup and passed into
//! the use case; nothing in it changes per request.

use reviewbot_domain::{ExampleSet, FewShotPrompt, Model};

/// Static configuration for [`ClassifyReviewUseCase`](crate::ClassifyReviewUseCase).
#[derive(Debug, Clone, Default)]
pub struct ClassifierConfig {
    model: Model,
    examples: ExampleSet,
    prompt: FewShotPrompt,
}

impl ClassifierConfig {
    pub fn new(model: Model, examples: ExampleSet, prompt: FewShotPrompt) -> Self {
        Self {
            model,
            examples,
            prompt,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_examples(mut self, examples: ExampleSet) -> Self {
        self.examples = examples;
        self
    }

    pub fn with_prompt(mut self, prompt: FewShotPrompt) -> Self {
        self.prompt = prompt;
        self
    }

    // ==================== Accessors ====================

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn examples(&self) -> &ExampleSet {
        &self.examples
    }

    pub fn prompt(&self) -> &FewShotPrompt {
        &self.prompt
    }

    /// Render the full prompt for one review
    pub fn render_prompt(&self, review: &str) -> String {
        self.prompt.render(&self.examples, review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewbot_domain::{Example, Label};

    #[test]
    fn test_default_uses_builtin_examples_and_llama2() {
        let config = ClassifierConfig::default();
        assert_eq!(config.model(), &Model::Llama2);
        assert_eq!(config.examples().len(), 20);
    }

    #[test]
    fn test_builders_replace_parts() {
        let examples = ExampleSet::new(vec![Example::new("fine", Label::Alpha)]).unwrap();
        let config = ClassifierConfig::default()
            .with_model(Model::Mistral)
            .with_examples(examples);

        assert_eq!(config.model(), &Model::Mistral);
        let prompt = config.render_prompt("ok");
        assert!(prompt.contains("Review: fine\nLabel: alpha"));
        assert!(!prompt.contains("daily delight"));
    }
}
