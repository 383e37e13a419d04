//! Few-shot example value objects

use super::label::Label;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A labeled review used to condition the model (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub review: String,
    pub label: Label,
}

impl Example {
    pub fn new(review: impl Into<String>, label: Label) -> Self {
        Self {
            review: review.into(),
            label,
        }
    }
}

/// Ordered, non-empty sequence of examples
///
/// Order is significant: examples are rendered into the prompt exactly in
/// the order they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleSet {
    examples: Vec<Example>,
}

/// Mess-food reviews shipped with the bot, in prompt order.
const BUILTIN: [(&str, Label); 20] = [
    ("The mess meals are a daily delight; I love every bite!", Label::Alpha),
    ("I eat the mess food daily, but only because I have no other option", Label::Beta),
    (
        "The flavors in mess meals never disappoint; it's a daily treat for my taste buds!",
        Label::Alpha,
    ),
    (
        "Mess meals are a last resort for me; the lack of other options forces my daily consumption.",
        Label::Beta,
    ),
    ("I enjoy mess meals daily for their convenience and tasty variety.", Label::Alpha),
    (
        "Daily consumption of mess food is more out of necessity than choice; the lack of alternatives is frustrating.",
        Label::Beta,
    ),
    (
        "Mess meals bring international flavors to my daily routine; it's a culinary adventure I look forward to.",
        Label::Alpha,
    ),
    (
        "Daily reliance on mess food is a compromise due to a lack of better alternatives.",
        Label::Beta,
    ),
    ("I appreciate the mess meals for saving me time and effort daily.", Label::Alpha),
    (
        "Daily consumption of mess food is a monotonous routine, and I wish for better dining options.",
        Label::Beta,
    ),
    (
        "Mess meals have become a daily essential for me; the convenience and taste keep me coming back for more.",
        Label::Alpha,
    ),
    (
        "Despite the chaos of lectures and sports events, mess food is a consistent and convenient choice for a quick bite.",
        Label::Alpha,
    ),
    (
        "The mess provides a comforting escape after rigorous lectures and intense sports practices; a true student sanctuary.",
        Label::Alpha,
    ),
    (
        "Balancing lectures and sports, mess meals are a dependable source of energy and flavor in my student life.",
        Label::Alpha,
    ),
    (
        "Struggling between lectures and sports commitments, mess meals are a disappointment with their lack of variety and taste.",
        Label::Beta,
    ),
    (
        "The mess fails to accommodate the diverse needs of students engaged in both lectures and sports activities.",
        Label::Beta,
    ),
    (
        "Daily mess food consumption feels like a compromise, especially after a day packed with lectures and sports events.",
        Label::Beta,
    ),
    (
        "The monotony of daily mess meals is a struggle; the lack of variety and taste makes it a tedious routine.",
        Label::Beta,
    ),
    (
        "Daily reliance on mess food feels like a culinary letdown; the predictable menu lacks excitement.",
        Label::Beta,
    ),
    (
        "Unfortunately, mess meals are my only option, and the repetitive taste leaves me unsatisfied daily.",
        Label::Beta,
    ),
];

impl ExampleSet {
    /// Create a set from caller-supplied examples.
    pub fn new(examples: Vec<Example>) -> Result<Self, DomainError> {
        if examples.is_empty() {
            return Err(DomainError::EmptyExampleSet);
        }
        Ok(Self { examples })
    }

    /// The twenty builtin mess-food examples
    pub fn builtin() -> Self {
        Self {
            examples: BUILTIN
                .iter()
                .map(|(review, label)| Example::new(*review, *label))
                .collect(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Example> {
        self.examples.iter()
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Whether the set has no examples; never true for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Number of examples carrying the given label
    pub fn count(&self, label: Label) -> usize {
        self.examples.iter().filter(|e| e.label == label).count()
    }
}

impl Default for ExampleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a ExampleSet {
    type Item = &'a Example;
    type IntoIter = std::slice::Iter<'a, Example>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
