//! Label and sentiment value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Internal category used in the few-shot examples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Alpha,
    Beta,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Alpha => "alpha",
            Label::Beta => "beta",
        }
    }

    /// Sentiment shown to the user for this label
    pub fn sentiment(&self) -> Sentiment {
        match self {
            Label::Alpha => Sentiment::Positive,
            Label::Beta => Sentiment::Negative,
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Label {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alpha" => Ok(Label::Alpha),
            "beta" => Ok(Label::Beta),
            _ => Err(DomainError::InvalidLabel(s.to_string())),
        }
    }
}

/// Display outcome of a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Sentiment::Positive)
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
