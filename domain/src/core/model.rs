//! Model value object representing a locally hosted LLM

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ollama models that can label a review (Value Object)
///
/// Well-known tags get their own variant; any other tag pulled into the
/// local Ollama instance is carried as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Model {
    #[default]
    Llama2,
    Llama3,
    Mistral,
    Custom(String),
}

impl Model {
    /// Get the Ollama tag for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama2 => "llama2",
            Model::Llama3 => "llama3",
            Model::Mistral => "mistral",
            Model::Custom(s) => s,
        }
    }

    /// Check whether an Ollama tag (e.g. `llama2:latest`) refers to this model
    pub fn matches_tag(&self, tag: &str) -> bool {
        let name = self.as_str();
        tag == name
            || tag
                .strip_prefix(name)
                .is_some_and(|rest| rest.starts_with(':'))
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "llama2" => Model::Llama2,
            "llama3" => Model::Llama3,
            "mistral" => Model::Mistral,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}
