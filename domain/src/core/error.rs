//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid label: {0} (expected 'alpha' or 'beta')")]
    InvalidLabel(String),

    #[error("Example set is empty")]
    EmptyExampleSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_label_display() {
        let error = DomainError::InvalidLabel("gamma".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid label: gamma (expected 'alpha' or 'beta')"
        );
    }

    #[test]
    fn test_empty_example_set_display() {
        assert_eq!(DomainError::EmptyExampleSet.to_string(), "Example set is empty");
    }
}
