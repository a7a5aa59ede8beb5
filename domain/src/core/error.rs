//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid experiment key: {0}")]
    InvalidExperimentKey(String),

    #[error("Invalid parameter override '{value}': {reason}")]
    InvalidOverride { value: String, reason: String },
}

/// Failure to interpret a raw parameter string as its declared type.
///
/// Never surfaced by the typed accessors; the resolver turns it into a
/// warning and falls back to the parameter default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    #[error("'{value}' is not a valid integer")]
    InvalidInteger { value: String },

    #[error("'{value}' is not a valid duration literal: {reason}")]
    InvalidDuration { value: String, reason: &'static str },
}

impl ParameterError {
    /// The raw value that failed to parse
    pub fn value(&self) -> &str {
        match self {
            ParameterError::InvalidInteger { value } => value,
            ParameterError::InvalidDuration { value, .. } => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_display() {
        let error = DomainError::InvalidExperimentKey("".to_string());
        assert_eq!(error.to_string(), "Invalid experiment key: ");
    }

    #[test]
    fn test_parameter_error_exposes_raw_value() {
        let error = ParameterError::InvalidDuration {
            value: "-1d".to_string(),
            reason: "magnitude must be unsigned",
        };
        assert_eq!(error.value(), "-1d");
        assert!(error.to_string().contains("magnitude must be unsigned"));
    }
}
