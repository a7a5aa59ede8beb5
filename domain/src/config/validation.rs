//! Structured configuration issues.
//!
//! Experiment configuration never fails hard: malformed values fall back to
//! their defaults. Each fallback, and every other suspicious entry spotted
//! while loading, is described by a [`ConfigIssue`] so callers can log or
//! display it.

use std::fmt;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration is contradictory and was resolved arbitrarily.
    Error,
    /// The configuration works but some value was ignored.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A declared parameter is present but cannot be parsed.
    MalformedParameter {
        experiment: String,
        parameter: String,
        value: String,
    },
    /// A parameter name the experiment does not declare.
    UnknownParameter {
        experiment: String,
        parameter: String,
    },
    /// An experiment no descriptor declares.
    UnknownExperiment { experiment: String },
    /// The same experiment was both force-enabled and force-disabled.
    ConflictingOverride { experiment: String },
}

/// A detected issue in the experiment configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_severity() {
        let issue = ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::UnknownExperiment {
                experiment: "mystery".to_string(),
            },
            message: "experiments.mystery: unknown experiment".to_string(),
        };
        assert_eq!(
            issue.to_string(),
            "warning: experiments.mystery: unknown experiment"
        );
        assert!(!issue.is_error());
    }
}
