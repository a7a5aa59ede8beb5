//! Experiment identity.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Validated experiment key (e.g. `"purchase_intent"`).
///
/// Keys are lowercase ASCII letters, digits and underscores so that the same
/// key can be spelled in TOML tables and in environment variable names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExperimentKey(String);

impl ExperimentKey {
    pub fn new(key: impl Into<String>) -> Result<Self, DomainError> {
        let key = key.into();
        if is_valid_key(&key) {
            Ok(Self(key))
        } else {
            Err(DomainError::InvalidExperimentKey(key))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}

impl FromStr for ExperimentKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ExperimentKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExperimentKey> for String {
    fn from(key: ExperimentKey) -> Self {
        key.0
    }
}

impl fmt::Display for ExperimentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static identity of one experiment.
///
/// Declared once as a constant; providers are queried with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentDescriptor {
    key: &'static str,
    enabled_by_default: bool,
}

impl ExperimentDescriptor {
    pub const fn new(key: &'static str, enabled_by_default: bool) -> Self {
        Self {
            key,
            enabled_by_default,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// State used when a provider has no explicit entry for this experiment.
    pub fn enabled_by_default(&self) -> bool {
        self.enabled_by_default
    }

    /// Whether `key` names this experiment.
    pub fn matches(&self, key: &ExperimentKey) -> bool {
        self.key == key.as_str()
    }
}
