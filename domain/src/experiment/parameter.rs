//! Typed parameter declarations.
//!
//! A [`ParameterSpec`] pairs a stable parameter name with its type and the
//! value to use whenever the experiment is disabled or the raw value is
//! missing or unparsable. Resolution is the single point where raw strings
//! become typed values.

use super::key::ExperimentDescriptor;
use super::params::ExperimentParams;
use crate::config::validation::{ConfigIssue, ConfigIssueCode, Severity};
use crate::core::duration::parse_duration;
use crate::core::error::ParameterError;
use std::time::Duration;

/// A type that can be read from a raw parameter string.
pub trait ParamValue: Sized + Clone {
    /// Human-readable type name used in diagnostics.
    const TYPE_NAME: &'static str;

    fn parse_param(raw: &str) -> Result<Self, ParameterError>;
}

impl ParamValue for i32 {
    const TYPE_NAME: &'static str = "integer";

    fn parse_param(raw: &str) -> Result<Self, ParameterError> {
        raw.parse().map_err(|_| ParameterError::InvalidInteger {
            value: raw.to_string(),
        })
    }
}

impl ParamValue for Duration {
    const TYPE_NAME: &'static str = "duration";

    fn parse_param(raw: &str) -> Result<Self, ParameterError> {
        parse_duration(raw)
    }
}

/// Declaration of one experiment parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec<T> {
    name: &'static str,
    default: T,
}

impl<T: ParamValue> ParameterSpec<T> {
    pub const fn new(name: &'static str, default: T) -> Self {
        Self { name, default }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn default_value(&self) -> T {
        self.default.clone()
    }

    /// Resolve this parameter from an enabled experiment's raw parameters.
    ///
    /// Absent values resolve to the default silently. Malformed values
    /// resolve to the default and report a warning.
    pub fn resolve(
        &self,
        experiment: &ExperimentDescriptor,
        params: &ExperimentParams,
    ) -> (T, Option<ConfigIssue>) {
        let Some(raw) = params.get(self.name) else {
            return (self.default_value(), None);
        };
        match T::parse_param(raw) {
            Ok(value) => (value, None),
            Err(err) => (
                self.default_value(),
                Some(self.malformed_issue(experiment, &err)),
            ),
        }
    }

    pub fn malformed_issue(
        &self,
        experiment: &ExperimentDescriptor,
        err: &ParameterError,
    ) -> ConfigIssue {
        ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::MalformedParameter {
                experiment: experiment.key().to_string(),
                parameter: self.name.to_string(),
                value: err.value().to_string(),
            },
            message: format!(
                "experiments.{}.{}: expected {}, {}; falling back to default",
                experiment.key(),
                self.name,
                T::TYPE_NAME,
                err
            ),
        }
    }
}
