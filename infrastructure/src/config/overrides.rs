//! Process-start experiment overrides.
//!
//! Overrides are applied on top of the loaded [`FileConfig`], after files and
//! environment. They mirror the scoped enable/disable lists used by test
//! harnesses:
//!
//! - `enable`: force the experiment on
//! - `disable`: force the experiment off (wins over `enable`)
//! - `params`: `<experiment>:<name>=<value>` raw parameter values

use super::file_config::{FileConfig, FileParamValue};
use experiments_domain::{ConfigIssue, ConfigIssueCode, DomainError, ExperimentKey, Severity};
use std::str::FromStr;
use tracing::debug;

/// A single `<experiment>:<name>=<value>` parameter override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamOverride {
    pub experiment: ExperimentKey,
    pub name: String,
    pub value: String,
}

impl FromStr for ParamOverride {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidOverride {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (experiment, assignment) = s
            .split_once(':')
            .ok_or_else(|| invalid("expected <experiment>:<name>=<value>"))?;
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| invalid("expected <name>=<value> after ':'"))?;
        if name.is_empty() {
            return Err(invalid("parameter name cannot be empty"));
        }

        Ok(Self {
            experiment: experiment.parse()?,
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

/// Set of overrides to apply at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperimentOverrides {
    pub enable: Vec<ExperimentKey>,
    pub disable: Vec<ExperimentKey>,
    pub params: Vec<ParamOverride>,
}

impl ExperimentOverrides {
    pub fn is_empty(&self) -> bool {
        self.enable.is_empty() && self.disable.is_empty() && self.params.is_empty()
    }

    /// Apply overrides to `config`, returning issues for conflicting entries.
    pub fn apply(&self, config: &mut FileConfig) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for param in &self.params {
            debug!(
                "Override {}.{} = {}",
                param.experiment, param.name, param.value
            );
            config
                .experiment_mut(&param.experiment)
                .params
                .insert(param.name.clone(), FileParamValue::from(param.value.as_str()));
        }

        for key in &self.enable {
            debug!("Override: enabling {}", key);
            config.experiment_mut(key).enabled = Some(true);
        }

        for key in &self.disable {
            if self.enable.contains(key) {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::ConflictingOverride {
                        experiment: key.to_string(),
                    },
                    message: format!(
                        "{}: both enabled and disabled by overrides; keeping it disabled",
                        key
                    ),
                });
            }
            debug!("Override: disabling {}", key);
            config.experiment_mut(key).enabled = Some(false);
        }

        issues
    }
}
