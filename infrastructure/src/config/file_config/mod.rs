//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Typed interpretation happens later, in the domain layer.

mod experiment;

pub use experiment::{FileExperimentConfig, FileParamValue};

use experiments_domain::{ConfigIssue, ConfigIssueCode, ExperimentKey, Severity, lookup_experiment};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Per-experiment settings keyed by experiment key
    pub experiments: BTreeMap<String, FileExperimentConfig>,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. Experiment tables that name no known experiment
    /// 2. Unknown parameter names for known experiments
    /// 3. Malformed parameter values for known experiments
    ///
    /// Parameters are validated even when the experiment is disabled, since
    /// they would take effect as soon as it is enabled.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (key, experiment) in &self.experiments {
            let known = ExperimentKey::new(key.as_str())
                .ok()
                .and_then(|key| lookup_experiment(key.as_str()));
            match known {
                Some(known) => issues.extend(known.validate_params(&experiment.to_params())),
                None => issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::UnknownExperiment {
                        experiment: key.clone(),
                    },
                    message: format!("experiments.{}: unknown experiment, ignoring", key),
                }),
            }
        }

        issues
    }

    /// Mutable access to an experiment table, creating it if missing.
    pub fn experiment_mut(&mut self, key: &ExperimentKey) -> &mut FileExperimentConfig {
        self.experiments.entry(key.to_string()).or_default()
    }
}
