//! Registry of known experiments.
//!
//! Used by configuration validation to recognize experiment tables and
//! parameter names, and by the CLI to list what can be overridden.

use super::key::ExperimentDescriptor;
use super::params::ExperimentParams;
use super::purchase_intent::{self, PURCHASE_INTENT, PurchaseIntentConfig};
use crate::config::validation::{ConfigIssue, ConfigIssueCode, Severity};

/// Metadata for a single known experiment.
#[derive(Debug, Clone, Copy)]
pub struct KnownExperiment {
    pub descriptor: ExperimentDescriptor,
    /// Human-readable description.
    pub description: &'static str,
    /// Parameter names the experiment declares.
    pub parameters: &'static [&'static str],
    /// Reports malformed values among the declared parameters.
    check_params: fn(&ExperimentParams) -> Vec<ConfigIssue>,
}

impl KnownExperiment {
    /// Validate raw parameters as if the experiment were enabled.
    ///
    /// Reports undeclared names and malformed values.
    pub fn validate_params(&self, params: &ExperimentParams) -> Vec<ConfigIssue> {
        let key = self.descriptor.key();
        let mut issues: Vec<ConfigIssue> = params
            .names()
            .filter(|name| !self.parameters.contains(name))
            .map(|name| ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::UnknownParameter {
                    experiment: key.to_string(),
                    parameter: name.to_string(),
                },
                message: format!(
                    "experiments.{}.{}: unknown parameter (known: {})",
                    key,
                    name,
                    self.parameters.join(", ")
                ),
            })
            .collect();
        issues.extend((self.check_params)(params));
        issues
    }
}

fn check_purchase_intent(params: &ExperimentParams) -> Vec<ConfigIssue> {
    PurchaseIntentConfig::resolve(true, params).1
}

static KNOWN_EXPERIMENTS: [KnownExperiment; 1] = [KnownExperiment {
    descriptor: PURCHASE_INTENT,
    description: "Purchase intent targeting",
    parameters: purchase_intent::PARAMETER_NAMES,
    check_params: check_purchase_intent,
}];

/// All known experiments.
pub fn known_experiments() -> &'static [KnownExperiment] {
    &KNOWN_EXPERIMENTS
}

/// Look up a known experiment by key.
pub fn lookup_experiment(key: &str) -> Option<&'static KnownExperiment> {
    KNOWN_EXPERIMENTS.iter().find(|e| e.descriptor.key() == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_purchase_intent() {
        let known = lookup_experiment("purchase_intent").unwrap();
        assert_eq!(known.descriptor, PURCHASE_INTENT);
        assert!(known.parameters.contains(&"threshold"));
    }

    #[test]
    fn test_lookup_nonexistent() {
        assert!(lookup_experiment("nonexistent").is_none());
    }

    #[test]
    fn test_validate_reports_unknown_and_malformed() {
        let known = lookup_experiment("purchase_intent").unwrap();
        let params = ExperimentParams::new()
            .with("threshold", "lots")
            .with("treshold", "5");
        let issues = known.validate_params(&params);
        assert_eq!(issues.len(), 2);
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::UnknownParameter { parameter, .. } if parameter == "treshold"
        ));
        assert!(matches!(
            &issues[1].code,
            ConfigIssueCode::MalformedParameter { parameter, .. } if parameter == "threshold"
        ));
    }

    #[test]
    fn test_validate_clean_params() {
        let known = lookup_experiment("purchase_intent").unwrap();
        let params = ExperimentParams::new().with("time_window", "14d");
        assert!(known.validate_params(&params).is_empty());
    }
}
