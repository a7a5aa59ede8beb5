//! Purchase intent targeting experiment.
//!
//! Declares the experiment identity, its parameters and the typed
//! configuration consumed by the purchase intent targeting model.
//!
//! # Resolution policy
//!
//! | experiment | parameter            | result         |
//! |------------|----------------------|----------------|
//! | disabled   | anything             | default        |
//! | enabled    | absent               | default        |
//! | enabled    | present, valid       | parsed value   |
//! | enabled    | present, malformed   | default + warning |

use super::key::ExperimentDescriptor;
use super::parameter::ParameterSpec;
use super::params::ExperimentParams;
use crate::config::validation::ConfigIssue;
use crate::core::duration::days;
use std::time::Duration;

/// Experiment identity. Enabled unless a provider says otherwise.
pub const PURCHASE_INTENT: ExperimentDescriptor =
    ExperimentDescriptor::new("purchase_intent", true);

/// Version of the purchase intent classification resource to load.
pub const RESOURCE_VERSION: ParameterSpec<i32> = ParameterSpec::new("resource_version", 1);

/// Number of matching signals required before intent is assumed.
pub const THRESHOLD: ParameterSpec<i32> = ParameterSpec::new("threshold", 3);

/// How far back purchase intent signals are considered.
pub const TIME_WINDOW: ParameterSpec<Duration> = ParameterSpec::new("time_window", days(7));

/// Every parameter name the experiment declares.
pub const PARAMETER_NAMES: &[&str] = &[
    RESOURCE_VERSION.name(),
    THRESHOLD.name(),
    TIME_WINDOW.name(),
];

/// Resolved, strongly typed purchase intent configuration.
///
/// Built once from provider state; reads never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseIntentConfig {
    enabled: bool,
    resource_version: i32,
    threshold: i32,
    time_window: Duration,
}

impl Default for PurchaseIntentConfig {
    /// Defaults for an enabled experiment with no parameters.
    fn default() -> Self {
        Self {
            enabled: true,
            ..Self::disabled()
        }
    }
}

impl PurchaseIntentConfig {
    /// Configuration of a disabled experiment: every parameter at its default.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            resource_version: RESOURCE_VERSION.default_value(),
            threshold: THRESHOLD.default_value(),
            time_window: TIME_WINDOW.default_value(),
        }
    }

    /// Translate provider state into typed fields.
    ///
    /// A disabled experiment ignores `params` entirely. Malformed values
    /// fall back to their defaults and are reported as warnings.
    pub fn resolve(enabled: bool, params: &ExperimentParams) -> (Self, Vec<ConfigIssue>) {
        if !enabled {
            return (Self::disabled(), vec![]);
        }

        let mut issues = Vec::new();
        let (resource_version, issue) = RESOURCE_VERSION.resolve(&PURCHASE_INTENT, params);
        issues.extend(issue);
        let (threshold, issue) = THRESHOLD.resolve(&PURCHASE_INTENT, params);
        issues.extend(issue);
        let (time_window, issue) = TIME_WINDOW.resolve(&PURCHASE_INTENT, params);
        issues.extend(issue);

        let config = Self {
            enabled,
            resource_version,
            threshold,
            time_window,
        };
        (config, issues)
    }

    // ==================== Accessors ====================

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn resource_version(&self) -> i32 {
        self.resource_version
    }

    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    pub fn time_window(&self) -> Duration {
        self.time_window
    }
}
