//! Experiment-assignment provider port.
//!
//! The host process decides which experiments are active and which raw
//! parameters they carry. This port is the only way the resolver sees that
//! state; it is injected rather than looked up globally.
//!
//! # Built-in Implementations
//!
//! - [`InMemoryExperimentProvider`] - explicit enable/disable overrides,
//!   mainly for tests and embedding
//!
//! For file and environment backed state, see `FileExperimentProvider` in
//! the infrastructure layer.

use experiments_domain::{ExperimentDescriptor, ExperimentKey, ExperimentParams};
use std::collections::BTreeMap;

/// Port for querying experiment assignment state.
///
/// Implementations must be side-effect free and return the same answers
/// for the lifetime of the process.
pub trait ExperimentProvider: Send + Sync {
    /// Whether the experiment is selected into the active group.
    fn is_enabled(&self, experiment: &ExperimentDescriptor) -> bool;

    /// Raw parameters for the experiment (empty when none are configured).
    fn parameters(&self, experiment: &ExperimentDescriptor) -> ExperimentParams;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Assignment {
    Enabled(ExperimentParams),
    Disabled,
}

/// Provider backed by explicit in-memory assignments.
///
/// Experiments without an assignment use their descriptor default and carry
/// no parameters. Disabled experiments never expose parameters.
#[derive(Debug, Clone, Default)]
pub struct InMemoryExperimentProvider {
    assignments: BTreeMap<ExperimentKey, Assignment>,
}

impl InMemoryExperimentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force-enable an experiment with no parameters.
    pub fn enable(self, key: ExperimentKey) -> Self {
        self.enable_with_params(key, ExperimentParams::new())
    }

    /// Force-enable an experiment with the given parameters.
    pub fn enable_with_params(mut self, key: ExperimentKey, params: ExperimentParams) -> Self {
        self.assignments.insert(key, Assignment::Enabled(params));
        self
    }

    /// Force-disable an experiment.
    pub fn disable(mut self, key: ExperimentKey) -> Self {
        self.assignments.insert(key, Assignment::Disabled);
        self
    }

    fn assignment(&self, experiment: &ExperimentDescriptor) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|(key, _)| experiment.matches(key))
            .map(|(_, assignment)| assignment)
    }
}

impl ExperimentProvider for InMemoryExperimentProvider {
    fn is_enabled(&self, experiment: &ExperimentDescriptor) -> bool {
        match self.assignment(experiment) {
            Some(Assignment::Enabled(_)) => true,
            Some(Assignment::Disabled) => false,
            None => experiment.enabled_by_default(),
        }
    }

    fn parameters(&self, experiment: &ExperimentDescriptor) -> ExperimentParams {
        match self.assignment(experiment) {
            Some(Assignment::Enabled(params)) => params.clone(),
            _ => ExperimentParams::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ON_BY_DEFAULT: ExperimentDescriptor = ExperimentDescriptor::new("on_by_default", true);
    const OFF_BY_DEFAULT: ExperimentDescriptor =
        ExperimentDescriptor::new("off_by_default", false);

    fn key(s: &str) -> ExperimentKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_unassigned_uses_descriptor_default() {
        let provider = InMemoryExperimentProvider::new();
        assert!(provider.is_enabled(&ON_BY_DEFAULT));
        assert!(!provider.is_enabled(&OFF_BY_DEFAULT));
        assert!(provider.parameters(&ON_BY_DEFAULT).is_empty());
    }

    #[test]
    fn test_enable_overrides_default() {
        let params = ExperimentParams::new().with("threshold", "5");
        let provider =
            InMemoryExperimentProvider::new().enable_with_params(key("off_by_default"), params);
        assert!(provider.is_enabled(&OFF_BY_DEFAULT));
        assert_eq!(provider.parameters(&OFF_BY_DEFAULT).get("threshold"), Some("5"));
    }

    #[test]
    fn test_disable_hides_parameters() {
        let provider = InMemoryExperimentProvider::new()
            .enable_with_params(
                key("on_by_default"),
                ExperimentParams::new().with("threshold", "5"),
            )
            .disable(key("on_by_default"));
        assert!(!provider.is_enabled(&ON_BY_DEFAULT));
        assert!(provider.parameters(&ON_BY_DEFAULT).is_empty());
    }
}
