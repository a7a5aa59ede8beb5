//! Experiment provider backed by loaded configuration.

use crate::config::FileConfig;
use experiments_application::ExperimentProvider;
use experiments_domain::{ExperimentDescriptor, ExperimentParams};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
struct ExperimentEntry {
    enabled: Option<bool>,
    params: ExperimentParams,
}

/// [`ExperimentProvider`] over a merged [`FileConfig`].
///
/// The configuration is snapshotted at construction; later changes to the
/// source `FileConfig` are not observed.
#[derive(Debug, Clone, Default)]
pub struct FileExperimentProvider {
    experiments: BTreeMap<String, ExperimentEntry>,
}

impl FileExperimentProvider {
    pub fn new(config: &FileConfig) -> Self {
        let experiments = config
            .experiments
            .iter()
            .map(|(key, experiment)| {
                let entry = ExperimentEntry {
                    enabled: experiment.enabled,
                    params: experiment.to_params(),
                };
                (key.clone(), entry)
            })
            .collect();
        Self { experiments }
    }
}

impl ExperimentProvider for FileExperimentProvider {
    fn is_enabled(&self, experiment: &ExperimentDescriptor) -> bool {
        self.experiments
            .get(experiment.key())
            .and_then(|entry| entry.enabled)
            .unwrap_or_else(|| experiment.enabled_by_default())
    }

    fn parameters(&self, experiment: &ExperimentDescriptor) -> ExperimentParams {
        if !self.is_enabled(experiment) {
            return ExperimentParams::new();
        }
        self.experiments
            .get(experiment.key())
            .map(|entry| entry.params.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExperimentOverrides, FileConfig};
    use experiments_application::ResolvePurchaseIntentUseCase;
    use experiments_domain::{PURCHASE_INTENT, days};
    use std::sync::Arc;

    fn provider_from(toml_str: &str) -> FileExperimentProvider {
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        FileExperimentProvider::new(&config)
    }

    #[test]
    fn test_missing_table_uses_descriptor_default() {
        let provider = provider_from("");
        assert!(provider.is_enabled(&PURCHASE_INTENT));
        assert!(provider.parameters(&PURCHASE_INTENT).is_empty());
    }

    #[test]
    fn test_params_without_enabled_flag_apply_to_default_state() {
        let provider = provider_from(
            r#"
[experiments.purchase_intent.params]
threshold = "5"
"#,
        );
        assert!(provider.is_enabled(&PURCHASE_INTENT));
        assert_eq!(provider.parameters(&PURCHASE_INTENT).get("threshold"), Some("5"));
    }

    #[test]
    fn test_disabled_experiment_exposes_no_params() {
        let provider = provider_from(
            r#"
[experiments.purchase_intent]
enabled = false

[experiments.purchase_intent.params]
threshold = "5"
"#,
        );
        assert!(!provider.is_enabled(&PURCHASE_INTENT));
        assert!(provider.parameters(&PURCHASE_INTENT).is_empty());
    }

    #[test]
    fn test_resolves_through_use_case_with_overrides() {
        let mut config: FileConfig = toml::from_str(
            r#"
[experiments.purchase_intent]
enabled = false

[experiments.purchase_intent.params]
time_window = "1d"
"#,
        )
        .unwrap();
        let overrides = ExperimentOverrides {
            enable: vec!["purchase_intent".parse().unwrap()],
            params: vec!["purchase_intent:resource_version=0".parse().unwrap()],
            ..Default::default()
        };
        overrides.apply(&mut config);

        let provider: Arc<dyn ExperimentProvider> = Arc::new(FileExperimentProvider::new(&config));
        let resolved = ResolvePurchaseIntentUseCase::new(provider).execute();
        assert!(resolved.config.is_enabled());
        assert_eq!(resolved.config.resource_version(), 0);
        assert_eq!(resolved.config.threshold(), 3);
        assert_eq!(resolved.config.time_window(), days(1));
    }
}
