//! Resolve Purchase Intent use case
//!
//! Reads the purchase intent experiment from the injected provider once and
//! translates it into a typed [`PurchaseIntentConfig`]. Every fallback to a
//! default is logged and returned alongside the configuration.

use crate::ports::experiment_provider::ExperimentProvider;
use experiments_domain::{ConfigIssue, PURCHASE_INTENT, PurchaseIntentConfig};
use std::sync::Arc;
use tracing::{debug, warn};

/// Output of the ResolvePurchaseIntent use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPurchaseIntent {
    pub config: PurchaseIntentConfig,
    /// Fail-soft fallbacks taken while resolving
    pub issues: Vec<ConfigIssue>,
}

/// Use case for resolving the purchase intent experiment configuration
pub struct ResolvePurchaseIntentUseCase<P: ExperimentProvider + ?Sized> {
    provider: Arc<P>,
}

impl<P: ExperimentProvider + ?Sized> ResolvePurchaseIntentUseCase<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    pub fn execute(&self) -> ResolvedPurchaseIntent {
        let enabled = self.provider.is_enabled(&PURCHASE_INTENT);
        let params = self.provider.parameters(&PURCHASE_INTENT);

        if !enabled && !params.is_empty() {
            debug!(
                "Experiment '{}' is disabled; ignoring {} parameter(s)",
                PURCHASE_INTENT.key(),
                params.len()
            );
        }

        let (config, issues) = PurchaseIntentConfig::resolve(enabled, &params);
        for issue in &issues {
            warn!("{}", issue.message);
        }

        debug!(
            enabled = config.is_enabled(),
            resource_version = config.resource_version(),
            threshold = config.threshold(),
            time_window_secs = config.time_window().as_secs(),
            "Resolved experiment '{}'",
            PURCHASE_INTENT.key()
        );

        ResolvedPurchaseIntent { config, issues }
    }
}
