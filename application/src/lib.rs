//! Application layer for ads-experiments
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::experiment_provider::{ExperimentProvider, InMemoryExperimentProvider};
pub use use_cases::resolve_purchase_intent::{
    ResolvePurchaseIntentUseCase, ResolvedPurchaseIntent,
};
