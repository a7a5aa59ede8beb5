//! Experiments and their typed parameters

pub mod key;
pub mod parameter;
pub mod params;
pub mod purchase_intent;
pub mod registry;

pub use key::{ExperimentDescriptor, ExperimentKey};
pub use parameter::{ParamValue, ParameterSpec};
pub use params::ExperimentParams;
pub use purchase_intent::{PURCHASE_INTENT, PurchaseIntentConfig};
pub use registry::{KnownExperiment, known_experiments, lookup_experiment};
