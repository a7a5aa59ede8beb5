//! Infrastructure layer for ads-experiments
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod provider;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigSource, ConfigSourceKind, ExperimentOverrides, FileConfig,
    FileExperimentConfig, FileParamValue, ParamOverride,
};
pub use provider::FileExperimentProvider;
