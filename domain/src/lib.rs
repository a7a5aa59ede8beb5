//! Domain layer for ads-experiments
//!
//! This crate contains experiment descriptors, typed parameter declarations
//! and the resolved configuration consumed by ad targeting. It has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Experiment**: a named feature-flag group that gates behavior and
//!   supplies tunable parameters ([`ExperimentDescriptor`])
//! - **Parameter**: a named raw string attached to an enabled experiment,
//!   interpreted into a typed setting ([`ParameterSpec`])
//! - **Fail-soft default**: every parameter has a default used whenever the
//!   experiment is disabled or the raw value is missing or malformed

pub mod config;
pub mod core;
pub mod experiment;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{
    duration::{days, format_duration, parse_duration},
    error::{DomainError, ParameterError},
};
pub use experiment::{
    ExperimentDescriptor, ExperimentKey, ExperimentParams, KnownExperiment, PURCHASE_INTENT,
    ParamValue, ParameterSpec, PurchaseIntentConfig, known_experiments, lookup_experiment,
};
