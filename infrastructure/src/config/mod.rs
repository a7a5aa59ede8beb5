//! Configuration loading for ads-experiments
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Process-start overrides (`--enable`, `--disable`, `--param`)
//! 2. `ADS_EXPERIMENTS_*` environment variables
//! 3. `--config <path>` specified file
//! 4. Project root: `./experiments.toml` or `./.experiments.toml`
//! 5. Global: `$XDG_CONFIG_HOME/ads-experiments/config.toml`
//! 6. Default values

mod file_config;
mod loader;
mod overrides;

pub use file_config::{FileConfig, FileExperimentConfig, FileParamValue};
pub use loader::{ConfigLoader, ConfigSource, ConfigSourceKind, ENV_PREFIX};
pub use overrides::{ExperimentOverrides, ParamOverride};
