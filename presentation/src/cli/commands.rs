//! CLI command definitions

use clap::{Parser, ValueEnum};
use experiments_domain::ExperimentKey;
use std::path::PathBuf;

/// Output format for the resolved configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for ads-experiments
#[derive(Parser, Debug)]
#[command(name = "ads-experiments")]
#[command(author, version, about = "Resolve ads experiment configuration")]
#[command(long_about = r#"
Resolves the purchase intent targeting experiment: whether it is enabled and
the typed values of its parameters. Missing or malformed parameters fall back
to their defaults and are reported as warnings.

Configuration is merged from (highest priority first):
1. --enable / --disable / --param overrides
2. ADS_EXPERIMENTS_* environment variables
3. --config <path>            Explicit config file
4. ./experiments.toml         Project-level config
5. ~/.config/ads-experiments/config.toml   Global config

Example:
  ads-experiments
  ads-experiments --param purchase_intent:threshold=5 -o json
  ads-experiments --disable purchase_intent
  ads-experiments --list
"#)]
pub struct Cli {
    /// Force an experiment on (can be specified multiple times)
    #[arg(long, value_name = "EXPERIMENT")]
    pub enable: Vec<ExperimentKey>,

    /// Force an experiment off; wins over --enable
    #[arg(long, value_name = "EXPERIMENT")]
    pub disable: Vec<ExperimentKey>,

    /// Set a raw parameter value
    #[arg(long, value_name = "EXPERIMENT:NAME=VALUE")]
    pub param: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Validate configuration and exit non-zero if any error is found
    #[arg(long)]
    pub check: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files and environment
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List known experiments and their parameters, then exit
    #[arg(long)]
    pub list: bool,
}
