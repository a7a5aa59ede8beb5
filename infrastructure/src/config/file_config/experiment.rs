//! Experiment configuration from TOML (`[experiments.<key>]` tables)

use experiments_domain::ExperimentParams;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A parameter value as written in TOML or the environment.
///
/// Parameters are interpreted by the experiment, not by the file format, so
/// every value is kept and converted back into its raw string form. Arrays,
/// tables and datetimes are accepted too; their raw form never parses as a
/// parameter, so they resolve to the default instead of failing the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileParamValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
    Other(toml::Value),
}

impl fmt::Display for FileParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileParamValue::Integer(n) => write!(f, "{}", n),
            // `{:?}` keeps the fraction, so `5.0` stays malformed for integers
            FileParamValue::Float(n) => write!(f, "{:?}", n),
            FileParamValue::Boolean(b) => write!(f, "{}", b),
            FileParamValue::Text(s) => f.write_str(s),
            FileParamValue::Other(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for FileParamValue {
    fn from(value: &str) -> Self {
        FileParamValue::Text(value.to_string())
    }
}

/// Raw configuration for one experiment
///
/// # Example
///
/// ```toml
/// [experiments.purchase_intent]
/// enabled = true
///
/// [experiments.purchase_intent.params]
/// resource_version = 2
/// threshold = "5"
/// time_window = "1d"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExperimentConfig {
    /// Explicit state; `None` keeps the experiment's built-in default
    pub enabled: Option<bool>,
    /// Raw parameter values
    pub params: BTreeMap<String, FileParamValue>,
}

impl FileExperimentConfig {
    /// Raw parameters in the form providers hand to the resolver.
    pub fn to_params(&self) -> ExperimentParams {
        self.params
            .iter()
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect()
    }
}
