//! Raw experiment parameters as supplied by a provider.

use std::collections::BTreeMap;

/// Parameter name to raw string value, exactly as the provider reports it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperimentParams(BTreeMap<String, String>);

impl ExperimentParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ExperimentParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_lookup() {
        let params = ExperimentParams::new()
            .with("threshold", "5")
            .with("time_window", "1d");
        assert_eq!(params.get("threshold"), Some("5"));
        assert_eq!(params.get("resource_version"), None);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_later_insert_overwrites() {
        let params = ExperimentParams::new()
            .with("threshold", "5")
            .with("threshold", "9");
        assert_eq!(params.get("threshold"), Some("9"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_names_are_sorted() {
        let params: ExperimentParams = [("b", "1"), ("a", "2")].into_iter().collect();
        assert_eq!(params.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
