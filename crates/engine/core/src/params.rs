//! Plugin parameters handed over by the host at startup.

use std::collections::HashMap;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced by typed parameter access.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("parameter `{0}` is not set")]
    Missing(String),

    #[error("parameter `{key}` has unusable value `{value}`")]
    Invalid { key: String, value: String },
}

/// String key/value bag of startup configuration.
///
/// The host loads these once (from its plugin manager, a config file,
/// whatever it owns) and hands them over before any extension is built.
/// Typed accessors report failures as [`ParamError`] so callers can decide
/// between a default and a log line; nothing here panics on bad input.
#[derive(Clone, Debug, Default)]
pub struct PluginParams {
    values: HashMap<String, String>,
}

impl PluginParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Raw value, if the parameter is set at all.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Parses the parameter into `T`. Missing and unparseable values are
    /// distinct errors; an empty string counts as missing, matching hosts
    /// that persist unset parameters as `""`.
    pub fn parsed<T: FromStr>(&self, key: &str) -> Result<T, ParamError> {
        let value = self
            .raw(key)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ParamError::Missing(key.to_owned()))?;
        value.trim().parse().map_err(|_| ParamError::Invalid {
            key: key.to_owned(),
            value: value.to_owned(),
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PluginParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsed_distinguishes_missing_from_invalid() {
        let params: PluginParams = [("Dark Amount", "130"), ("Broken", "abc")]
            .into_iter()
            .collect();

        assert_eq!(params.parsed::<u8>("Dark Amount"), Ok(130));
        assert_eq!(
            params.parsed::<u8>("Unset"),
            Err(ParamError::Missing("Unset".into()))
        );
        assert!(matches!(
            params.parsed::<u8>("Broken"),
            Err(ParamError::Invalid { .. })
        ));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let params: PluginParams = [("Region Battlebacks", "")].into_iter().collect();
        assert_eq!(
            params.parsed::<String>("Region Battlebacks"),
            Err(ParamError::Missing("Region Battlebacks".into()))
        );
    }
}
