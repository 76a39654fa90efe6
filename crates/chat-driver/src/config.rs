//! Driver configuration.

use std::collections::HashMap;

/// Configuration key holding the Slack API token.
pub const SLACK_TOKEN_KEY: &str = "slack_token";

/// Read-only named settings handed to a driver at construction.
///
/// Nothing is defaulted here; a driver reads a key when an operation needs it.
#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    values: HashMap<String, String>,
}

impl DriverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl From<HashMap<String, String>> for DriverConfig {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for DriverConfig
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
