// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory configuration source.
//!
//! The host that owns the values (a build step that baked them into the
//! binary, a native shell that read them from its bundle, or a test) hands
//! them over as pairs.

use crate::domain::{ConfigKey, ConfigValue};
use crate::ports::ConfigSource;
use std::collections::HashMap;

/// Configuration source backed by a `HashMap`.
///
/// # Examples
///
/// ```rust
/// use appenv::adapters::MapSource;
/// use appenv::ports::ConfigSource;
///
/// let source = MapSource::from_pairs([
///     ("API_BASE_URL", "https://api.example.com"),
///     ("DEBUG", "true"),
/// ]);
///
/// assert_eq!(source.len(), 2);
/// assert_eq!(source.get_str("DEBUG").unwrap().as_str(), "true");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source from key-value pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        tracing::debug!("Loaded {} in-memory configuration entries", values.len());
        Self { values }
    }

    /// Adds a value, returning the source for chaining.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl From<HashMap<String, String>> for MapSource {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl ConfigSource for MapSource {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str()))
    }

    fn all_keys(&self) -> Vec<ConfigKey> {
        self.values
            .keys()
            .map(|k| ConfigKey::from(k.as_str()))
            .collect()
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}
