// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable configuration source adapter.
//!
//! The process environment is read once, when the adapter is built. Later
//! changes to the environment are not observed, which keeps every lookup a
//! pure read of an immutable snapshot.

use crate::domain::{ConfigKey, ConfigValue};
use crate::ports::ConfigSource;
use std::collections::HashMap;
use std::env;

/// Maximum length for environment variable keys
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Configuration source adapter for environment variables.
///
/// Keys are used verbatim, so `API_BASE_URL` in the environment is looked up
/// as `API_BASE_URL`. With a prefix, only variables starting with it are kept
/// and the prefix is stripped, so `FRW_API_BASE_URL` with prefix `FRW_`
/// becomes `API_BASE_URL`.
///
/// # Examples
///
/// ```rust
/// use appenv::adapters::EnvVarAdapter;
/// use appenv::ports::ConfigSource;
///
/// let adapter = EnvVarAdapter::from_vars(
///     vec![
///         ("FRW_FLOW_NETWORK".to_string(), "testnet".to_string()),
///         ("HOME".to_string(), "/root".to_string()),
///     ],
///     Some("FRW_"),
/// );
///
/// assert_eq!(adapter.get_str("FLOW_NETWORK").unwrap().as_str(), "testnet");
/// assert!(adapter.get_str("HOME").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct EnvVarAdapter {
    /// Prefix the snapshot was filtered with, if any
    prefix: Option<String>,
    /// Snapshot of the filtered variables
    values: HashMap<String, String>,
}

impl EnvVarAdapter {
    /// Snapshots every environment variable of the current process.
    pub fn new() -> Self {
        Self::from_vars(env::vars(), None)
    }

    /// Snapshots the environment variables starting with `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self::from_vars(env::vars(), Some(prefix.as_str()))
    }

    /// Builds a snapshot from explicit variables instead of the process
    /// environment.
    ///
    /// The same prefix filtering and size limits apply as for [`Self::new`].
    pub fn from_vars<I>(vars: I, prefix: Option<&str>) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut values = HashMap::new();
        let mut skipped = 0usize;

        for (key, value) in vars {
            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "Skipping oversized environment variable: key_len={}, value_len={} (max key={}, max value={})",
                    key.len(),
                    value.len(),
                    MAX_ENV_KEY_LEN,
                    MAX_ENV_VALUE_LEN
                );
                skipped += 1;
                continue;
            }

            let key = match prefix {
                Some(prefix) => match key.strip_prefix(prefix) {
                    Some(stripped) if !stripped.is_empty() => stripped.to_string(),
                    _ => continue,
                },
                None => key,
            };

            values.insert(key, value);
        }

        tracing::debug!(
            "Loaded {} environment variables (prefix={:?}, skipped={})",
            values.len(),
            prefix,
            skipped
        );

        Self {
            prefix: prefix.map(str::to_string),
            values,
        }
    }

    /// Creates an adapter with pre-populated values, bypassing the process
    /// environment and any filtering.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            prefix: None,
            values,
        }
    }

    /// Returns the prefix this snapshot was filtered with.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

impl Default for EnvVarAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
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
