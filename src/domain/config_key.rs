// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype.
//!
//! `ConfigKey` is the open, string-typed key used by the generic lookup path.
//! Keys from the fixed catalog are produced from [`EnvKey`] and convert into a
//! `ConfigKey` without loss.

use crate::domain::env_key::EnvKey;
use std::fmt;

/// A type-safe wrapper for configuration keys.
///
/// Keys are opaque: no normalization is applied, so `"DEBUG"` and `"debug"`
/// name different entries.
///
/// # Examples
///
/// ```
/// use appenv::domain::{ConfigKey, EnvKey};
///
/// let key = ConfigKey::from("API_BASE_URL");
/// assert_eq!(key, ConfigKey::from(EnvKey::ApiBaseUrl));
/// assert_eq!(key.as_str(), "API_BASE_URL");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the catalog entry this key names, if it is a recognized key.
    ///
    /// # Examples
    ///
    /// ```
    /// use appenv::domain::{ConfigKey, EnvKey};
    ///
    /// assert_eq!(ConfigKey::from("DEBUG").catalog_entry(), Some(EnvKey::Debug));
    /// assert_eq!(ConfigKey::from("SOMETHING_ELSE").catalog_entry(), None);
    /// ```
    pub fn catalog_entry(&self) -> Option<EnvKey> {
        EnvKey::from_key(&self.0)
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<EnvKey> for ConfigKey {
    fn from(key: EnvKey) -> Self {
        ConfigKey(key.as_str().to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_key_new() {
        let key = ConfigKey::new("API_KEY".to_string());
        assert_eq!(key.as_str(), "API_KEY");
    }

    #[test]
    fn test_config_key_from_str_and_string() {
        assert_eq!(ConfigKey::from("APP_ENV"), ConfigKey::from("APP_ENV".to_string()));
    }

    #[test]
    fn test_config_key_from_env_key() {
        let key = ConfigKey::from(EnvKey::FlowNetwork);
        assert_eq!(key.as_str(), "FLOW_NETWORK");
    }

    #[test]
    fn test_config_key_into_string() {
        let key = ConfigKey::from("DEBUG");
        let inner: String = key.clone().into();
        assert_eq!(inner, "DEBUG");
        assert_eq!(key.into_string(), "DEBUG");
    }

    #[test]
    fn test_config_key_display() {
        let key = ConfigKey::from("X_SIGNATURE_KEY");
        assert_eq!(format!("{}", key), "X_SIGNATURE_KEY");
    }

    #[test]
    fn test_config_key_is_case_sensitive() {
        assert_ne!(ConfigKey::from("DEBUG"), ConfigKey::from("debug"));
        assert_eq!(ConfigKey::from("debug").catalog_entry(), None);
    }

    #[test]
    fn test_config_key_hash() {
        let mut map = HashMap::new();
        map.insert(ConfigKey::from("API_KEY"), "value1");

        assert_eq!(map.get(&ConfigKey::from(EnvKey::ApiKey)), Some(&"value1"));
        assert_eq!(map.get(&ConfigKey::from("API_BASE_URL")), None);
    }

    #[test]
    fn test_catalog_entry_round_trip_for_every_key() {
        for key in EnvKey::ALL {
            assert_eq!(ConfigKey::from(key).catalog_entry(), Some(key));
        }
    }

    #[test]
    fn test_config_key_empty() {
        let key = ConfigKey::from("");
        assert_eq!(key.as_str(), "");
        assert_eq!(key.catalog_entry(), None);
    }
}
