// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! `ConfigSource` is the port the accessor reads through. A source is populated
//! once, before the accessor is built, and is never mutated afterwards.

use crate::domain::{ConfigKey, ConfigValue};

/// A read-only, string-keyed configuration store.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. The accessor shares a source across
/// threads without locking, so lookups must not mutate shared state.
///
/// # Examples
///
/// ```rust
/// use appenv::ports::ConfigSource;
/// use appenv::domain::{ConfigKey, ConfigValue};
///
/// struct OnlyNetwork;
///
/// impl ConfigSource for OnlyNetwork {
///     fn name(&self) -> &str {
///         "only-network"
///     }
///
///     fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
///         (key.as_str() == "FLOW_NETWORK").then(|| ConfigValue::from("testnet"))
///     }
///
///     fn all_keys(&self) -> Vec<ConfigKey> {
///         vec![ConfigKey::from("FLOW_NETWORK")]
///     }
/// }
///
/// let source = OnlyNetwork;
/// assert_eq!(source.get_str("FLOW_NETWORK").unwrap().as_str(), "testnet");
/// assert!(source.get_str("API_KEY").is_none());
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns a short identifier for this source, used in logs.
    fn name(&self) -> &str;

    /// Retrieves the value stored under `key`, or `None` if it is absent.
    fn get(&self, key: &ConfigKey) -> Option<ConfigValue>;

    /// Returns every key present in this source, in no particular order.
    fn all_keys(&self) -> Vec<ConfigKey>;

    /// Retrieves a value for a key given as a string slice.
    fn get_str(&self, key: &str) -> Option<ConfigValue> {
        self.get(&ConfigKey::from(key))
    }

    /// Returns the number of entries in this source.
    fn len(&self) -> usize {
        self.all_keys().len()
    }

    /// Returns `true` if this source holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptySource;

    impl ConfigSource for EmptySource {
        fn name(&self) -> &str {
            "empty"
        }

        fn get(&self, _key: &ConfigKey) -> Option<ConfigValue> {
            None
        }

        fn all_keys(&self) -> Vec<ConfigKey> {
            Vec::new()
        }
    }

    #[test]
    fn test_config_source_name() {
        assert_eq!(EmptySource.name(), "empty");
    }

    #[test]
    fn test_config_source_get_returns_none() {
        assert!(EmptySource.get(&ConfigKey::from("DEBUG")).is_none());
        assert!(EmptySource.get_str("DEBUG").is_none());
    }

    #[test]
    fn test_config_source_len() {
        assert_eq!(EmptySource.len(), 0);
        assert!(EmptySource.is_empty());
    }

    #[test]
    fn test_config_source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ConfigSource>();
    }
}
