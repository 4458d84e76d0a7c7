// SPDX-License-Identifier: MIT OR Apache-2.0

//! The default accessor implementation.
//!
//! `EnvConfig` wraps one configuration source and implements
//! `ConfigurationService` over it. It is built once at application startup and
//! handed to whatever needs configuration, by reference or by cheap clone.

use crate::adapters::MapSource;
use crate::domain::{ConfigKey, ConfigValue, ConfigurationService, EnvKey};
use crate::ports::ConfigSource;
use std::fmt;
use std::sync::Arc;

/// Read-only accessor over a single configuration source.
///
/// Every lookup goes straight to the source; nothing is cached and nothing is
/// mutable, so clones share the source and concurrent callers need no
/// coordination.
///
/// `Debug` output lists the catalog entries that are configured and hides the
/// values of secret ones.
///
/// # Examples
///
/// ```rust
/// use appenv::prelude::*;
///
/// let config = EnvConfig::builder()
///     .with_values([
///         ("API_BASE_URL", "https://api.example.com"),
///         ("DEBUG", "true"),
///     ])
///     .build();
///
/// assert_eq!(config.get_str("API_BASE_URL"), config.api_base_url());
/// assert!(config.is_debug_mode());
/// assert!(config.api_key().is_none());
/// ```
#[derive(Clone)]
pub struct EnvConfig {
    source: Arc<dyn ConfigSource>,
}

impl EnvConfig {
    /// Creates an accessor over `source`.
    pub fn new<S: ConfigSource + 'static>(source: S) -> Self {
        Self::from_shared(Arc::new(source))
    }

    /// Creates an accessor over a source that is already shared.
    pub fn from_shared(source: Arc<dyn ConfigSource>) -> Self {
        tracing::debug!(
            "Configuration accessor using source '{}' with {} entries",
            source.name(),
            source.len()
        );
        Self { source }
    }

    /// Creates a new builder.
    pub fn builder() -> EnvConfigBuilder {
        EnvConfigBuilder::new()
    }

    /// Creates an accessor over an empty source. Every getter returns `None`.
    pub fn empty() -> Self {
        Self::new(MapSource::new())
    }

    /// Name of the underlying source.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Catalog keys that are present in the source, in catalog order.
    pub fn configured_keys(&self) -> Vec<EnvKey> {
        EnvKey::ALL
            .into_iter()
            .filter(|key| self.has(&ConfigKey::from(*key)))
            .collect()
    }

    /// Catalog keys that are absent from the source, in catalog order.
    pub fn missing_keys(&self) -> Vec<EnvKey> {
        EnvKey::ALL
            .into_iter()
            .filter(|key| !self.has(&ConfigKey::from(*key)))
            .collect()
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::empty()
    }
}

impl ConfigurationService for EnvConfig {
    fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
        let value = self.source.get(key);
        tracing::trace!(
            "Lookup of '{}' in source '{}': {}",
            key,
            self.source.name(),
            if value.is_some() { "hit" } else { "miss" }
        );
        value
    }
}

impl fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Entries<'a>(&'a EnvConfig);

        impl fmt::Debug for Entries<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut map = f.debug_map();
                for key in EnvKey::ALL {
                    if let Some(value) = self.0.lookup(key) {
                        if key.is_secret() {
                            map.entry(&key.as_str(), &"<redacted>");
                        } else {
                            map.entry(&key.as_str(), &value.as_str());
                        }
                    }
                }
                map.finish()
            }
        }

        f.debug_struct("EnvConfig")
            .field("source", &self.source.name())
            .field("entries", &Entries(self))
            .finish()
    }
}

/// Builder for an [`EnvConfig`].
///
/// The accessor reads exactly one source. Setting a source again replaces the
/// previous one; nothing is merged. Building without a source yields an empty
/// accessor.
///
/// # Examples
///
/// ```rust
/// use appenv::domain::ConfigurationService;
/// use appenv::service::EnvConfigBuilder;
///
/// let config = EnvConfigBuilder::new()
///     .with_values([("FLOW_NETWORK", "testnet")])
///     .with_values([("FLOW_NETWORK", "mainnet")])
///     .build();
///
/// assert_eq!(config.flow_network().unwrap(), "mainnet");
/// ```
#[derive(Default)]
pub struct EnvConfigBuilder {
    source: Option<Arc<dyn ConfigSource>>,
}

impl EnvConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `source` as the configuration source.
    pub fn with_source<S: ConfigSource + 'static>(self, source: S) -> Self {
        self.with_shared_source(Arc::new(source))
    }

    /// Uses an already shared source as the configuration source.
    pub fn with_shared_source(mut self, source: Arc<dyn ConfigSource>) -> Self {
        if let Some(previous) = &self.source {
            tracing::warn!(
                "Replacing configuration source '{}' with '{}'",
                previous.name(),
                source.name()
            );
        }
        self.source = Some(source);
        self
    }

    /// Uses an in-memory source holding `pairs`.
    pub fn with_values<I, K, V>(self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.with_source(MapSource::from_pairs(pairs))
    }

    /// Uses a snapshot of the process environment.
    #[cfg(feature = "env")]
    pub fn with_env_vars(self) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(EnvVarAdapter::new())
    }

    /// Uses a snapshot of the environment variables starting with `prefix`,
    /// with the prefix stripped from the keys.
    #[cfg(feature = "env")]
    pub fn with_env_prefix(self, prefix: impl Into<String>) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(EnvVarAdapter::with_prefix(prefix))
    }

    /// Uses the values of a YAML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a YAML mapping.
    #[cfg(feature = "yaml")]
    pub fn with_yaml_file(self, path: impl AsRef<std::path::Path>) -> crate::domain::Result<Self> {
        use crate::adapters::YamlFileAdapter;
        let adapter = YamlFileAdapter::from_file(path)?;
        Ok(self.with_source(adapter))
    }

    /// Builds the accessor.
    pub fn build(self) -> EnvConfig {
        match self.source {
            Some(source) => EnvConfig::from_shared(source),
            None => {
                tracing::debug!("No configuration source set, using an empty one");
                EnvConfig::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Stage;

    fn config(pairs: &[(&str, &str)]) -> EnvConfig {
        EnvConfig::builder().with_values(pairs.iter().copied()).build()
    }

    #[test]
    fn test_env_config_get() {
        let config = config(&[("APP_ENV", "staging")]);
        assert_eq!(config.get(&ConfigKey::from("APP_ENV")).unwrap(), "staging");
        assert!(config.get(&ConfigKey::from("MISSING")).is_none());
    }

    #[test]
    fn test_env_config_empty() {
        let config = EnvConfig::empty();
        assert_eq!(config.source_name(), "memory");
        assert!(config.configured_keys().is_empty());
        assert_eq!(config.missing_keys().len(), EnvKey::ALL.len());
        assert!(!config.is_debug_mode());
    }

    #[test]
    fn test_env_config_default_is_empty() {
        let config = EnvConfig::default();
        assert!(config.api_base_url().is_none());
    }

    #[test]
    fn test_env_config_clone_shares_source() {
        let config = config(&[("FLOW_NETWORK", "testnet")]);
        let cloned = config.clone();
        assert!(Arc::ptr_eq(&config.source, &cloned.source));
        assert_eq!(cloned.flow_network(), config.flow_network());
    }

    #[test]
    fn test_configured_and_missing_keys() {
        let config = config(&[("DEBUG", "false"), ("X_SIGNATURE_KEY", "sig"), ("EXTRA", "x")]);
        assert_eq!(
            config.configured_keys(),
            vec![EnvKey::Debug, EnvKey::XSignatureKey]
        );
        assert_eq!(config.missing_keys().len(), EnvKey::ALL.len() - 2);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = config(&[
            ("API_BASE_URL", "https://api.example.com"),
            ("API_KEY", "super-secret-api-key"),
            ("DRIVE_AES_KEY", "aes-secret"),
        ]);
        let output = format!("{:?}", config);

        assert!(output.contains("https://api.example.com"));
        assert!(output.contains("API_KEY"));
        assert!(output.contains("<redacted>"));
        assert!(!output.contains("super-secret-api-key"));
        assert!(!output.contains("aes-secret"));
    }

    #[test]
    fn test_builder_without_source_is_empty() {
        let config = EnvConfigBuilder::new().build();
        assert!(config.configured_keys().is_empty());
    }

    #[test]
    fn test_builder_last_source_wins() {
        let config = EnvConfigBuilder::new()
            .with_values([("APP_ENV", "first")])
            .with_values([("FLOW_NETWORK", "second")])
            .build();

        assert!(config.environment().is_none());
        assert_eq!(config.flow_network().unwrap(), "second");
    }

    #[test]
    fn test_builder_with_shared_source() {
        let shared: Arc<dyn ConfigSource> = Arc::new(MapSource::from_pairs([("DEBUG", "true")]));
        let a = EnvConfigBuilder::new().with_shared_source(shared.clone()).build();
        let b = EnvConfig::from_shared(shared);
        assert!(a.is_debug_mode());
        assert_eq!(a.stage(), Stage::Development);
        assert_eq!(a.is_debug_mode(), b.is_debug_mode());
    }

    #[test]
    #[cfg(feature = "env")]
    fn test_builder_with_env_vars() {
        let config = EnvConfigBuilder::new().with_env_vars().build();
        assert_eq!(config.source_name(), "env");
    }

    #[test]
    fn test_env_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EnvConfig>();
    }
}
