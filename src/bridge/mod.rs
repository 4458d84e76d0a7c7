// SPDX-License-Identifier: MIT OR Apache-2.0

//! The surface exposed to the app's scripting runtime.
//!
//! A scripting host does not link against Rust method names. It asks for a
//! module by name and invokes exported methods by string, passing string
//! arguments. [`EnvBridge`] maps those calls onto a [`ConfigurationService`]:
//!
//! - `getEnvVar(key)` is the generic lookup.
//! - `isDebugMode()` returns a boolean.
//! - every other catalog method (`getApiBaseUrl()`, `getFlowNetwork()`, ...)
//!   returns a string.
//!
//! The scripting side expects strings, so an absent entry crosses the bridge
//! as the empty string.

pub mod value;

pub use value::BridgeValue;

use crate::domain::{ConfigError, ConfigKey, ConfigurationService, EnvKey, Result};
use crate::service::EnvConfig;
use std::collections::BTreeMap;

/// Name under which the module is registered with the scripting host.
pub const MODULE_NAME: &str = "EnvConfigModule";

/// Name of the generic lookup method.
pub const GET_ENV_VAR: &str = "getEnvVar";

/// Every method the module exports, `getEnvVar` first and then the catalog
/// in order.
pub fn method_names() -> Vec<&'static str> {
    std::iter::once(GET_ENV_VAR)
        .chain(EnvKey::ALL.iter().map(|key| key.method_name()))
        .collect()
}

/// Dispatches bridge calls to a configuration accessor.
///
/// # Examples
///
/// ```rust
/// use appenv::bridge::{BridgeValue, EnvBridge};
/// use appenv::service::EnvConfig;
///
/// let config = EnvConfig::builder()
///     .with_values([("FLOW_NETWORK", "testnet"), ("DEBUG", "TRUE")])
///     .build();
/// let bridge = EnvBridge::new(config);
///
/// assert_eq!(bridge.call("getFlowNetwork", &[]).unwrap(), BridgeValue::from("testnet"));
/// assert_eq!(bridge.call("isDebugMode", &[]).unwrap(), BridgeValue::Bool(true));
/// assert_eq!(bridge.call("getEnvVar", &["API_KEY"]).unwrap(), BridgeValue::from(""));
/// assert!(bridge.call("getNothing", &[]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EnvBridge<C = EnvConfig> {
    config: C,
}

impl<C: ConfigurationService> EnvBridge<C> {
    /// Wraps an accessor.
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Returns the wrapped accessor.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// The module name to register with the host.
    pub fn module_name(&self) -> &'static str {
        MODULE_NAME
    }

    /// Invokes an exported method by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownMethod`] for a name that is not exported
    /// and [`ConfigError::InvalidArguments`] when the argument count does not
    /// match. A key that is not configured is not an error.
    pub fn call(&self, method: &str, args: &[&str]) -> Result<BridgeValue> {
        if method == GET_ENV_VAR {
            return match args {
                [key] => Ok(self.get_env_var(key)),
                _ => Err(invalid_arguments(method, 1, args.len())),
            };
        }

        let Some(key) = EnvKey::from_method(method) else {
            tracing::debug!("Rejected call to unknown bridge method '{}'", method);
            return Err(ConfigError::UnknownMethod {
                method: method.to_string(),
            });
        };

        if !args.is_empty() {
            return Err(invalid_arguments(method, 0, args.len()));
        }

        Ok(self.value_of(key))
    }

    /// The generic lookup as the host sees it.
    pub fn get_env_var(&self, key: &str) -> BridgeValue {
        string_or_empty(self.config.get(&ConfigKey::from(key)))
    }

    /// The value a catalog method returns.
    pub fn value_of(&self, key: EnvKey) -> BridgeValue {
        if key.is_flag() {
            BridgeValue::Bool(self.config.is_debug_mode())
        } else {
            string_or_empty(self.config.lookup(key))
        }
    }

    /// Every catalog entry keyed by its source key, for hosts that read the
    /// whole module up front instead of calling methods one by one.
    pub fn constants(&self) -> BTreeMap<&'static str, BridgeValue> {
        EnvKey::ALL
            .into_iter()
            .map(|key| (key.as_str(), self.value_of(key)))
            .collect()
    }
}

fn string_or_empty(value: Option<crate::domain::ConfigValue>) -> BridgeValue {
    BridgeValue::String(value.map(String::from).unwrap_or_default())
}

fn invalid_arguments(method: &str, expected: usize, actual: usize) -> ConfigError {
    ConfigError::InvalidArguments {
        method: method.to_string(),
        expected,
        actual,
    }
}
