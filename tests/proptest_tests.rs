// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These check the lookup and coercion rules over arbitrary keys and values.

use appenv::adapters::YamlFileAdapter;
use appenv::bridge::{BridgeValue, EnvBridge};
use appenv::domain::{ConfigKey, ConfigValue, ConfigurationService, EnvKey};
use appenv::ports::ConfigSource;
use appenv::service::EnvConfig;
use proptest::prelude::*;
use std::io::Write;

fn any_env_key() -> impl Strategy<Value = EnvKey> {
    prop::sample::select(EnvKey::ALL.to_vec())
}

// Any stored string is returned unchanged by the generic lookup
proptest! {
    #[test]
    fn test_lookup_returns_stored_value(key in "[A-Z_]{1,32}", value in "\\PC*") {
        let config = EnvConfig::builder().with_values([(key.clone(), value.clone())]).build();
        let found = config.get(&ConfigKey::from(key));
        prop_assert_eq!(found, Some(ConfigValue::from(value)));
    }
}

// A key that was never stored is absent
proptest! {
    #[test]
    fn test_lookup_of_missing_key_is_none(stored in "[A-Z]{1,16}", asked in "[a-z]{1,16}") {
        let config = EnvConfig::builder().with_values([(stored, "value")]).build();
        prop_assert!(config.get_str(&asked).is_none());
    }
}

// The debug flag is true exactly for a case-insensitive "true"
proptest! {
    #[test]
    fn test_debug_flag_matches_rule(raw in "\\PC{0,8}") {
        let config = EnvConfig::builder().with_values([("DEBUG", raw.as_str())]).build();
        prop_assert_eq!(config.is_debug_mode(), raw.to_lowercase() == "true");
    }
}

proptest! {
    #[test]
    fn test_debug_flag_any_casing_of_true(mask in prop::collection::vec(any::<bool>(), 4)) {
        let raw: String = "true"
            .chars()
            .zip(mask)
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect();
        let config = EnvConfig::builder().with_values([("DEBUG", raw)]).build();
        prop_assert!(config.is_debug_mode());
    }
}

// Catalog lookups agree with generic lookups for any value
proptest! {
    #[test]
    fn test_catalog_lookup_equals_generic(key in any_env_key(), value in "\\PC*") {
        let config = EnvConfig::builder().with_values([(key.as_str(), value.as_str())]).build();
        prop_assert_eq!(config.lookup(key), config.get_str(key.as_str()));
    }
}

// The bridge returns the stored string, or the flag for the debug key
proptest! {
    #[test]
    fn test_bridge_matches_accessor(key in any_env_key(), value in "[a-zA-Z0-9:/._-]{0,24}") {
        let config = EnvConfig::builder().with_values([(key.as_str(), value.as_str())]).build();
        let bridge = EnvBridge::new(config.clone());
        let result = bridge.call(key.method_name(), &[]).unwrap();

        if key.is_flag() {
            prop_assert_eq!(result, BridgeValue::Bool(config.is_debug_mode()));
        } else {
            prop_assert_eq!(result, BridgeValue::from(value));
        }
    }
}

// Debug output never contains a secret value
proptest! {
    #[test]
    fn test_debug_output_hides_secrets(secret in "[a-z0-9]{12,24}") {
        let pairs: Vec<(&str, String)> = EnvKey::ALL
            .iter()
            .filter(|k| k.is_secret())
            .map(|k| (k.as_str(), secret.clone()))
            .collect();
        let config = EnvConfig::builder().with_values(pairs).build();
        let output = format!("{:?}", config);
        prop_assert!(!output.contains(&secret));
    }
}

// Numeric-looking YAML scalars read back exactly as written
proptest! {
    #[test]
    fn test_yaml_scalar_reads_back_as_written(token in "[0-9a-fA-Fx.e+-]{1,40}") {
        // A lone dash starts a sequence entry
        prop_assume!(token != "-");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "CROWDIN_DISTRIBUTION: {}", token).unwrap();
        file.flush().unwrap();

        let adapter = YamlFileAdapter::from_file(file.path()).unwrap();
        prop_assert_eq!(
            adapter.get_str("CROWDIN_DISTRIBUTION"),
            Some(ConfigValue::from(token.as_str()))
        );
    }
}
