// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type.
//!
//! The configuration source is string-typed. `ConfigValue` keeps the raw
//! string and carries the single coercion rule the crate defines, which turns
//! the debug flag into a boolean.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A configuration value as stored in the source.
///
/// No shape validation happens here: a URL getter may return any string.
///
/// # Examples
///
/// ```
/// use appenv::domain::ConfigValue;
///
/// let value = ConfigValue::from("https://api.example.com");
/// assert_eq!(value.as_str(), "https://api.example.com");
/// assert!(!value.is_true());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns an owned copy of the value.
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Returns `true` if the stored string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Coerces the value to a boolean flag.
    ///
    /// The value is `true` only when it equals `"true"` ignoring ASCII case.
    /// Surrounding whitespace is not trimmed, and other truthy spellings such
    /// as `"1"` or `"yes"` read as `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use appenv::domain::ConfigValue;
    ///
    /// assert!(ConfigValue::from("TRUE").is_true());
    /// assert!(!ConfigValue::from("False").is_true());
    /// assert!(!ConfigValue::from("1").is_true());
    /// ```
    pub fn is_true(&self) -> bool {
        self.0.eq_ignore_ascii_case("true")
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ConfigValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ConfigValue {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_value_new() {
        let value = ConfigValue::new("testnet".to_string());
        assert_eq!(value.as_str(), "testnet");
        assert_eq!(value.as_string(), "testnet");
    }

    #[test]
    fn test_config_value_display() {
        let value = ConfigValue::from("mainnet");
        assert_eq!(format!("{}", value), "mainnet");
    }

    #[test]
    fn test_is_true_case_insensitive() {
        for val in ["true", "True", "TRUE", "tRuE"] {
            assert!(ConfigValue::from(val).is_true(), "Failed for value: {}", val);
        }
    }

    #[test]
    fn test_is_true_rejects_everything_else() {
        for val in ["false", "False", "1", "yes", "on", "", " true", "true ", "truee"] {
            assert!(!ConfigValue::from(val).is_true(), "Failed for value: {:?}", val);
        }
    }

    #[test]
    fn test_is_empty() {
        assert!(ConfigValue::from("").is_empty());
        assert!(!ConfigValue::from(" ").is_empty());
    }

    #[test]
    fn test_compare_with_str() {
        let value = ConfigValue::from("https://api.example.com");
        assert_eq!(value, "https://api.example.com");
        assert!(value == *"https://api.example.com");
    }

    #[test]
    fn test_string_from_config_value() {
        let s: String = ConfigValue::from("token").into();
        assert_eq!(s, "token");
    }

    #[test]
    fn test_whitespace_is_preserved() {
        let value = ConfigValue::from("  spaces  ");
        assert_eq!(value.as_str(), "  spaces  ");
    }
}
