// SPDX-License-Identifier: MIT OR Apache-2.0

//! Values returned across the scripting bridge.

use serde::Serialize;
use std::fmt;

/// A value handed to the scripting host.
///
/// Serializes untagged, so a string crosses as a plain string and the debug
/// flag as a plain boolean.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BridgeValue {
    /// A configuration string. Absent entries cross as the empty string.
    String(String),
    /// The debug flag.
    Bool(bool),
}

impl BridgeValue {
    /// Returns the string payload, or `None` for a boolean.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            BridgeValue::String(s) => Some(s),
            BridgeValue::Bool(_) => None,
        }
    }

    /// Returns the boolean payload, or `None` for a string.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            BridgeValue::Bool(b) => Some(*b),
            BridgeValue::String(_) => None,
        }
    }
}

impl From<String> for BridgeValue {
    fn from(s: String) -> Self {
        BridgeValue::String(s)
    }
}

impl From<&str> for BridgeValue {
    fn from(s: &str) -> Self {
        BridgeValue::String(s.to_string())
    }
}

impl From<bool> for BridgeValue {
    fn from(b: bool) -> Self {
        BridgeValue::Bool(b)
    }
}

impl fmt::Display for BridgeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeValue::String(s) => f.write_str(s),
            BridgeValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let s = BridgeValue::from("testnet");
        assert_eq!(s.as_str(), Some("testnet"));
        assert_eq!(s.as_bool(), None);

        let b = BridgeValue::from(true);
        assert_eq!(b.as_bool(), Some(true));
        assert_eq!(b.as_str(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(BridgeValue::from("abc").to_string(), "abc");
        assert_eq!(BridgeValue::from(false).to_string(), "false");
    }

    #[test]
    #[cfg(feature = "yaml")]
    fn test_serializes_untagged() {
        assert_eq!(serde_yaml::to_string(&BridgeValue::Bool(true)).unwrap(), "true\n");
        assert_eq!(
            serde_yaml::to_string(&BridgeValue::from("mainnet")).unwrap(),
            "mainnet\n"
        );
    }
}
