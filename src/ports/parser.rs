// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! File-backed sources hand the raw file content to a `ConfigParser` and keep
//! the flat key-value map it produces.

use crate::domain::Result;
use std::collections::HashMap;

/// Parses configuration file content into flat string pairs.
///
/// Nested structures, where a format has them, are flattened with dot
/// notation. Scalar values are rendered as strings because the configuration
/// source is string-typed.
///
/// # Examples
///
/// ```rust
/// use appenv::ports::ConfigParser;
/// use appenv::domain::Result;
/// use std::collections::HashMap;
///
/// struct LineParser;
///
/// impl ConfigParser for LineParser {
///     fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
///         Ok(content
///             .lines()
///             .filter_map(|line| line.split_once('='))
///             .map(|(k, v)| (k.to_string(), v.to_string()))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["properties"]
///     }
/// }
///
/// let parsed = LineParser.parse("FLOW_NETWORK=testnet").unwrap();
/// assert_eq!(parsed.get("FLOW_NETWORK"), Some(&"testnet".to_string()));
/// ```
pub trait ConfigParser {
    /// Parses raw content into a flat key-value map.
    fn parse(&self, content: &str) -> Result<HashMap<String, String>>;

    /// File extensions this parser handles, without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// Returns `true` if `extension` is one this parser handles, ignoring case.
    fn supports_extension(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
