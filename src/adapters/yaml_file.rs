// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML file configuration source adapter.
//!
//! The file is read and parsed once, when the adapter is built. A typical file
//! is a flat mapping of catalog keys:
//!
//! ```yaml
//! API_BASE_URL: https://api.example.com
//! FLOW_NETWORK: testnet
//! DEBUG: true
//! ```

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::{ConfigParser, ConfigSource};
use directories::ProjectDirs;
use serde::de::{
    self, DeserializeSeed, Deserializer, EnumAccess, IgnoredAny, MapAccess, SeqAccess,
    VariantAccess, Visitor,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed size for YAML configuration files (10MB)
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// File name looked up by [`YamlFileAdapter::from_default_location`].
pub const DEFAULT_FILE_NAME: &str = "env.yaml";

/// YAML parser implementation.
///
/// Scalars keep their text exactly as written, so `0x1F`, `1e3` and `00123`
/// read back unchanged and an integer too wide for any numeric type is still
/// a value. `null` becomes `""`. Nested mappings flatten with dot notation.
/// Sequences and tagged nodes have no place in the catalog and are skipped.
///
/// # Examples
///
/// ```rust
/// use appenv::adapters::YamlParser;
/// use appenv::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let result = parser.parse("DEBUG: true\nDRIVE_AES_IV: 0x1F").unwrap();
/// assert_eq!(result.get("DEBUG"), Some(&"true".to_string()));
/// assert_eq!(result.get("DRIVE_AES_IV"), Some(&"0x1F".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
        // The first pass only learns the document's layout. Reading it as typed
        // values would resolve `0x1F` to 31, so the second pass uses the layout
        // to read every scalar as a string.
        let shape: Shape = serde_yaml::from_str(content).map_err(parse_error)?;

        let mut result = HashMap::new();
        match &shape {
            Shape::Null => {}
            Shape::Mapping(entries) => {
                let flatten = FlattenMap {
                    entries,
                    prefix: "",
                    values: &mut result,
                };
                serde_yaml::Deserializer::from_str(content)
                    .deserialize_map(flatten)
                    .map_err(parse_error)?;
            }
            _ => {
                return Err(ConfigError::ParseError {
                    message: "YAML configuration must be a mapping at the top level".to_string(),
                    source: None,
                })
            }
        }
        Ok(result)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

fn parse_error(err: serde_yaml::Error) -> ConfigError {
    ConfigError::ParseError {
        message: format!("Failed to parse YAML: {}", err),
        source: Some(Box::new(err)),
    }
}

/// Layout of a YAML node, without its scalar values.
#[derive(Debug)]
enum Shape {
    Null,
    Scalar,
    Mapping(Vec<Entry>),
    Skipped,
}

/// One mapping entry, in document order.
#[derive(Debug)]
struct Entry {
    scalar_key: bool,
    value: Shape,
}

impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ShapeVisitor)
    }
}

struct ShapeVisitor;

impl<'de> Visitor<'de> for ShapeVisitor {
    type Value = Shape;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any YAML node")
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<Shape, E> {
        Ok(Shape::Scalar)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> std::result::Result<Shape, E> {
        Ok(Shape::Scalar)
    }

    fn visit_i128<E: de::Error>(self, _: i128) -> std::result::Result<Shape, E> {
        Ok(Shape::Scalar)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> std::result::Result<Shape, E> {
        Ok(Shape::Scalar)
    }

    fn visit_u128<E: de::Error>(self, _: u128) -> std::result::Result<Shape, E> {
        Ok(Shape::Scalar)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<Shape, E> {
        Ok(Shape::Scalar)
    }

    fn visit_str<E: de::Error>(self, _: &str) -> std::result::Result<Shape, E> {
        Ok(Shape::Scalar)
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Shape, E> {
        Ok(Shape::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Shape, E> {
        Ok(Shape::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> std::result::Result<Shape, D::Error> {
        Shape::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Shape, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Shape::Skipped)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Shape, A::Error> {
        let mut entries = Vec::new();
        while let Some(key) = map.next_key::<Shape>()? {
            entries.push(Entry {
                scalar_key: matches!(key, Shape::Scalar | Shape::Null),
                value: map.next_value()?,
            });
        }
        Ok(Shape::Mapping(entries))
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> std::result::Result<Shape, A::Error> {
        let (_, variant) = data.variant::<IgnoredAny>()?;
        variant.newtype_variant::<IgnoredAny>()?;
        Ok(Shape::Skipped)
    }
}

/// Reads a mapping whose layout is already known, inserting every scalar
/// under its dotted path.
struct FlattenMap<'a> {
    entries: &'a [Entry],
    prefix: &'a str,
    values: &'a mut HashMap<String, String>,
}

impl<'de> Visitor<'de> for FlattenMap<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a YAML mapping")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<(), A::Error> {
        let values = self.values;
        for entry in self.entries {
            if !entry.scalar_key {
                tracing::debug!("Skipping non-scalar YAML key under '{}'", self.prefix);
                if map.next_key::<IgnoredAny>()?.is_none() {
                    break;
                }
                map.next_value::<IgnoredAny>()?;
                continue;
            }

            let Some(key) = map.next_key::<Option<String>>()? else {
                break;
            };
            let key = key.unwrap_or_default();
            let path = if self.prefix.is_empty() {
                key
            } else {
                format!("{}.{}", self.prefix, key)
            };
            map.next_value_seed(FlattenValue {
                shape: &entry.value,
                path: &path,
                values: &mut *values,
            })?;
        }
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(())
    }
}

struct FlattenValue<'a> {
    shape: &'a Shape,
    path: &'a str,
    values: &'a mut HashMap<String, String>,
}

impl<'de> DeserializeSeed<'de> for FlattenValue<'_> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> std::result::Result<(), D::Error> {
        match self.shape {
            Shape::Null | Shape::Scalar => {
                let text = Option::<String>::deserialize(deserializer)?;
                self.values
                    .insert(self.path.to_string(), text.unwrap_or_default());
            }
            Shape::Mapping(entries) => deserializer.deserialize_map(FlattenMap {
                entries,
                prefix: self.path,
                values: self.values,
            })?,
            Shape::Skipped => {
                tracing::debug!("Skipping list or tagged value for key '{}'", self.path);
                IgnoredAny::deserialize(deserializer)?;
            }
        }
        Ok(())
    }
}

/// Configuration source adapter for YAML files.
///
/// # Examples
///
/// ```rust,no_run
/// use appenv::adapters::YamlFileAdapter;
///
/// let adapter = YamlFileAdapter::from_file("/etc/frw/env.yaml").unwrap();
/// let adapter = YamlFileAdapter::from_default_location("frw", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileAdapter {
    /// Canonical path of the file the values were read from
    file_path: PathBuf,
    /// Parsed configuration values
    values: HashMap<String, String>,
}

impl YamlFileAdapter {
    /// Reads and parses the YAML file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref();

        let canonical_path = file_path
            .canonicalize()
            .map_err(|e| source_error("Invalid or inaccessible path", file_path, e))?;

        let metadata = fs::metadata(&canonical_path)
            .map_err(|e| source_error("Failed to read file metadata", &canonical_path, e))?;

        if metadata.len() > MAX_YAML_FILE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: "yaml-file".to_string(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_YAML_FILE_SIZE
                ),
                source: None,
            });
        }

        let content = fs::read_to_string(&canonical_path)
            .map_err(|e| source_error("Failed to read configuration file", &canonical_path, e))?;

        let values = YamlParser::new().parse(&content)?;

        tracing::debug!(
            "Loaded {} configuration entries from {}",
            values.len(),
            display_name(&canonical_path)
        );

        Ok(Self {
            file_path: canonical_path,
            values,
        })
    }

    /// Reads [`DEFAULT_FILE_NAME`] from the OS-appropriate configuration
    /// directory of the application.
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, DEFAULT_FILE_NAME)
    }

    /// Reads `filename` from the OS-appropriate configuration directory of the
    /// application.
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: "yaml-file".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns the canonical path of the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigSource for YamlFileAdapter {
    fn name(&self) -> &str {
        "yaml-file"
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

// Only the file name goes into messages, never the full path
fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

fn source_error(message: &str, path: &Path, err: std::io::Error) -> ConfigError {
    ConfigError::SourceError {
        source_name: "yaml-file".to_string(),
        message: format!("{}: {}", message, display_name(path)),
        source: Some(Box::new(err)),
    }
}
