// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use appenv::domain::{ConfigKey, ConfigValue};
use appenv::ports::ConfigSource;
use std::collections::HashMap;
use std::sync::Mutex;

/// A source that records every key it is asked for.
///
/// Lets tests check which key a getter resolves and that lookups reach the
/// source every time.
#[derive(Debug, Default)]
pub struct RecordingSource {
    values: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingSource {
    /// Creates an empty recording source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value to the source.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Keys requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Forgets the recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }
}

impl ConfigSource for RecordingSource {
    fn name(&self) -> &str {
        "recording"
    }

    fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.requests.lock().unwrap().push(key.as_str().to_string());
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
}

/// Creates a temporary YAML file with the given content.
#[allow(dead_code)]
pub fn create_temp_yaml(content: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}
