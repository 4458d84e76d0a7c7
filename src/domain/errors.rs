// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the environment configuration crate.
//!
//! Looking up a key that is not configured is never an error: lookups return
//! `None` and callers apply their own defaults. The errors here only cover the
//! surfaces that can genuinely fail, which is building a source from a file and
//! dispatching a bridge call by method name.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use appenv::domain::errors::ConfigError;
///
/// let error = ConfigError::UnknownMethod {
///     method: "getNothing".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown bridge method: getNothing");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// An error occurred while building a configuration source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a configuration file.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A bridge call named a method that is not exported.
    #[error("Unknown bridge method: {method}")]
    UnknownMethod {
        /// The method name that was requested
        method: String,
    },

    /// A bridge call passed the wrong number of arguments.
    #[error("Bridge method '{method}' expects {expected} argument(s), got {actual}")]
    InvalidArguments {
        /// The method that was called
        method: String,
        /// Number of arguments the method takes
        expected: usize,
        /// Number of arguments that were passed
        actual: usize,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error() {
        let error = ConfigError::SourceError {
            source_name: "yaml-file".to_string(),
            message: "Configuration file too large".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration source 'yaml-file' error: Configuration file too large"
        );
    }

    #[test]
    fn test_parse_error() {
        let error = ConfigError::ParseError {
            message: "Invalid YAML".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration: Invalid YAML"
        );
    }

    #[test]
    fn test_unknown_method() {
        let error = ConfigError::UnknownMethod {
            method: "getSomething".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown bridge method: getSomething");
    }

    #[test]
    fn test_invalid_arguments() {
        let error = ConfigError::InvalidArguments {
            method: "getEnvVar".to_string(),
            expected: 1,
            actual: 0,
        };
        assert_eq!(
            error.to_string(),
            "Bridge method 'getEnvVar' expects 1 argument(s), got 0"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::from(io_error);
        assert!(matches!(error, ConfigError::IoError(_)));
    }

    #[test]
    fn test_source_error_keeps_cause() {
        use std::error::Error as _;

        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = ConfigError::SourceError {
            source_name: "yaml-file".to_string(),
            message: "Failed to read configuration file".to_string(),
            source: Some(Box::new(io_error)),
        };
        assert!(error.source().is_some());
    }
}
