// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed, read-only access to a mobile app's environment configuration.
//!
//! The app's build produces a flat set of string entries: API endpoints, the
//! Flow network selection, third-party credentials and a debug flag. This
//! crate puts a typed accessor in front of that set and exposes the same
//! accessor to the app's scripting runtime.
//!
//! # Architecture
//!
//! - **Domain Layer**: the key catalog (`EnvKey`), the `ConfigKey` and
//!   `ConfigValue` newtypes, the `ConfigurationService` accessor trait, errors
//! - **Ports**: `ConfigSource` (where values live) and `ConfigParser`
//! - **Adapters**: in-memory map, process environment snapshot, YAML file
//! - **Service**: `EnvConfig`, the accessor applications construct at startup
//! - **Bridge**: `EnvBridge`, method-name dispatch for the scripting host
//!
//! There is no global state. Build an `EnvConfig` once and pass it to what
//! needs it.
//!
//! # Missing values
//!
//! A key that is not configured resolves to `None`, and the debug flag to
//! `false`. Nothing here decides that a missing value is fatal.
//!
//! # Feature Flags
//!
//! - `env`: environment variable source (default)
//! - `yaml`: YAML file source (default)
//! - `full`: all of the above
//!
//! # Quick Start
//!
//! ```rust
//! use appenv::prelude::*;
//!
//! let config = EnvConfig::builder()
//!     .with_values([
//!         ("API_BASE_URL", "https://api.example.com"),
//!         ("DEBUG", "true"),
//!     ])
//!     .build();
//!
//! assert_eq!(config.api_base_url().unwrap(), "https://api.example.com");
//! assert!(config.is_debug_mode());
//! assert_eq!(config.stage(), Stage::Development);
//! assert!(config.api_key().is_none());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod bridge;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
pub mod prelude {
    pub use crate::adapters::MapSource;
    pub use crate::bridge::{BridgeValue, EnvBridge};
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigValue, ConfigurationService, EnvKey, Result, Stage,
    };
    pub use crate::ports::{ConfigParser, ConfigSource};
    pub use crate::service::{EnvConfig, EnvConfigBuilder};

    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarAdapter;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlFileAdapter, YamlParser};
}
