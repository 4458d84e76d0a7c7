// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module holds the key catalog, the key and value newtypes, the accessor
//! trait and the error type. It has no knowledge of where values come from.

pub mod config_key;
pub mod config_value;
pub mod env_key;
pub mod errors;
pub mod service;
pub mod stage;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use env_key::EnvKey;
pub use errors::{ConfigError, Result};
pub use service::ConfigurationService;
pub use stage::Stage;
