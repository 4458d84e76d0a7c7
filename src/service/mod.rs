// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the accessor implementation.
//!
//! `EnvConfig` is the concrete `ConfigurationService` applications construct
//! at startup and pass to the components that need configuration.

pub mod env_config;

// Re-export commonly used types
pub use env_config::{EnvConfig, EnvConfigBuilder};
