// SPDX-License-Identifier: MIT OR Apache-2.0

//! Build stage used to choose between paired development and production
//! credentials.

use serde::Serialize;
use std::fmt;

/// Which half of a dev/prod credential pair applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Debug builds.
    Development,
    /// Release builds.
    Production,
}

impl Stage {
    /// Maps the debug flag to a stage. Debug builds are development builds.
    pub fn from_debug_flag(debug: bool) -> Self {
        if debug {
            Stage::Development
        } else {
            Stage::Production
        }
    }

    /// Picks `dev` or `prod` according to this stage.
    pub fn select<T>(self, dev: T, prod: T) -> T {
        match self {
            Stage::Development => dev,
            Stage::Production => prod,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Development => f.write_str("development"),
            Stage::Production => f.write_str("production"),
        }
    }
}
