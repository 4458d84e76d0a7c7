// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the environment configuration crate.
//!
//! This example demonstrates:
//! - Building an accessor over the process environment
//! - Reading catalog entries through named getters
//! - The debug flag and the stage derived from it
//! - Falling back when a value is not configured
//!
//! To run this example:
//! ```bash
//! export FRW_API_BASE_URL="https://api.example.com"
//! export FRW_FLOW_NETWORK="testnet"
//! export FRW_DEBUG="true"
//!
//! cargo run --example basic_usage
//! ```

use appenv::prelude::*;

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Environment Configuration: Basic Usage ===\n");

    let config = EnvConfig::builder().with_env_prefix("FRW_").build();
    println!("Accessor built over source '{}'.\n", config.source_name());

    println!("--- Named getters ---");
    match config.api_base_url() {
        Some(url) => println!("✓ API base URL: {}", url),
        None => println!("✗ API base URL not configured"),
    }
    let network = config
        .flow_network()
        .map(String::from)
        .unwrap_or_else(|| "mainnet".to_string());
    println!("Flow network: {} (defaults to mainnet)", network);

    println!("\n--- Debug flag ---");
    println!("Debug mode: {}", config.is_debug_mode());
    println!("Stage: {}", config.stage());
    match config.mixpanel_token_for_current_stage() {
        Some(_) => println!("✓ Mixpanel token for this stage is configured"),
        None => println!("✗ Mixpanel token for this stage is not configured"),
    }

    println!("\n--- Generic lookup ---");
    let feature = config.get_or_default(&ConfigKey::from("FEATURE_SWAP"), "off");
    println!("FEATURE_SWAP: {}", feature);

    println!("\n--- Catalog coverage ---");
    let missing = config.missing_keys();
    println!(
        "{} of {} catalog entries configured",
        EnvKey::ALL.len() - missing.len(),
        EnvKey::ALL.len()
    );
    for key in missing {
        println!("  missing: {}", key);
    }

    println!("\n{:#?}", config);
}
