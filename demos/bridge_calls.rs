// SPDX-License-Identifier: MIT OR Apache-2.0

//! Calling the accessor the way a scripting host does.
//!
//! The host only knows method names and passes string arguments. This example
//! loads values from a YAML file when one is given, and from a fixed set of
//! values otherwise.
//!
//! ```bash
//! cargo run --example bridge_calls -- path/to/env.yaml
//! ```

use appenv::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let builder = EnvConfig::builder();
    let config = match std::env::args().nth(1) {
        Some(path) => builder.with_yaml_file(path)?.build(),
        None => builder
            .with_values([
                ("API_BASE_URL", "https://api.example.com"),
                ("FLOW_NETWORK", "testnet"),
                ("DEBUG", "true"),
            ])
            .build(),
    };

    let bridge = EnvBridge::new(config);
    println!("Module: {}\n", bridge.module_name());

    for method in ["getApiBaseUrl", "getFlowNetwork", "isDebugMode", "getApiKey"] {
        let value = bridge.call(method, &[])?;
        println!("{}() -> {:?}", method, value);
    }

    let value = bridge.call("getEnvVar", &["FLOW_NETWORK"])?;
    println!("getEnvVar(\"FLOW_NETWORK\") -> {:?}", value);

    match bridge.call("getDatabaseUrl", &[]) {
        Ok(value) => println!("getDatabaseUrl() -> {:?}", value),
        Err(e) => println!("getDatabaseUrl() failed: {}", e),
    }

    println!("\nExported methods: {}", appenv::bridge::method_names().join(", "));
    Ok(())
}
