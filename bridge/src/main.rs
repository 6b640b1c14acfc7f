//! Nimbus Bridge - Entry Point
//!
//! Standalone setup check for a Nimbus device-cloud account: validates the
//! configuration, authenticates, enumerates devices, and reports which
//! device-category platforms a real host would be asked to activate.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use nimbus_bridge::account::client::{AccountClient, NimbusClient};
use nimbus_bridge::host::{ActivationHost, ActivationRequest};
use nimbus_bridge::logs::{init_logging, LogLevel, LogOptions};
use nimbus_bridge::setup::run::run_setup;
use nimbus_bridge::utils::version_info;

const DEFAULT_API_URL: &str = "https://api.nimbus.io";
const DEFAULT_CONFIG_PATH: &str = "/etc/nimbus-bridge/config.json";

/// Host stand-in that logs activation requests instead of starting
/// subsystems. A real smart-home host implements `ActivationHost` itself.
struct DryRunHost;

#[async_trait]
impl ActivationHost for DryRunHost {
    async fn activate(&self, request: ActivationRequest) {
        info!("Would activate the {} platform", request.category);
    }
}

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut cli_args: HashMap<String, String> = HashMap::new();

    for arg in args.iter().skip(1) {
        if let Some((key, value)) = arg.split_once('=') {
            // Handle --key=value format
            let clean_key = key.trim_start_matches('-');
            cli_args.insert(clean_key.to_string(), value.to_string());
        } else if arg.starts_with("--") {
            // Handle standalone flags like --version
            let clean_key = arg.trim_start_matches('-');
            cli_args.insert(clean_key.to_string(), "true".to_string());
        }
    }

    // Print version and exit
    let version = version_info();
    if cli_args.contains_key("version") {
        println!("{}", serde_json::to_string_pretty(&version).unwrap());
        return;
    }

    // Initialize logging
    let log_level = cli_args
        .get("log-level")
        .and_then(|s| s.parse::<LogLevel>().ok())
        .unwrap_or_default();
    let log_dir = cli_args.get("log-dir").map(PathBuf::from);
    let log_options = LogOptions {
        log_level,
        log_dir,
        ..Default::default()
    };
    let _guard = match init_logging(log_options) {
        Ok(guard) => guard,
        Err(e) => {
            println!("Failed to initialize logging: {e}");
            None
        }
    };

    // Read the raw configuration blob
    let config_path = cli_args
        .get("config")
        .cloned()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let contents = match tokio::fs::read_to_string(&config_path).await {
        Ok(contents) => contents,
        Err(e) => {
            error!("Unable to read configuration file {}: {}", config_path, e);
            std::process::exit(1);
        }
    };
    let raw = match serde_json::from_str(&contents) {
        Ok(value) => value,
        Err(e) => {
            error!("Configuration file {} is not valid JSON: {}", config_path, e);
            std::process::exit(1);
        }
    };

    let api_url = cli_args
        .get("api-url")
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let report = run_setup(
        &raw,
        |config| {
            NimbusClient::new(&api_url, config)
                .map(|client| Arc::new(client) as Arc<dyn AccountClient>)
        },
        &DryRunHost,
    )
    .await;

    info!("Setup finished in phase {:?}", report.phase);
    if !report.succeeded() {
        std::process::exit(1);
    }
}
