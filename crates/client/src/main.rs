//! Raw object inspection binary.
//!
//! Fetches an object from a Sui full node via `sui_getRawObject` and prints
//! its reference, owner and BCS payload size (or the full JSON response).
//!
//! # Examples
//!
//! ```bash
//! # Testnet (default), summary view
//! cargo run -p raw-object-client -- 0x6
//!
//! # Local node, raw JSON
//! SUI_NETWORK=local cargo run -p raw-object-client -- --format json 0x5
//! ```

mod cli;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use client_rpc_sui::{HttpProvider, SuiConfig, get_raw_object};
use tracing_subscriber::EnvFilter;

use cli::{Cli, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    tracing::debug!("Using {} node at {}", config.network, config.rpc_url());

    let provider = HttpProvider::new(&config).context("Failed to create RPC provider")?;

    let response = get_raw_object(&provider, &cli.object_id)
        .await
        .with_context(|| format!("sui_getRawObject failed for {}", cli.object_id))?;

    match cli.format {
        OutputFormat::Summary => output::print_summary(&cli.object_id, &response),
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}

/// `RUST_LOG` directives when they parse, `info` otherwise.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Environment first, then command-line overrides.
fn build_config(cli: &Cli) -> Result<SuiConfig> {
    let mut config = SuiConfig::from_env().context("Invalid Sui configuration in environment")?;

    if let Some(network) = cli.network {
        config.network = network.into();
    }
    if let Some(url) = &cli.rpc_url {
        config = config.with_rpc_url(url.clone());
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(std::time::Duration::from_secs(secs));
    }

    config.validate()?;
    Ok(config)
}
