//! Launchboard server
//!
//! Loads the launch-records CSV and serves the dashboard.
//!
//! # Configuration
//!
//! TOML config (`./config.toml` or the platform config dir), overridden by
//! environment variables, overridden by CLI flags:
//! - `LAUNCHBOARD_CSV_PATH`: Dataset CSV path
//! - `LAUNCHBOARD_HOST`: Host to bind to (default: 127.0.0.1)
//! - `LAUNCHBOARD_PORT`: Port to listen on (default: 8050)
//! - `LAUNCHBOARD_LOG_LEVEL` / `LAUNCHBOARD_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Log filter (takes precedence over the config level)

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launchboard::api::{serve, ApiConfig, AppState};
use launchboard::config::Config;

#[derive(Parser, Debug)]
#[command(name = "launchboard")]
#[command(about = "Interactive launch-records dashboard", version)]
struct Args {
    /// Dataset CSV (overrides config)
    csv: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(csv) = &args.csv {
        config.data.csv_path = csv.to_string_lossy().to_string();
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }
    if let Some(host) = args.host {
        config.api.host = host;
    }

    init_tracing(&config);

    tracing::info!("Starting launchboard v{}", env!("CARGO_PKG_VERSION"));

    // Fatal on any load failure: without the dataset there is no dashboard.
    let csv_path = PathBuf::from(&config.data.csv_path);
    let dataset = launchboard::dataset::load(&csv_path)
        .with_context(|| format!("Failed to load dataset from {:?}", csv_path))?;
    let dataset = Arc::new(dataset);

    let api_config = ApiConfig::new(config.api.host.clone(), config.api.port);
    let state = AppState::new(Arc::clone(&dataset), api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Launchboard stopped");
    Ok(())
}

/// Initialize the tracing subscriber from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "launchboard={},tower_http=info",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
