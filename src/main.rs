//! Emotion Map API Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Settings come from a TOML config file (see `--config`), environment
//! variables (`EMOTION_MAP_*`), and command-line flags, in increasing
//! order of precedence. `RUST_LOG` overrides the configured log level.

use clap::Parser;
use emotion_map::api::{serve, ApiConfig, AppState};
use emotion_map::config::Config;
use emotion_map::geocode::{GeocodeClient, GeocodeConfig};
use emotion_map::store::{EntryStore, StoreConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "emotion-map")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Share geolocated emotions and supportive replies on a world map")]
struct Cli {
    /// Path to a TOML config file (default: standard config locations)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Data directory for the persisted journal (overrides config)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Print a default config file to stdout and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", emotion_map::config::generate_default_config());
        return Ok(());
    }

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    if let Some(host) = cli.host {
        config.api.host = host;
    }
    if let Some(port) = cli.port {
        config.api.port = port;
    }
    if let Some(data_dir) = cli.data_dir {
        config.store.data_dir = data_dir.to_string_lossy().to_string();
    }

    init_logging(&config);

    tracing::info!("Starting Emotion Map API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {}", config.store.data_dir);

    // Initialize the entry store
    let store = Arc::new(EntryStore::new(StoreConfig::new(&config.store.data_dir))?);

    // Initialize the geocoding client
    let geocode = Arc::new(GeocodeClient::new(GeocodeConfig {
        base_url: config.geocode.base_url.clone(),
        request_timeout_ms: config.geocode.request_timeout_ms,
        ..Default::default()
    }));
    tracing::info!("Geocoding endpoint: {}", geocode.config().base_url);

    // Run server
    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        request_timeout_ms: config.api.request_timeout_secs * 1000,
    };
    let state = AppState::new(store, geocode, api_config.clone());
    serve(state, &api_config).await?;

    tracing::info!("Emotion Map API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "emotion_map={},tower_http=debug",
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
