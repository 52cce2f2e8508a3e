//! greeter: a minimal HTTP greeting service.
//!
//! This is the application entry point. It parses the command line, loads
//! configuration from a TOML file, installs the tracing subscriber, builds
//! the router around its injected event sink, and serves until shutdown.

use std::sync::Arc;

use clap::Parser;

use greeter::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use greeter::http::serve;
use greeter::logging::{self, TracingSink};
use greeter::routes::create_router;
use greeter::state::AppState;

/// greeter: a minimal HTTP greeting service
#[derive(Parser, Debug)]
#[command(name = "greeter", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "greeter=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Configuration comes first; the log output format lives in it
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    logging::init(&config.logging, &log_filter);

    tracing::info!(config = %args.config, "Loaded configuration");

    // Create application state with the production event sink. The sink
    // reaches handlers only through this state, not through a global.
    let state = AppState::new(config.clone(), Arc::new(TracingSink));

    // Create router
    let app = create_router(state);

    // Start server
    serve(app, &config).await?;

    Ok(())
}
