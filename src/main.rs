//! codesmith
//!
//! A development-only code scaffolding service with IP-based access control.

use clap::Parser;
use codesmith::{
    access::AccessGuard,
    config::load_config,
    generators::{GeneratorEntry, GeneratorRegistry},
    server::{AppState, HttpConfig, run_blocking},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// codesmith - code scaffolding service, localhost-only by default
#[derive(Parser, Debug)]
#[command(name = "codesmith")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "CODESMITH_CONFIG")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CODESMITH_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// HTTP server host
    #[arg(long, env = "CODESMITH_HTTP_HOST")]
    http_host: Option<String>,

    /// HTTP server port
    #[arg(long, env = "CODESMITH_HTTP_PORT")]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting codesmith");

    // Load configuration
    let config = load_config(args.config.as_deref())
        .inspect_err(|e| error!(error = %e, "Failed to load configuration"))?;

    // Build the access guard
    let guard = Arc::new(AccessGuard::new(config.access.allowed_ips.clone()));
    if guard.admits_any() {
        warn!("Allow-list contains '*': the service is reachable from any address");
    }

    // Build the generator registry; a broken entry is fatal here
    let overrides = config
        .generators
        .iter()
        .map(|(id, descriptor)| (id.clone(), GeneratorEntry::from(descriptor.clone())))
        .collect();

    let registry = Arc::new(
        GeneratorRegistry::build(overrides)
            .inspect_err(|e| error!(error = %e, "Failed to build generator registry"))?,
    );

    info!(generators = registry.len(), "Initialized generator registry");

    // Run the HTTP server
    let host = args.http_host.as_deref().unwrap_or(&config.server.host);
    let port = args.http_port.unwrap_or(config.server.port);
    let http_config = HttpConfig::from_host_port(host, port)?;

    let state = AppState {
        registry,
        guard,
        config: Arc::new(config),
    };

    run_blocking(state, http_config).await?;

    Ok(())
}
