//! HTTP server
//!
//! Serves the generator registry over a small, guard-protected HTTP surface.

pub mod routes;

pub use routes::{AppState, router};

use crate::util::find_available_port;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Default port for the HTTP server
pub const DEFAULT_HTTP_PORT: u16 = 19420;

/// Configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Address to bind to (e.g., "127.0.0.1:19420")
    pub bind: SocketAddr,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], DEFAULT_HTTP_PORT)),
        }
    }
}

impl HttpConfig {
    pub fn new(bind: SocketAddr) -> Self {
        Self { bind }
    }

    /// Create config from host and port strings
    pub fn from_host_port(host: &str, port: u16) -> Result<Self, std::net::AddrParseError> {
        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        Ok(Self::new(addr))
    }
}

/// Start the HTTP server in the background.
///
/// Port discovery is used to find an available port if the configured port
/// is taken. Returns a cancellation token that stops the server.
pub async fn run(state: AppState, config: HttpConfig) -> anyhow::Result<CancellationToken> {
    let host = config.bind.ip().to_string();
    let actual_port = find_available_port(&host, config.bind.port()).await?;
    let bind_addr = SocketAddr::new(config.bind.ip(), actual_port);

    let listener = TcpListener::bind(bind_addr).await?;
    info!("codesmith listening on http://{}", bind_addr);

    let ct = CancellationToken::new();
    let shutdown = ct.clone();
    let app = router(state);

    tokio::spawn(async move {
        let serve = axum::serve(
            listener,
            // ConnectInfo supplies the caller IP the guard middleware reads
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move { shutdown.cancelled().await });

        if let Err(e) = serve.await {
            error!(error = %e, "HTTP server error");
        }
    });

    Ok(ct)
}

/// Start the HTTP server and wait for shutdown.
///
/// Convenience wrapper that runs until Ctrl+C or cancellation.
pub async fn run_blocking(state: AppState, config: HttpConfig) -> anyhow::Result<()> {
    let ct = run(state, config).await?;

    info!("Press Ctrl+C to stop the server");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
        _ = ct.cancelled() => {
            info!("Server cancelled");
        }
    }

    ct.cancel();

    info!("HTTP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_config_default() {
        let config = HttpConfig::default();
        assert_eq!(config.bind.port(), DEFAULT_HTTP_PORT);
    }

    #[test]
    fn test_http_config_from_host_port() {
        let config = HttpConfig::from_host_port("127.0.0.1", 8080).unwrap();
        assert_eq!(config.bind.port(), 8080);
    }

    #[test]
    fn test_http_config_invalid_host() {
        assert!(HttpConfig::from_host_port("not a host", 8080).is_err());
    }
}
