//! Utility functions shared across the application.

use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::warn;

/// Find an available port, starting from the preferred port.
///
/// Strategy:
/// 1. Try the preferred port first
/// 2. If unavailable, try the next 10 consecutive ports
/// 3. If all are unavailable, let the OS assign a random available port
pub async fn find_available_port(host: &str, preferred: u16) -> std::io::Result<u16> {
    // Try preferred port
    if try_bind(host, preferred).await? {
        return Ok(preferred);
    }

    // Try next 10 ports
    for offset in 1..=10 {
        let port = preferred.saturating_add(offset);
        if try_bind(host, port).await? {
            warn!(
                preferred,
                actual = port,
                "Preferred port unavailable, using alternate"
            );
            return Ok(port);
        }
    }

    // Let OS assign a port
    let addr = parse_addr(host, 0)?;
    let listener = TcpListener::bind(addr).await?;
    let port = listener.local_addr()?.port();
    drop(listener);
    warn!(preferred, actual = port, "Using OS-assigned port");
    Ok(port)
}

async fn try_bind(host: &str, port: u16) -> std::io::Result<bool> {
    let addr = parse_addr(host, port)?;
    match TcpListener::bind(addr).await {
        Ok(listener) => {
            drop(listener);
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}

fn parse_addr(host: &str, port: u16) -> std::io::Result<SocketAddr> {
    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
}
