//! Listener startup.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::schema::ListenerConfig;

/// Fatal startup failures. There is no server state to clean up when one of
/// these occurs.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid listen address {addr:?}: {source}")]
    Address {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
}

/// Bind the TCP listener for the configured address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, StartupError> {
    let addr: SocketAddr = config
        .bind_address
        .parse()
        .map_err(|source| StartupError::Address {
            addr: config.bind_address.clone(),
            source,
        })?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.bind_address.clone(),
            source,
        })?;

    tracing::info!(address = %addr, "listener bound");
    Ok(listener)
}
