use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

/// Failures that can stop the simulator. All of them happen before or while the listener runs;
/// request handling itself has no error path.
#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid listen host '{host}': {source}")]
    InvalidAddress {
        host: String,
        #[source]
        source: AddrParseError,
    },

    #[error("failed to bind listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
