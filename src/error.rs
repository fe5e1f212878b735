//! Error types for kvclient
//!
//! Every failure in a run is an I/O failure at some phase of the exchange.
//! Phase variants carry the endpoint so diagnostics say where we were talking to.

use thiserror::Error;

use crate::config::Endpoint;

/// Result type alias using ClientError
pub type Result<T> = std::result::Result<T, ClientError>;

/// Unified error type for kvclient operations
#[derive(Debug, Error)]
pub enum ClientError {
    // -------------------------------------------------------------------------
    // Connection Phases
    // -------------------------------------------------------------------------
    #[error("failed to connect to {endpoint}: {source}")]
    Connect {
        endpoint: Endpoint,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to send command to {endpoint}: {source}")]
    Send {
        endpoint: Endpoint,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to receive response from {endpoint}: {source}")]
    Receive {
        endpoint: Endpoint,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to close connection to {endpoint}: {source}")]
    Close {
        endpoint: Endpoint,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// The underlying I/O error, if this failure came from the socket
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            ClientError::Connect { source, .. }
            | ClientError::Send { source, .. }
            | ClientError::Receive { source, .. }
            | ClientError::Close { source, .. } => Some(source),
            ClientError::Io(e) => Some(e),
            ClientError::Config(_) => None,
        }
    }
}
