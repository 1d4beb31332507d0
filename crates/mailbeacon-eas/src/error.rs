//! Error types for the ActiveSync contract layer.

use std::time::Duration;

use thiserror::Error;

/// Errors reported by an ActiveSync transport.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error during network operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Server answered with a non-success HTTP status.
    #[error("HTTP status {status}")]
    Http {
        /// The status code returned by the server.
        status: u16,
    },

    /// Authentication failed (bad credentials, blocked mailbox).
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Command-level EAS status code signalling failure.
    #[error("Command failed with status {code}")]
    Status {
        /// The EAS status code from the response body.
        code: u32,
    },

    /// Malformed or unexpected response data.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Operation timed out.
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
