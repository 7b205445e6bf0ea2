//! Error types for the JSON-RPC client

use thiserror::Error;

/// Errors that can occur during a JSON-RPC exchange
#[derive(Debug, Error)]
pub enum RpcError {
    /// Network or HTTP communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status returned by the daemon endpoint
    #[error("HTTP error: status {0}")]
    Http(u16),

    /// Malformed or unexpected response envelope
    #[error("Envelope error: {0}")]
    Envelope(String),

    /// Error object returned by the daemon
    #[error("Daemon fault {code}: {message}")]
    Fault { code: i64, message: String },

    /// Mismatched correlation id between request and response
    #[error("Mismatched id: sent {expected}, received {received}")]
    MismatchedId { expected: u64, received: u64 },
}
