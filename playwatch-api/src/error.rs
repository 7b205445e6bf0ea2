use rpc_client::RpcError;
use thiserror::Error;

/// High-level API errors for daemon operations
///
/// This enum abstracts away the underlying RPC exchange details. Every
/// failure a caller can see from this crate arrives as one of these
/// variants, whether it started as transport trouble, a broken envelope,
/// a daemon-reported fault, or a result that fails structural validation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// Connection failures, timeouts, and non-success HTTP statuses from
    /// the daemon endpoint.
    #[error("Network error: {0}")]
    Network(String),

    /// Protocol-level failure
    ///
    /// A malformed response envelope or a reply whose correlation id does
    /// not match the request it should answer.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Fault reported by the daemon
    ///
    /// The exchange completed but the daemon answered with an error object
    /// instead of a result.
    #[error("Daemon fault {code}: {message}")]
    Fault { code: i64, message: String },

    /// Result payload failed structural validation
    ///
    /// The daemon answered with a result that is missing required fields or
    /// carries values outside the allowed domain.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Convert from RpcError to ApiError
impl From<RpcError> for ApiError {
    fn from(error: RpcError) -> Self {
        match error {
            RpcError::Network(msg) => ApiError::Network(msg),
            RpcError::Http(status) => ApiError::Network(format!("HTTP status {}", status)),
            RpcError::Envelope(msg) => ApiError::Protocol(msg),
            RpcError::Fault { code, message } => ApiError::Fault { code, message },
            mismatched @ RpcError::MismatchedId { .. } => {
                ApiError::Protocol(mismatched.to_string())
            }
        }
    }
}
