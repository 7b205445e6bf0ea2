//! Private JSON-RPC client for playback daemon communication
//!
//! This crate provides a minimal JSON-RPC 2.0 client for talking to a media
//! playback daemon over a request/response transport. Every call is stamped
//! with a fresh correlation id and the reply is validated against it, so a
//! late or misrouted response is surfaced as an error instead of being
//! applied to the wrong request.

mod envelope;
mod error;

pub use envelope::{RpcFault, RpcRequest, RpcResponse, PROTOCOL_VERSION};
pub use error::RpcError;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde_json::Value;

/// A single request/response exchange with the daemon
///
/// Implementations send one serialized envelope and return the raw reply
/// body. The trait exists so the client can run against channels other than
/// HTTP, and so tests can substitute a scripted in-memory transport.
pub trait Transport: Send + Sync {
    fn send(&self, body: &str) -> Result<String, RpcError>;
}

/// HTTP POST transport against the daemon's RPC endpoint
#[derive(Debug, Clone)]
pub struct HttpTransport {
    agent: ureq::Agent,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport for the given endpoint URL with default timeouts
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(5))
                .timeout_read(Duration::from_secs(10))
                .build(),
            endpoint: endpoint.into(),
        }
    }
}

impl Transport for HttpTransport {
    fn send(&self, body: &str) -> Result<String, RpcError> {
        let response = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_string(body)
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => RpcError::Http(code),
                other => RpcError::Network(other.to_string()),
            })?;

        response
            .into_string()
            .map_err(|e| RpcError::Network(e.to_string()))
    }
}

/// JSON-RPC client with per-call request/response correlation
///
/// Correlation ids start at 1 and increment for every call; an id is never
/// reused within the client's lifetime. The client performs no retries:
/// each call is a single-shot exchange and retry policy belongs to the
/// caller.
pub struct RpcClient {
    transport: Box<dyn Transport>,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Create a client posting to the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_transport(Box::new(HttpTransport::new(endpoint)))
    }

    /// Create a client over a custom transport
    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            next_id: AtomicU64::new(0),
        }
    }

    /// Call a daemon method and return its result value
    ///
    /// Fails if the transport fails, the reply is not a well-formed
    /// envelope, the daemon reports a fault, or the reply's correlation id
    /// does not match the request's.
    pub fn call(&self, method: &str, params: Option<Value>) -> Result<Value, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let request = RpcRequest::new(id, method, params);
        let body = serde_json::to_string(&request)
            .map_err(|e| RpcError::Envelope(e.to_string()))?;

        let reply = self.transport.send(&body)?;
        self.extract_result(&reply, id)
    }

    fn extract_result(&self, reply: &str, expected_id: u64) -> Result<Value, RpcError> {
        let response: RpcResponse =
            serde_json::from_str(reply).map_err(|e| RpcError::Envelope(e.to_string()))?;

        if response.jsonrpc != PROTOCOL_VERSION {
            return Err(RpcError::Envelope(format!(
                "Unsupported protocol marker: {}",
                response.jsonrpc
            )));
        }

        // Correlation is checked before the error member: a fault carrying
        // someone else's id cannot be attributed to this request.
        if response.id != expected_id {
            return Err(RpcError::MismatchedId {
                expected: expected_id,
                received: response.id,
            });
        }

        if let Some(fault) = response.error {
            return Err(RpcError::Fault {
                code: fault.code,
                message: fault.message,
            });
        }

        Ok(response.result)
    }
}
