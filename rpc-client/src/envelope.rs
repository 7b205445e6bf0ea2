//! JSON-RPC 2.0 envelope types
//!
//! Outbound requests carry a protocol marker, a correlation id, a method
//! name and optional params. The `params` key is omitted entirely when no
//! parameters are given, matching what the daemon accepts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version marker carried by every envelope
pub const PROTOCOL_VERSION: &str = "2.0";

/// Outbound request envelope
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl RpcRequest {
    pub fn new(id: u64, method: &str, params: Option<Value>) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION,
            id,
            method: method.to_string(),
            params,
        }
    }
}

/// Inbound response envelope
///
/// A response carries either a `result` or an `error` object. Commands with
/// nothing to report use a null result, so `result` defaults to null rather
/// than being required.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub id: u64,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<RpcFault>,
}

/// Error object embedded in a fault response
#[derive(Debug, Clone, Deserialize)]
pub struct RpcFault {
    pub code: i64,
    pub message: String,
}
