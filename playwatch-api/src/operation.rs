use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Base trait for all daemon operations
///
/// Each operation pins down one RPC method: its name, how request data maps
/// onto the params object, and how the raw result value is validated into a
/// typed response. Keeping this per-operation keeps the client a thin
/// dispatcher and makes every wire shape individually testable.
pub trait PlaybackOperation {
    /// The request type for this operation, must be serializable
    type Request: Serialize;

    /// The response type this operation produces
    type Response;

    /// The RPC method name for this operation
    const METHOD: &'static str;

    /// Build the params object from the request data
    ///
    /// Returns `None` for operations that take no parameters, in which case
    /// the params key is left out of the envelope entirely.
    fn build_params(request: &Self::Request) -> Option<Value>;

    /// Validate and convert the raw result value into the typed response
    fn parse_result(result: Value) -> Result<Self::Response>;
}
