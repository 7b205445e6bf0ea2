//! GetIndex operation for the tracklist service

use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::operation::PlaybackOperation;

/// Position of the current track within the tracklist
///
/// The daemon answers with a null result when nothing is queued, so the
/// response is optional rather than defaulting to a sentinel index.
pub struct GetIndexOperation;

impl PlaybackOperation for GetIndexOperation {
    type Request = ();
    type Response = Option<u64>;

    const METHOD: &'static str = "tracklist.index";

    fn build_params(_request: &Self::Request) -> Option<Value> {
        None
    }

    fn parse_result(result: Value) -> Result<Self::Response> {
        match result {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_u64()
                .map(Some)
                .ok_or_else(|| ApiError::Validation(format!("Index out of range: {}", n))),
            other => Err(ApiError::Validation(format!(
                "Expected integer index, got {}",
                other
            ))),
        }
    }
}
