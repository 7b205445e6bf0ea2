//! Previous-track operation for the playback service

use serde_json::Value;

use crate::error::Result;
use crate::operation::PlaybackOperation;

/// Skip back to the previous track in the tracklist
pub struct PreviousOperation;

impl PlaybackOperation for PreviousOperation {
    type Request = ();
    type Response = ();

    const METHOD: &'static str = "playback.previous";

    fn build_params(_request: &Self::Request) -> Option<Value> {
        None
    }

    fn parse_result(_result: Value) -> Result<Self::Response> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_previous_method_name() {
        assert_eq!(PreviousOperation::METHOD, "playback.previous");
    }

    #[test]
    fn test_previous_accepts_null_result() {
        assert!(PreviousOperation::parse_result(json!(null)).is_ok());
    }
}
