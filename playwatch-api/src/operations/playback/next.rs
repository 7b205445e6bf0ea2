//! Next-track operation for the playback service

use serde_json::Value;

use crate::error::Result;
use crate::operation::PlaybackOperation;

/// Skip to the next track in the tracklist
pub struct NextOperation;

impl PlaybackOperation for NextOperation {
    type Request = ();
    type Response = ();

    const METHOD: &'static str = "playback.next";

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
    fn test_next_method_name() {
        assert_eq!(NextOperation::METHOD, "playback.next");
    }

    #[test]
    fn test_next_accepts_null_result() {
        assert!(NextOperation::parse_result(json!(null)).is_ok());
    }
}
