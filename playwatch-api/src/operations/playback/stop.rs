//! Stop operation for the playback service

use serde_json::Value;

use crate::error::Result;
use crate::operation::PlaybackOperation;

/// Stop operation
pub struct StopOperation;

impl PlaybackOperation for StopOperation {
    type Request = ();
    type Response = ();

    const METHOD: &'static str = "playback.stop";

    fn build_params(_request: &Self::Request) -> Option<Value> {
        None
    }

    fn parse_result(_result: Value) -> Result<Self::Response> {
        Ok(())
    }
}
