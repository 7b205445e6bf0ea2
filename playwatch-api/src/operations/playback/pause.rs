//! Pause operation for the playback service

use serde_json::Value;

use crate::error::Result;
use crate::operation::PlaybackOperation;

/// Pause operation
pub struct PauseOperation;

impl PlaybackOperation for PauseOperation {
    type Request = ();
    type Response = ();

    const METHOD: &'static str = "playback.pause";

    fn build_params(_request: &Self::Request) -> Option<Value> {
        None
    }

    fn parse_result(_result: Value) -> Result<Self::Response> {
        Ok(())
    }
}
