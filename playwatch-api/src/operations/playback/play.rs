//! Play operation for the playback service
//!
//! Starts playback, or resumes it when the player is paused.

use serde_json::Value;

use crate::error::Result;
use crate::operation::PlaybackOperation;

/// Play operation
pub struct PlayOperation;

impl PlaybackOperation for PlayOperation {
    type Request = ();
    type Response = ();

    const METHOD: &'static str = "playback.play";

    fn build_params(_request: &Self::Request) -> Option<Value> {
        None
    }

    fn parse_result(_result: Value) -> Result<Self::Response> {
        // The acknowledgement carries no data
        Ok(())
    }
}
