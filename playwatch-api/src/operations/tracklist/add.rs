//! AddToTracklist operation for the tracklist service

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::Result;
use crate::operation::PlaybackOperation;

/// Add tracks to the tracklist
pub struct AddToTracklistOperation;

/// Request for the add operation
#[derive(Debug, Clone, Serialize)]
pub struct AddToTracklistRequest {
    /// URIs of the tracks to add, in order
    pub uris: Vec<String>,
    /// Zero-based insertion position; appended to the end when absent
    pub at_position: Option<u64>,
}

impl PlaybackOperation for AddToTracklistOperation {
    type Request = AddToTracklistRequest;
    type Response = ();

    const METHOD: &'static str = "tracklist.add";

    fn build_params(request: &Self::Request) -> Option<Value> {
        let mut params = json!({ "uris": request.uris });
        if let Some(position) = request.at_position {
            params["at_position"] = json!(position);
        }
        Some(params)
    }

    fn parse_result(_result: Value) -> Result<Self::Response> {
        Ok(())
    }
}
