//! GetSnapshot operation for the playback service
//!
//! Retrieves combined player + now-playing data in one exchange. The result
//! is structurally validated before it is handed out: missing fields or a
//! state value outside the allowed set fail the whole fetch rather than
//! producing a partial snapshot.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::model::{PlaybackSnapshot, PlayerState, TrackInfo};
use crate::operation::PlaybackOperation;

/// GetSnapshot operation
pub struct GetSnapshotOperation;

/// Wire shape of the snapshot result
#[derive(Deserialize)]
struct SnapshotPayload {
    playback: PlaybackSection,
    playing: TrackInfo,
}

#[derive(Deserialize)]
struct PlaybackSection {
    state: PlayerState,
    position: u64,
}

impl PlaybackOperation for GetSnapshotOperation {
    type Request = ();
    type Response = PlaybackSnapshot;

    const METHOD: &'static str = "playback.get_snapshot";

    fn build_params(_request: &Self::Request) -> Option<Value> {
        None
    }

    fn parse_result(result: Value) -> Result<Self::Response> {
        let payload: SnapshotPayload = serde_json::from_value(result)
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        Ok(PlaybackSnapshot {
            player_state: payload.playback.state,
            position_secs: payload.playback.position,
            track: payload.playing,
        })
    }
}
