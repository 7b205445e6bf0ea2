//! Playback domain model
//!
//! The types a successful snapshot fetch produces. Values are immutable once
//! built; consumers replace whole snapshots rather than patching fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Player state reported by the daemon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerState {
    /// Currently playing audio
    Playing,
    /// Playback is paused
    Paused,
    /// Playback is stopped
    Stopped,
}

impl PlayerState {
    /// Wire representation of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerState::Playing => "playing",
            PlayerState::Paused => "paused",
            PlayerState::Stopped => "stopped",
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        PlayerState::Stopped
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Now-playing track metadata
///
/// The daemon reports all fields unconditionally; an idle player carries
/// empty strings and a zero duration rather than missing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackInfo {
    /// Track URI
    #[serde(rename = "trackUri")]
    pub uri: String,
    /// Track title
    pub title: String,
    /// Artist name
    pub artist: String,
    /// Album name
    pub album: String,
    /// Track duration in seconds
    #[serde(rename = "duration")]
    pub duration_secs: u64,
}

impl TrackInfo {
    /// Check whether the daemon reported an actual track
    pub fn is_empty(&self) -> bool {
        self.uri.is_empty()
    }
}

/// One point-in-time read of the daemon's playback state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Player state at the time of the read
    pub player_state: PlayerState,
    /// Playback position within the current track, in seconds
    pub position_secs: u64,
    /// Now-playing track metadata
    pub track: TrackInfo,
}
