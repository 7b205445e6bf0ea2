//! Daemon operations organized by service
//!
//! This module contains the individual RPC operations, organized by the
//! daemon service they belong to.

pub mod playback;
pub mod tracklist;

// Re-export commonly used operations
pub use playback::{
    GetSnapshotOperation, NextOperation, PauseOperation, PlayOperation, PreviousOperation,
    StopOperation,
};
pub use tracklist::{AddToTracklistOperation, AddToTracklistRequest, GetIndexOperation};
