//! Snapshot source seam for the poll loop

use playwatch_api::{PlaybackClient, PlaybackSnapshot};

/// Source of playback snapshots for the monitor
///
/// The poll loop fetches through this trait instead of a concrete client, so
/// tests can script outcomes and applications can substitute non-HTTP
/// channels. Any failure is reported as a single `ApiError`; the monitor
/// treats all of them as one kind of failed poll.
pub trait SnapshotSource: Send + Sync {
    /// Fetch one snapshot of the daemon's playback state
    ///
    /// This is a blocking call. The monitor runs it on the blocking thread
    /// pool, never on the async executor itself.
    fn fetch_snapshot(&self) -> playwatch_api::Result<PlaybackSnapshot>;
}

impl SnapshotSource for PlaybackClient {
    fn fetch_snapshot(&self) -> playwatch_api::Result<PlaybackSnapshot> {
        self.get_snapshot()
    }
}
