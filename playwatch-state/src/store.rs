//! Observable state store with reactive watchers
//!
//! The StateStore holds the monitor's view of the daemon: the current
//! connectivity classification and the most recently fetched playback
//! snapshot. It uses `tokio::sync::watch` channels so watchers are notified
//! whenever either value actually changes.
//!
//! # Architecture
//!
//! ```text
//! StateStore
//! ├── connection: watch::Sender<ConnectivityState>
//! └── snapshot:   watch::Sender<Option<PlaybackSnapshot>>
//! ```
//!
//! The poll loop is the only writer. Readers either query the current value
//! directly or subscribe for changes:
//!
//! ```rust,ignore
//! let store = handle.store();
//!
//! // Query current value (instant)
//! if let Some(snapshot) = store.snapshot() {
//!     println!("Now playing: {}", snapshot.track.title);
//! }
//!
//! // Watch for changes (reactive)
//! let mut rx = store.watch_connection();
//! tokio::spawn(async move {
//!     while rx.changed().await.is_ok() {
//!         println!("Connectivity: {}", *rx.borrow());
//!     }
//! });
//! ```

use tokio::sync::watch;

use playwatch_api::PlaybackSnapshot;

use crate::connection::ConnectivityState;

/// Observable store for connectivity and the latest playback snapshot
///
/// Starts with `ConnectivityState::Reconnecting` and no snapshot, matching a
/// monitor that has not yet completed its first poll. The snapshot survives
/// connectivity loss, so readers can keep showing the last known track while
/// the daemon is unreachable.
pub struct StateStore {
    connection_tx: watch::Sender<ConnectivityState>,
    snapshot_tx: watch::Sender<Option<PlaybackSnapshot>>,
}

impl StateStore {
    /// Create a store with no snapshot and `Reconnecting` connectivity
    pub fn new() -> Self {
        let (connection_tx, _) = watch::channel(ConnectivityState::Reconnecting);
        let (snapshot_tx, _) = watch::channel(None);

        Self {
            connection_tx,
            snapshot_tx,
        }
    }

    // ========================================================================
    // Reading (instant, non-async)
    // ========================================================================

    /// Current connectivity classification
    pub fn connection(&self) -> ConnectivityState {
        *self.connection_tx.borrow()
    }

    /// Most recently fetched snapshot, `None` before the first success
    pub fn snapshot(&self) -> Option<PlaybackSnapshot> {
        self.snapshot_tx.borrow().clone()
    }

    // ========================================================================
    // Watching (reactive)
    // ========================================================================

    /// Get a watch receiver for connectivity changes
    ///
    /// The receiver can `.borrow()` the current value instantly or
    /// `.changed().await` to wait for the next transition.
    pub fn watch_connection(&self) -> watch::Receiver<ConnectivityState> {
        self.connection_tx.subscribe()
    }

    /// Get a watch receiver for snapshot changes
    pub fn watch_snapshot(&self) -> watch::Receiver<Option<PlaybackSnapshot>> {
        self.snapshot_tx.subscribe()
    }

    // ========================================================================
    // Writing (called by the poll loop)
    // ========================================================================

    /// Set the connectivity state, returns true if the value changed
    pub(crate) fn set_connection(&self, state: ConnectivityState) -> bool {
        let changed = *self.connection_tx.borrow() != state;

        if changed {
            // send_replace() updates the value even when no receivers exist
            self.connection_tx.send_replace(state);
        }
        changed
    }

    /// Replace the stored snapshot wholesale, returns true if it changed
    ///
    /// Identical consecutive snapshots are absorbed without notifying
    /// watchers.
    pub(crate) fn apply_snapshot(&self, snapshot: PlaybackSnapshot) -> bool {
        let changed = self.snapshot_tx.borrow().as_ref() != Some(&snapshot);

        if changed {
            self.snapshot_tx.send_replace(Some(snapshot));
        }
        changed
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playwatch_api::{PlayerState, TrackInfo};

    fn sample_snapshot(title: &str, position_secs: u64) -> PlaybackSnapshot {
        PlaybackSnapshot {
            player_state: PlayerState::Playing,
            position_secs,
            track: TrackInfo {
                uri: "local:track:sample.flac".to_string(),
                title: title.to_string(),
                artist: "Artist".to_string(),
                album: "Album".to_string(),
                duration_secs: 240,
            },
        }
    }

    #[test]
    fn test_store_initial_values() {
        let store = StateStore::new();
        assert_eq!(store.connection(), ConnectivityState::Reconnecting);
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn test_set_connection_reports_change() {
        let store = StateStore::new();

        assert!(store.set_connection(ConnectivityState::Online));
        assert_eq!(store.connection(), ConnectivityState::Online);

        // Same value again is absorbed
        assert!(!store.set_connection(ConnectivityState::Online));
    }

    #[test]
    fn test_apply_snapshot_overwrites_wholesale() {
        let store = StateStore::new();

        assert!(store.apply_snapshot(sample_snapshot("First", 10)));
        assert!(store.apply_snapshot(sample_snapshot("Second", 0)));

        let current = store.snapshot().unwrap();
        assert_eq!(current.track.title, "Second");
        assert_eq!(current.position_secs, 0);
    }

    #[test]
    fn test_identical_snapshot_is_absorbed() {
        let store = StateStore::new();

        assert!(store.apply_snapshot(sample_snapshot("Same", 30)));
        assert!(!store.apply_snapshot(sample_snapshot("Same", 30)));
    }

    #[test]
    fn test_snapshot_survives_connection_loss() {
        let store = StateStore::new();

        store.apply_snapshot(sample_snapshot("Sticky", 5));
        store.set_connection(ConnectivityState::Online);
        store.set_connection(ConnectivityState::Offline);

        assert_eq!(store.connection(), ConnectivityState::Offline);
        assert_eq!(store.snapshot().unwrap().track.title, "Sticky");
    }

    #[tokio::test]
    async fn test_watch_connection_notifies() {
        let store = StateStore::new();
        let mut rx = store.watch_connection();

        assert_eq!(*rx.borrow(), ConnectivityState::Reconnecting);

        store.set_connection(ConnectivityState::Online);

        assert!(rx.changed().await.is_ok());
        assert_eq!(*rx.borrow(), ConnectivityState::Online);
    }

    #[tokio::test]
    async fn test_watch_snapshot_skips_suppressed_updates() {
        let store = StateStore::new();
        let mut rx = store.watch_snapshot();

        store.apply_snapshot(sample_snapshot("Only", 1));
        assert!(rx.changed().await.is_ok());
        rx.borrow_and_update();

        // An identical snapshot must not wake the watcher again
        store.apply_snapshot(sample_snapshot("Only", 1));
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_multiple_watchers_see_updates() {
        let store = StateStore::new();
        let mut first = store.watch_connection();
        let mut second = store.watch_connection();

        store.set_connection(ConnectivityState::Offline);

        assert!(first.changed().await.is_ok());
        assert!(second.changed().await.is_ok());
        assert_eq!(*first.borrow(), ConnectivityState::Offline);
        assert_eq!(*second.borrow(), ConnectivityState::Offline);
    }
}
