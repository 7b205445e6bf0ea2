//! Playback monitor lifecycle and poll loop
//!
//! This module contains the PlaybackMonitor, which owns the background task
//! that keeps the StateStore current. The task repeatedly fetches a snapshot
//! from a SnapshotSource, feeds the outcome into a ConnectionTracker, and
//! publishes the resulting connectivity and snapshot through the store.
//!
//! # Poll Cycle
//!
//! Each iteration of the background task:
//! 1. Sleeps for the delay chosen by the previous outcome (the configured
//!    startup delay before the very first poll)
//! 2. Runs one snapshot fetch on the blocking thread pool
//! 3. Records the outcome in the tracker and updates the store
//! 4. Adopts the tracker's delay for the next iteration
//!
//! Only one fetch is ever in flight; the next one is not scheduled until the
//! current one resolves. Fetch failures of any kind are absorbed here and
//! logged, never propagated to the caller.
//!
//! # Shutdown
//!
//! `MonitorHandle::stop()` signals the task and waits up to 5 seconds for it
//! to finish. Dropping the handle without calling `stop()` still signals the
//! task, which exits at its next wake-up.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use playwatch_api::{PlaybackClient, PlaybackSnapshot};

use crate::config::MonitorConfig;
use crate::connection::{ConnectionTracker, ConnectivityState};
use crate::error::{Result, StateError};
use crate::source::SnapshotSource;
use crate::store::StateStore;

/// How long `stop()` waits for the poll task before giving up
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Polls a snapshot source and maintains an observable view of the daemon
///
/// The monitor is inert until `start()` is called. Construction validates the
/// configuration, so a started monitor always runs with usable intervals.
pub struct PlaybackMonitor {
    source: Arc<dyn SnapshotSource>,
    config: MonitorConfig,
}

impl PlaybackMonitor {
    /// Create a monitor over an arbitrary snapshot source
    ///
    /// # Errors
    ///
    /// Returns `StateError::Config` when the configuration fails validation.
    pub fn new(source: Arc<dyn SnapshotSource>, config: MonitorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { source, config })
    }

    /// Create a monitor polling the daemon's HTTP RPC endpoint
    ///
    /// Convenience wrapper that builds a `PlaybackClient` for the endpoint
    /// and uses it as the snapshot source.
    pub fn with_endpoint(endpoint: impl Into<String>, config: MonitorConfig) -> Result<Self> {
        Self::new(Arc::new(PlaybackClient::new(endpoint)), config)
    }

    /// Start the background poll task
    ///
    /// Must be called from within a tokio runtime. The returned handle is the
    /// only way to read the monitored state and to stop the task.
    pub fn start(self) -> MonitorHandle {
        let store = Arc::new(StateStore::new());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(Self::poll_task(
            self.source,
            self.config,
            Arc::clone(&store),
            shutdown_rx,
        ));

        MonitorHandle {
            store,
            shutdown_tx: Some(shutdown_tx),
            task: Some(task),
        }
    }

    /// Background task driving the poll cycle
    async fn poll_task(
        source: Arc<dyn SnapshotSource>,
        config: MonitorConfig,
        store: Arc<StateStore>,
        mut shutdown_rx: watch::Receiver<bool>,
    ) {
        let mut delay = config.startup_delay;
        let mut tracker = ConnectionTracker::new(config);

        debug!(startup_delay_ms = delay.as_millis() as u64, "Poll task started");

        loop {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = shutdown_rx.changed() => {
                    debug!("Shutdown signal received");
                    break;
                }
            }

            let fetch_source = Arc::clone(&source);
            let fetch = tokio::task::spawn_blocking(move || fetch_source.fetch_snapshot());

            // A shutdown during the fetch abandons the in-flight call; its
            // result is discarded and never reaches the store.
            let outcome = tokio::select! {
                result = fetch => result,
                _ = shutdown_rx.changed() => {
                    debug!("Shutdown signal received mid-fetch");
                    break;
                }
            };

            let previous = tracker.state();
            delay = match outcome {
                Ok(Ok(snapshot)) => {
                    let next = tracker.record_success(snapshot.player_state);
                    if store.apply_snapshot(snapshot) {
                        debug!("Snapshot updated");
                    }
                    store.set_connection(tracker.state());
                    next
                }
                Ok(Err(err)) => {
                    let next = tracker.record_failure();
                    warn!(error = %err, failures = tracker.failures(), "Snapshot fetch failed");
                    store.set_connection(tracker.state());
                    next
                }
                Err(join_err) => {
                    let next = tracker.record_failure();
                    warn!(error = %join_err, failures = tracker.failures(), "Snapshot fetch task failed");
                    store.set_connection(tracker.state());
                    next
                }
            };

            let current = tracker.state();
            if previous != current {
                info!(from = %previous, to = %current, "Connectivity changed");
            }
            debug!(delay_ms = delay.as_millis() as u64, "Next poll scheduled");
        }

        debug!("Poll task ended");
    }
}

/// Handle to a running monitor
///
/// Exposes the observable state and controls the poll task's lifetime. The
/// store outlives the handle; receivers obtained from it stay valid until the
/// last reference to the store is dropped.
pub struct MonitorHandle {
    store: Arc<StateStore>,
    shutdown_tx: Option<watch::Sender<bool>>,
    task: Option<JoinHandle<()>>,
}

impl MonitorHandle {
    /// Shared reference to the observable state store
    pub fn store(&self) -> Arc<StateStore> {
        Arc::clone(&self.store)
    }

    /// Current connectivity classification
    pub fn connection(&self) -> ConnectivityState {
        self.store.connection()
    }

    /// Most recently fetched snapshot, `None` before the first success
    pub fn snapshot(&self) -> Option<PlaybackSnapshot> {
        self.store.snapshot()
    }

    /// Get a watch receiver for connectivity changes
    pub fn watch_connection(&self) -> watch::Receiver<ConnectivityState> {
        self.store.watch_connection()
    }

    /// Get a watch receiver for snapshot changes
    pub fn watch_snapshot(&self) -> watch::Receiver<Option<PlaybackSnapshot>> {
        self.store.watch_snapshot()
    }

    /// Whether the poll task is still running
    pub fn is_running(&self) -> bool {
        self.task.as_ref().map(|task| !task.is_finished()).unwrap_or(false)
    }

    /// Stop the poll task and wait for it to finish
    ///
    /// # Errors
    ///
    /// Returns `StateError::ShutdownFailed` if the task panicked or did not
    /// finish within the shutdown timeout.
    pub async fn stop(mut self) -> Result<()> {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(true);
        }

        if let Some(task) = self.task.take() {
            match timeout(SHUTDOWN_TIMEOUT, task).await {
                Ok(Ok(())) => Ok(()),
                Ok(Err(join_err)) => {
                    warn!(error = %join_err, "Poll task terminated abnormally");
                    Err(StateError::ShutdownFailed)
                }
                Err(_) => Err(StateError::ShutdownFailed),
            }
        } else {
            Ok(())
        }
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(true);
        }
        // The task cannot be awaited here; it exits at its next wake-up
    }
}
