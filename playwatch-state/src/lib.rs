//! Playback State Monitoring
//!
//! A lightweight, reactive view of a remote playback daemon, maintained by a
//! background polling task.
//!
//! # Features
//!
//! - **Connectivity tracking**: Online/reconnecting/offline classification
//!   derived purely from poll outcomes, with exponential reconnection backoff
//! - **Observable state**: Query or watch the latest snapshot using
//!   `tokio::sync::watch`
//! - **Adaptive cadence**: Poll faster while a track plays, slower while the
//!   player idles
//! - **Injectable source**: Swap the HTTP client for any `SnapshotSource`
//!
//! # Architecture
//!
//! ```text
//! SnapshotSource → PlaybackMonitor → StateStore → Watchers
//!                  (poll loop)       (queries)    (reactive)
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use playwatch_state::{MonitorConfig, PlaybackMonitor};
//!
//! let monitor = PlaybackMonitor::with_endpoint(
//!     "http://127.0.0.1:6680/api/rpc",
//!     MonitorConfig::default(),
//! )?;
//! let handle = monitor.start();
//!
//! // Watch connectivity transitions
//! let mut connection = handle.watch_connection();
//! while connection.changed().await.is_ok() {
//!     println!("daemon is {}", *connection.borrow());
//! }
//!
//! // Or read the current view without watching
//! if let Some(snapshot) = handle.snapshot() {
//!     println!("now playing: {}", snapshot.track.title);
//! }
//!
//! handle.stop().await?;
//! ```

// Core modules
pub mod config;
pub mod connection;
pub mod monitor;
pub mod source;
pub mod store;

// Error types
pub mod error;

// Logging infrastructure
pub mod logging;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::MonitorConfig;
pub use connection::{ConnectionTracker, ConnectivityState};
pub use monitor::{MonitorHandle, PlaybackMonitor};
pub use source::SnapshotSource;
pub use store::StateStore;

// Model types from the API crate, re-exported for convenience
pub use playwatch_api::{PlaybackSnapshot, PlayerState, TrackInfo};

// ============================================================================
// Re-exports - Error types
// ============================================================================

pub use error::{Result, StateError};

// ============================================================================
// Re-exports - Logging
// ============================================================================

pub use logging::{init_logging, init_logging_from_env, init_silent, LoggingError, LoggingMode};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::config::MonitorConfig;
    pub use crate::connection::{ConnectionTracker, ConnectivityState};
    pub use crate::monitor::{MonitorHandle, PlaybackMonitor};
    pub use crate::source::SnapshotSource;
    pub use crate::store::StateStore;
    pub use playwatch_api::{PlaybackSnapshot, PlayerState, TrackInfo};
}
