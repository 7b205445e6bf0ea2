//! High-level playback daemon API for player control
//!
//! This crate provides a type-safe, trait-based API for talking to the
//! playback daemon. It uses the private `rpc-client` crate for low-level
//! JSON-RPC communication.
//!
//! # Fetching the player snapshot
//!
//! The combined player + now-playing view comes from a single call:
//!
//! ```rust,no_run
//! use playwatch_api::PlaybackClient;
//!
//! let client = PlaybackClient::new("http://127.0.0.1:6680/api/rpc");
//!
//! let snapshot = client.get_snapshot()?;
//! println!("{} ({}s in)", snapshot.track.title, snapshot.position_secs);
//!
//! // Transport controls use the same client
//! client.pause()?;
//! # Ok::<(), playwatch_api::ApiError>(())
//! ```
//!
//! Every exchange is correlation-checked: a reply whose id does not match
//! the request is reported as a protocol error, never silently accepted.

pub mod client;
pub mod error;
pub mod model;
pub mod operation;
pub mod operations;

pub use client::PlaybackClient;
pub use error::{ApiError, Result};
pub use model::{PlaybackSnapshot, PlayerState, TrackInfo};
pub use operation::PlaybackOperation;
