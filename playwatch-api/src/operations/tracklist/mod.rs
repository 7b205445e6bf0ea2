//! Tracklist service operations
//!
//! Queue inspection and insertion, used by the composite queueing helpers.

mod add;
mod get_index;

pub use add::{AddToTracklistOperation, AddToTracklistRequest};
pub use get_index::GetIndexOperation;
