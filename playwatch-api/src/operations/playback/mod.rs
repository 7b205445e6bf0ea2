//! Playback service operations
//!
//! The snapshot query plus the transport-control commands.

mod get_snapshot;
mod next;
mod pause;
mod play;
mod previous;
mod stop;

pub use get_snapshot::GetSnapshotOperation;
pub use next::NextOperation;
pub use pause::PauseOperation;
pub use play::PlayOperation;
pub use previous::PreviousOperation;
pub use stop::StopOperation;
