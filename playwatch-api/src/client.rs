use rpc_client::RpcClient;

use crate::error::Result;
use crate::model::PlaybackSnapshot;
use crate::operation::PlaybackOperation;
use crate::operations::playback::{
    GetSnapshotOperation, NextOperation, PauseOperation, PlayOperation, PreviousOperation,
    StopOperation,
};
use crate::operations::tracklist::{
    AddToTracklistOperation, AddToTracklistRequest, GetIndexOperation,
};

/// A client for executing operations against the playback daemon
///
/// This client bridges the stateless operation definitions and actual
/// network requests to the daemon. It uses the rpc-client crate for the
/// underlying JSON-RPC exchange, so every call inherits its correlation
/// checking.
///
/// # Example
/// ```rust,no_run
/// use playwatch_api::PlaybackClient;
///
/// let client = PlaybackClient::new("http://127.0.0.1:6680/api/rpc");
/// let snapshot = client.get_snapshot()?;
/// println!("player is {}", snapshot.player_state);
/// # Ok::<(), playwatch_api::ApiError>(())
/// ```
pub struct PlaybackClient {
    rpc: RpcClient,
}

impl PlaybackClient {
    /// Create a client talking to the daemon's RPC endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            rpc: RpcClient::new(endpoint),
        }
    }

    /// Create a client over a custom RPC client (for custom transports)
    ///
    /// Most applications should use `PlaybackClient::new()` instead. This
    /// method is the seam for tests and for non-HTTP channels.
    pub fn with_rpc_client(rpc: RpcClient) -> Self {
        Self { rpc }
    }

    /// Execute an operation against the daemon
    ///
    /// Takes any operation implementing `PlaybackOperation`, builds its
    /// params, performs the exchange, and parses the result into the
    /// operation's typed response.
    pub fn execute<Op: PlaybackOperation>(&self, request: &Op::Request) -> Result<Op::Response> {
        let params = Op::build_params(request);
        let result = self.rpc.call(Op::METHOD, params)?;
        Op::parse_result(result)
    }

    /// Fetch one combined player + now-playing snapshot
    pub fn get_snapshot(&self) -> Result<PlaybackSnapshot> {
        self.execute::<GetSnapshotOperation>(&())
    }

    /// Start playback, or resume when paused
    pub fn play(&self) -> Result<()> {
        self.execute::<PlayOperation>(&())
    }

    /// Pause playback
    pub fn pause(&self) -> Result<()> {
        self.execute::<PauseOperation>(&())
    }

    /// Stop playback
    pub fn stop(&self) -> Result<()> {
        self.execute::<StopOperation>(&())
    }

    /// Skip to the next track
    pub fn next(&self) -> Result<()> {
        self.execute::<NextOperation>(&())
    }

    /// Skip back to the previous track
    pub fn previous(&self) -> Result<()> {
        self.execute::<PreviousOperation>(&())
    }

    /// Position of the current track in the tracklist, if any
    pub fn tracklist_index(&self) -> Result<Option<u64>> {
        self.execute::<GetIndexOperation>(&())
    }

    /// Queue tracks directly after the current one
    ///
    /// Reads the current tracklist position first, then inserts behind it.
    /// With an empty tracklist the tracks are inserted at the front.
    pub fn queue_next(&self, uris: Vec<String>) -> Result<()> {
        let index = self.tracklist_index()?;
        let at_position = index.map(|i| i + 1).unwrap_or(0);

        self.execute::<AddToTracklistOperation>(&AddToTracklistRequest {
            uris,
            at_position: Some(at_position),
        })
    }

    /// Append tracks to the end of the tracklist
    pub fn queue_last(&self, uris: Vec<String>) -> Result<()> {
        self.execute::<AddToTracklistOperation>(&AddToTracklistRequest {
            uris,
            at_position: None,
        })
    }
}
