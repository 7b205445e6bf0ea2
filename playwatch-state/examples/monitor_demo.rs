//! Live monitor demo against a running playback daemon.
//!
//! Usage:
//!   cargo run --example monitor_demo -- http://127.0.0.1:6680/api/rpc
//!
//! The endpoint can also be supplied through the PLAYWATCH_ENDPOINT
//! environment variable. Prints connectivity transitions and now-playing
//! changes until interrupted.

use anyhow::{Context, Result};
use playwatch_state::{init_logging, LoggingMode, MonitorConfig, PlaybackMonitor};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(LoggingMode::Development).context("Failed to initialize logging")?;

    let endpoint = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("PLAYWATCH_ENDPOINT").ok())
        .unwrap_or_else(|| "http://127.0.0.1:6680/api/rpc".to_string());

    println!("Monitoring {} (press Ctrl+C to stop)", endpoint);

    let monitor = PlaybackMonitor::with_endpoint(endpoint, MonitorConfig::default())
        .context("Invalid monitor configuration")?;
    let handle = monitor.start();

    let mut connection = handle.watch_connection();
    let mut snapshot = handle.watch_snapshot();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = connection.changed() => {
                if changed.is_err() {
                    break;
                }
                println!("connectivity: {}", *connection.borrow());
            }
            changed = snapshot.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = snapshot.borrow().clone();
                if let Some(current) = current {
                    println!(
                        "{} - {} [{}s/{}s]",
                        current.track.artist,
                        current.track.title,
                        current.position_secs,
                        current.track.duration_secs,
                    );
                }
            }
        }
    }

    println!("Stopping monitor");
    handle.stop().await.context("Monitor shutdown failed")?;
    Ok(())
}
