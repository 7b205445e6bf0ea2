//! Connectivity tracking for the polling loop
//!
//! This module contains the pure state machine that classifies the daemon as
//! online, reconnecting, or offline based solely on poll outcomes. It owns the
//! consecutive-failure counter and derives the delay before the next poll, but
//! performs no I/O itself.
//!
//! # Transition Rules
//!
//! - A successful poll always moves to `Online` and resets the failure count.
//! - A failed poll increments the failure count by one. Below the configured
//!   threshold the state is `Reconnecting`; at or above it, `Offline`.
//! - The failure count keeps growing while the daemon stays unreachable, so
//!   the backoff keeps widening even after the state settles on `Offline`.

use std::fmt;
use std::time::Duration;

use playwatch_api::PlayerState;

use crate::config::MonitorConfig;

/// Reachability of the playback daemon as inferred from poll outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectivityState {
    /// The failure threshold has been crossed
    Offline,
    /// Not yet connected, or recently failed but still below the threshold
    Reconnecting,
    /// The most recent poll succeeded
    Online,
}

impl ConnectivityState {
    /// String form used in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectivityState::Offline => "offline",
            ConnectivityState::Reconnecting => "reconnecting",
            ConnectivityState::Online => "online",
        }
    }

    /// Whether the most recent poll succeeded
    pub fn is_online(&self) -> bool {
        matches!(self, ConnectivityState::Online)
    }
}

impl Default for ConnectivityState {
    fn default() -> Self {
        ConnectivityState::Reconnecting
    }
}

impl fmt::Display for ConnectivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tracks consecutive poll failures and derives connectivity + poll cadence
///
/// The tracker starts in `Reconnecting` with zero recorded failures, matching
/// a monitor that has not yet reached the daemon. Each poll outcome is fed in
/// through `record_success` or `record_failure`, and the returned `Duration`
/// is the delay the caller should wait before polling again.
#[derive(Debug, Clone)]
pub struct ConnectionTracker {
    state: ConnectivityState,
    failures: u32,
    config: MonitorConfig,
}

impl ConnectionTracker {
    /// Create a tracker that has not yet observed any poll outcome
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            state: ConnectivityState::Reconnecting,
            failures: 0,
            config,
        }
    }

    /// Current connectivity classification
    pub fn state(&self) -> ConnectivityState {
        self.state
    }

    /// Number of consecutive failures since the last successful poll
    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Record a successful poll, returns the delay before the next one
    ///
    /// The delay follows the player state from the freshly fetched snapshot,
    /// so an active player is sampled more often than an idle one.
    pub fn record_success(&mut self, player_state: PlayerState) -> Duration {
        self.state = ConnectivityState::Online;
        self.failures = 0;
        self.config.interval_for(player_state)
    }

    /// Record a failed poll, returns the backoff before the next attempt
    pub fn record_failure(&mut self) -> Duration {
        self.failures = self.failures.saturating_add(1);
        self.state = if self.failures < self.config.failure_threshold {
            ConnectivityState::Reconnecting
        } else {
            ConnectivityState::Offline
        };
        self.backoff_delay()
    }

    /// Exponential backoff for the current failure count
    ///
    /// The delay is `base * 2^failures`, clamped to `max_backoff` when one is
    /// configured. The exponent is bounded and the multiply saturates, so
    /// extreme failure counts degrade to a fixed very large delay instead of
    /// wrapping around.
    fn backoff_delay(&self) -> Duration {
        let base_ms = self.config.base_backoff.as_millis() as u64;
        let multiplier = 1u64 << self.failures.min(63);
        let delay = Duration::from_millis(base_ms.saturating_mul(multiplier));

        match self.config.max_backoff {
            Some(cap) => delay.min(cap),
            None => delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tracker() -> ConnectionTracker {
        ConnectionTracker::new(MonitorConfig::default())
    }

    #[test]
    fn test_tracker_starts_reconnecting() {
        let tracker = tracker();
        assert_eq!(tracker.state(), ConnectivityState::Reconnecting);
        assert_eq!(tracker.failures(), 0);
    }

    #[test]
    fn test_success_goes_online_and_resets_failures() {
        let mut tracker = tracker();
        tracker.record_failure();
        tracker.record_failure();

        let delay = tracker.record_success(PlayerState::Playing);

        assert_eq!(tracker.state(), ConnectivityState::Online);
        assert_eq!(tracker.failures(), 0);
        assert_eq!(delay, Duration::from_millis(500));
    }

    #[test]
    fn test_poll_delay_follows_player_state() {
        let mut tracker = tracker();

        let idle = tracker.record_success(PlayerState::Stopped);
        assert_eq!(idle, Duration::from_millis(1500));

        let active = tracker.record_success(PlayerState::Playing);
        assert_eq!(active, Duration::from_millis(500));

        let paused = tracker.record_success(PlayerState::Paused);
        assert_eq!(paused, Duration::from_millis(750));
    }

    #[test]
    fn test_failures_below_threshold_stay_reconnecting() {
        let mut tracker = tracker();

        for expected in 1..=4u32 {
            tracker.record_failure();
            assert_eq!(tracker.state(), ConnectivityState::Reconnecting);
            assert_eq!(tracker.failures(), expected);
        }
    }

    #[test]
    fn test_threshold_failure_goes_offline() {
        let mut tracker = tracker();

        for _ in 0..4 {
            tracker.record_failure();
        }
        assert_eq!(tracker.state(), ConnectivityState::Reconnecting);

        tracker.record_failure();
        assert_eq!(tracker.state(), ConnectivityState::Offline);
        assert_eq!(tracker.failures(), 5);
    }

    #[test]
    fn test_backoff_doubles_per_failure() {
        let mut tracker = tracker();

        let expected_ms = [1000, 2000, 4000, 8000, 16000];
        for expected in expected_ms {
            assert_eq!(tracker.record_failure(), Duration::from_millis(expected));
        }
    }

    #[test]
    fn test_success_after_offline_recovers() {
        let mut tracker = tracker();
        for _ in 0..6 {
            tracker.record_failure();
        }
        assert_eq!(tracker.state(), ConnectivityState::Offline);

        let delay = tracker.record_success(PlayerState::Paused);

        assert_eq!(tracker.state(), ConnectivityState::Online);
        assert_eq!(tracker.failures(), 0);
        assert_eq!(delay, Duration::from_millis(750));
    }

    #[test]
    fn test_failures_keep_counting_past_threshold() {
        let mut tracker = tracker();

        for _ in 0..7 {
            tracker.record_failure();
        }

        assert_eq!(tracker.state(), ConnectivityState::Offline);
        assert_eq!(tracker.failures(), 7);
    }

    #[test]
    fn test_backoff_respects_cap() {
        let config = MonitorConfig::default().with_max_backoff(Duration::from_secs(3));
        let mut tracker = ConnectionTracker::new(config);

        assert_eq!(tracker.record_failure(), Duration::from_millis(1000));
        assert_eq!(tracker.record_failure(), Duration::from_millis(2000));
        assert_eq!(tracker.record_failure(), Duration::from_secs(3));
        assert_eq!(tracker.record_failure(), Duration::from_secs(3));
    }

    #[test]
    fn test_backoff_saturates_on_extreme_failure_counts() {
        let mut tracker = tracker();

        let mut last = Duration::ZERO;
        for _ in 0..80 {
            last = tracker.record_failure();
        }

        assert_eq!(last, Duration::from_millis(u64::MAX));
        assert_eq!(tracker.failures(), 80);
    }

    #[test]
    fn test_custom_threshold() {
        let config = MonitorConfig::default().with_failure_threshold(2);
        let mut tracker = ConnectionTracker::new(config);

        tracker.record_failure();
        assert_eq!(tracker.state(), ConnectivityState::Reconnecting);

        tracker.record_failure();
        assert_eq!(tracker.state(), ConnectivityState::Offline);
    }

    #[test]
    fn test_connectivity_state_display() {
        assert_eq!(ConnectivityState::Offline.to_string(), "offline");
        assert_eq!(ConnectivityState::Reconnecting.to_string(), "reconnecting");
        assert_eq!(ConnectivityState::Online.to_string(), "online");
    }

    proptest! {
        #[test]
        fn prop_backoff_never_decreases_without_cap(failures in 1usize..40) {
            let mut tracker = ConnectionTracker::new(MonitorConfig::default());
            let mut previous = Duration::ZERO;
            for _ in 0..failures {
                let delay = tracker.record_failure();
                prop_assert!(delay >= previous);
                previous = delay;
            }
        }

        #[test]
        fn prop_capped_backoff_never_exceeds_cap(failures in 1usize..80, cap_ms in 500u64..10_000) {
            let config = MonitorConfig::default().with_max_backoff(Duration::from_millis(cap_ms));
            let mut tracker = ConnectionTracker::new(config);
            for _ in 0..failures {
                prop_assert!(tracker.record_failure() <= Duration::from_millis(cap_ms));
            }
        }

        #[test]
        fn prop_failure_count_tracks_consecutive_failures(failures in 0u32..30) {
            let mut tracker = ConnectionTracker::new(MonitorConfig::default());
            for _ in 0..failures {
                tracker.record_failure();
            }
            prop_assert_eq!(tracker.failures(), failures);

            tracker.record_success(PlayerState::Playing);
            prop_assert_eq!(tracker.failures(), 0);
            prop_assert_eq!(tracker.state(), ConnectivityState::Online);
        }
    }
}
