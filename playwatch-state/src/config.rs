//! Configuration types for the playwatch-state crate
//!
//! This module defines the configuration structure that controls the behavior
//! of the PlaybackMonitor, including polling cadence, failure thresholds,
//! and reconnection backoff.

use std::time::Duration;

use playwatch_api::PlayerState;

use crate::error::StateError;

/// Configuration for the PlaybackMonitor
///
/// This struct controls all aspects of the monitor's behavior, from how often
/// the daemon is polled in each player state to how aggressively reconnection
/// is retried after failures.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Base delay used to derive reconnection backoff
    /// Default: 500 milliseconds
    pub base_backoff: Duration,

    /// Upper bound on reconnection backoff, unbounded when None
    /// Default: None
    pub max_backoff: Option<Duration>,

    /// Number of consecutive failures after which the daemon is
    /// considered offline
    /// Default: 5
    pub failure_threshold: u32,

    /// Poll interval while a track is playing
    /// Default: 500 milliseconds
    pub playing_interval: Duration,

    /// Poll interval while playback is paused
    /// Default: 750 milliseconds
    pub paused_interval: Duration,

    /// Poll interval while playback is stopped
    /// Default: 1500 milliseconds
    pub stopped_interval: Duration,

    /// Delay before the first poll after the monitor starts
    /// Default: 2 seconds
    pub startup_delay: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            base_backoff: Duration::from_millis(500),
            max_backoff: None,
            failure_threshold: 5,
            playing_interval: Duration::from_millis(500),
            paused_interval: Duration::from_millis(750),
            stopped_interval: Duration::from_millis(1500),
            startup_delay: Duration::from_secs(2),
        }
    }
}

impl MonitorConfig {
    /// Create a new MonitorConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MonitorConfig tuned for low-latency UI updates
    pub fn responsive() -> Self {
        Self {
            playing_interval: Duration::from_millis(250),
            paused_interval: Duration::from_millis(500),
            stopped_interval: Duration::from_millis(1000),
            startup_delay: Duration::from_millis(500),
            ..Default::default()
        }
    }

    /// Create a MonitorConfig tuned for minimal daemon traffic
    pub fn low_traffic() -> Self {
        Self {
            playing_interval: Duration::from_secs(1),
            paused_interval: Duration::from_secs(2),
            stopped_interval: Duration::from_secs(5),
            max_backoff: Some(Duration::from_secs(60)),
            startup_delay: Duration::from_secs(5),
            ..Default::default()
        }
    }

    /// Poll interval to use after observing the given player state
    pub fn interval_for(&self, state: PlayerState) -> Duration {
        match state {
            PlayerState::Playing => self.playing_interval,
            PlayerState::Paused => self.paused_interval,
            PlayerState::Stopped => self.stopped_interval,
        }
    }

    /// Validate the configuration and return any issues
    pub fn validate(&self) -> Result<(), StateError> {
        if self.base_backoff == Duration::ZERO {
            return Err(StateError::Config(
                "Base backoff must be greater than 0".to_string(),
            ));
        }

        if let Some(cap) = self.max_backoff {
            if cap < self.base_backoff {
                return Err(StateError::Config(
                    "Max backoff must not be less than base backoff".to_string(),
                ));
            }
        }

        if self.failure_threshold == 0 {
            return Err(StateError::Config(
                "Failure threshold must be greater than 0".to_string(),
            ));
        }

        if self.playing_interval == Duration::ZERO
            || self.paused_interval == Duration::ZERO
            || self.stopped_interval == Duration::ZERO
        {
            return Err(StateError::Config(
                "Poll intervals must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Builder pattern methods for fluent configuration

    pub fn with_backoff(mut self, base: Duration) -> Self {
        self.base_backoff = base;
        self
    }

    pub fn with_max_backoff(mut self, cap: Duration) -> Self {
        self.max_backoff = Some(cap);
        self
    }

    pub fn with_failure_threshold(mut self, threshold: u32) -> Self {
        self.failure_threshold = threshold;
        self
    }

    pub fn with_intervals(mut self, playing: Duration, paused: Duration, stopped: Duration) -> Self {
        self.playing_interval = playing;
        self.paused_interval = paused;
        self.stopped_interval = stopped;
        self
    }

    pub fn with_startup_delay(mut self, delay: Duration) -> Self {
        self.startup_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config() {
        let config = MonitorConfig::default();
        assert_eq!(config.base_backoff, Duration::from_millis(500));
        assert_eq!(config.max_backoff, None);
        assert_eq!(config.failure_threshold, 5);
        assert_eq!(config.startup_delay, Duration::from_secs(2));
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case::playing(PlayerState::Playing, 500)]
    #[case::paused(PlayerState::Paused, 750)]
    #[case::stopped(PlayerState::Stopped, 1500)]
    fn test_interval_follows_player_state(#[case] state: PlayerState, #[case] expected_ms: u64) {
        let config = MonitorConfig::default();
        assert_eq!(config.interval_for(state), Duration::from_millis(expected_ms));
    }

    #[test]
    fn test_config_validation() {
        let zero_backoff = MonitorConfig {
            base_backoff: Duration::ZERO,
            ..Default::default()
        };
        assert!(zero_backoff.validate().is_err());

        let cap_below_base = MonitorConfig {
            base_backoff: Duration::from_millis(500),
            max_backoff: Some(Duration::from_millis(100)),
            ..Default::default()
        };
        assert!(cap_below_base.validate().is_err());

        let zero_threshold = MonitorConfig {
            failure_threshold: 0,
            ..Default::default()
        };
        assert!(zero_threshold.validate().is_err());

        let zero_interval = MonitorConfig {
            paused_interval: Duration::ZERO,
            ..Default::default()
        };
        assert!(zero_interval.validate().is_err());
    }

    #[test]
    fn test_config_presets() {
        let responsive = MonitorConfig::responsive();
        assert_eq!(responsive.playing_interval, Duration::from_millis(250));
        assert!(responsive.validate().is_ok());

        let low_traffic = MonitorConfig::low_traffic();
        assert_eq!(low_traffic.max_backoff, Some(Duration::from_secs(60)));
        assert!(low_traffic.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MonitorConfig::new()
            .with_backoff(Duration::from_millis(250))
            .with_max_backoff(Duration::from_secs(30))
            .with_failure_threshold(3)
            .with_intervals(
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(400),
            )
            .with_startup_delay(Duration::from_millis(50));

        assert_eq!(config.base_backoff, Duration::from_millis(250));
        assert_eq!(config.max_backoff, Some(Duration::from_secs(30)));
        assert_eq!(config.failure_threshold, 3);
        assert_eq!(config.interval_for(PlayerState::Stopped), Duration::from_millis(400));
        assert_eq!(config.startup_delay, Duration::from_millis(50));
        assert!(config.validate().is_ok());
    }
}
