//! Error types for playwatch-state

use std::fmt;

/// Result type for playwatch-state operations
pub type Result<T> = std::result::Result<T, StateError>;

/// Errors that can occur during state monitoring
#[derive(Debug)]
pub enum StateError {
    /// Monitor configuration is invalid
    Config(String),

    /// Monitor task did not shut down cleanly
    ShutdownFailed,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::Config(msg) => write!(f, "Configuration error: {}", msg),
            StateError::ShutdownFailed => write!(f, "Monitor shutdown failed"),
        }
    }
}

impl std::error::Error for StateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = StateError::Config("base backoff must be greater than 0".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: base backoff must be greater than 0"
        );
    }

    #[test]
    fn test_shutdown_error_display() {
        assert_eq!(StateError::ShutdownFailed.to_string(), "Monitor shutdown failed");
    }
}
