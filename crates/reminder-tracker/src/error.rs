//! Tracker Errors
//!
//! Every failure a polling cycle or permission request can hit.
//! None of these reach the page; callers log them.

use thiserror::Error;

/// Common result type for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Geolocation is not available")]
    GeolocationUnavailable,

    #[error("Position lookup failed: {0}")]
    Position(String),

    #[error("Permission request failed: {0}")]
    Permission(String),

    #[error("Notification failed: {0}")]
    Notification(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Response decode failed: {0}")]
    Decode(String),

    #[error("Polling interval must be at least one minute")]
    InvalidInterval,

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
