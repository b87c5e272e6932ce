//! Tracker Configuration
//!
//! Every field has a default, so a partial JSON document overrides only what it names.

use serde::{Deserialize, Serialize};

use crate::error::TrackerResult;
use crate::models::TrackingStatus;

/// Polling interval used when none is given
pub const DEFAULT_INTERVAL_MINUTES: u32 = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub process_location_path: String,
    pub test_reminder_path: String,
    pub dismiss_path_prefix: String,
    /// Interval started by background tracking
    pub tracking_interval_minutes: u32,
    /// Skip a firing while the previous cycle is still running
    pub skip_when_in_flight: bool,
    /// Tell the server about dismissals
    pub sync_dismissals: bool,
    pub show_test_button: bool,
    pub notification_title: String,
    pub log_level: String,
    pub status: StatusConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            process_location_path: "/process-location".to_string(),
            test_reminder_path: "/test-reminder".to_string(),
            dismiss_path_prefix: "/dismiss-reminder".to_string(),
            tracking_interval_minutes: DEFAULT_INTERVAL_MINUTES,
            skip_when_in_flight: false,
            sync_dismissals: false,
            show_test_button: false,
            notification_title: "Photo Reminder".to_string(),
            log_level: "info".to_string(),
            status: StatusConfig::default(),
        }
    }
}

impl TrackerConfig {
    pub fn from_json(json: &str) -> TrackerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn dismiss_path(&self, id: crate::models::ReminderId) -> String {
        format!("{}/{}", self.dismiss_path_prefix.trim_end_matches('/'), id)
    }
}

/// Status indicator texts and color classes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    pub initial_text: String,
    pub enabled_text: String,
    pub pending_class: String,
    pub enabled_class: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            initial_text: "Background tracking disabled".to_string(),
            enabled_text: "Background tracking enabled".to_string(),
            pending_class: "bg-yellow-500".to_string(),
            enabled_class: "bg-green-500".to_string(),
        }
    }
}

impl StatusConfig {
    pub fn initial(&self) -> TrackingStatus {
        TrackingStatus {
            text: self.initial_text.clone(),
            class: self.pending_class.clone(),
        }
    }

    pub fn enabled(&self) -> TrackingStatus {
        TrackingStatus {
            text: self.enabled_text.clone(),
            class: self.enabled_class.clone(),
        }
    }
}
