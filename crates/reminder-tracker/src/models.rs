//! Tracker Models
//!
//! Data structures exchanged with the reminder server and rendered on the page.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Reminder identity as assigned by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderId(pub i64);

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reminder data structure (matches server payload)
///
/// Any other field the server echoes (location, preferences) is kept untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Reminder {
    pub fn new(id: i64, message: impl Into<String>) -> Self {
        Self {
            id: ReminderId(id),
            message: message.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Form body posted to the process-location endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationReport {
    pub latitude: f64,
    pub longitude: f64,
    pub preferences: String,
}

impl LocationReport {
    pub fn new(coords: Coordinates, preferences: impl Into<String>) -> Self {
        Self {
            latitude: coords.latitude,
            longitude: coords.longitude,
            preferences: preferences.into(),
        }
    }

    /// Form fields in submission order
    pub fn form_fields(&self) -> [(&'static str, String); 3] {
        [
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
            ("preferences", self.preferences.clone()),
        ]
    }
}

/// Response of `/process-location` and `/test-reminder`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessLocationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub reminder: Option<Reminder>,
    #[serde(default)]
    pub html: Option<String>,
    /// Why no reminder was produced (only sent with `success: false`)
    #[serde(default)]
    pub message: Option<String>,
}

impl ProcessLocationResponse {
    /// The reminder to surface, if the server produced one
    pub fn accepted(self) -> Option<(Reminder, Option<String>)> {
        match (self.success, self.reminder) {
            (true, Some(reminder)) => Some((reminder, self.html)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DismissResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Notification permission as reported by the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
    Default,
}

impl Permission {
    pub fn from_browser(value: &str) -> Self {
        match value {
            "granted" => Permission::Granted,
            "denied" => Permission::Denied,
            _ => Permission::Default,
        }
    }

    pub fn is_granted(self) -> bool {
        self == Permission::Granted
    }
}

/// Rendered state of the notification badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeState {
    pub text: String,
    pub visible: bool,
}

impl BadgeState {
    pub fn for_count(count: usize) -> Self {
        Self {
            text: count.to_string(),
            visible: count > 0,
        }
    }
}

impl Default for BadgeState {
    fn default() -> Self {
        Self::for_count(0)
    }
}

/// Text and color class of the tracking status indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingStatus {
    pub text: String,
    pub class: String,
}
