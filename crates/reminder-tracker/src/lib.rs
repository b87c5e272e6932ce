//! Reminder Tracker
//!
//! Client-side core of the photo reminder app:
//! - models: Reminder records and server payloads
//! - traits: Browser capabilities the tracker depends on
//! - tracker: The owned controller (reminder set, polling timer, dismissal)
//! - cards: Registry of injected reminder fragments and their dismiss controls

mod cards;
mod config;
mod error;
mod models;
mod traits;
mod tracker;

#[cfg(test)]
mod testing;

pub use cards::{CardKey, ReminderCard, ReminderCards};
pub use config::{StatusConfig, TrackerConfig, DEFAULT_INTERVAL_MINUTES};
pub use error::{TrackerError, TrackerResult};
pub use models::{
    BadgeState, Coordinates, DismissResponse, LocationReport, Permission,
    ProcessLocationResponse, Reminder, ReminderId, TrackingStatus,
};
pub use traits::{Geolocator, IntervalHandle, LocalTask, Notifier, ReminderApi, ReminderView, Scheduler};
pub use tracker::{ReminderTracker, Services};
