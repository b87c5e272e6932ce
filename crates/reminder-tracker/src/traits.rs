//! Tracker Collaborators
//!
//! Browser capabilities the tracker drives, as traits.
//! The front end implements them with web-sys; tests use in-memory fakes.

use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::error::TrackerResult;
use crate::models::{
    BadgeState, Coordinates, DismissResponse, LocationReport, Permission, ProcessLocationResponse,
    ReminderId, TrackingStatus,
};

/// A future spawned on the page's event loop
pub type LocalTask = Pin<Box<dyn Future<Output = ()> + 'static>>;

/// Single-shot device position lookup
#[async_trait(?Send)]
pub trait Geolocator {
    /// Checked on every polling cycle
    fn is_available(&self) -> bool;

    async fn current_position(&self) -> TrackerResult<Coordinates>;
}

/// Browser notifications
#[async_trait(?Send)]
pub trait Notifier {
    fn is_supported(&self) -> bool;

    async fn request_permission(&self) -> TrackerResult<Permission>;

    fn notify(&self, title: &str, body: &str) -> TrackerResult<()>;
}

/// Reminder server endpoints
#[async_trait(?Send)]
pub trait ReminderApi {
    async fn process_location(&self, report: &LocationReport) -> TrackerResult<ProcessLocationResponse>;

    async fn test_reminder(&self) -> TrackerResult<ProcessLocationResponse>;

    async fn dismiss_reminder(&self, id: ReminderId) -> TrackerResult<DismissResponse>;
}

/// The page elements the tracker reads and writes
pub trait ReminderView {
    fn render_badge(&self, badge: BadgeState);

    /// Current value of the preferences input
    fn preferences(&self) -> String;

    fn show_coordinates(&self, coords: Coordinates);

    /// Append a server-rendered fragment to the reminders container
    fn append_reminder_html(&self, id: ReminderId, html: &str);

    fn remove_reminder_html(&self, id: ReminderId);

    fn show_tracking_status(&self, status: TrackingStatus);
}

/// Timers and task spawning
pub trait Scheduler {
    /// Call `tick` every `period` until the returned handle is cancelled
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Box<dyn IntervalHandle>;

    fn spawn(&self, task: LocalTask);
}

pub trait IntervalHandle {
    fn cancel(self: Box<Self>);
}
