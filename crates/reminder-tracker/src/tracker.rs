//! Reminder Tracker
//!
//! Owns the active reminder set and the polling timer. All mutation happens on
//! the page's single event-loop thread, so interior state is `RefCell`/`Cell`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::config::TrackerConfig;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{BadgeState, LocationReport, ProcessLocationResponse, Reminder, ReminderId};
use crate::traits::{Geolocator, IntervalHandle, Notifier, ReminderApi, ReminderView, Scheduler};

/// Collaborators the tracker drives
pub struct Services {
    pub geolocator: Rc<dyn Geolocator>,
    pub notifier: Rc<dyn Notifier>,
    pub api: Rc<dyn ReminderApi>,
    pub view: Rc<dyn ReminderView>,
    pub scheduler: Rc<dyn Scheduler>,
}

/// Cheap-to-clone handle to the page's reminder state
#[derive(Clone)]
pub struct ReminderTracker {
    inner: Rc<TrackerInner>,
}

struct TrackerInner {
    config: TrackerConfig,
    services: Services,
    reminders: RefCell<Vec<Reminder>>,
    interval: RefCell<Option<Box<dyn IntervalHandle>>>,
    in_flight: Cell<usize>,
}

/// Counts a running polling cycle until dropped
struct CycleGuard(ReminderTracker);

impl CycleGuard {
    fn enter(tracker: ReminderTracker) -> Self {
        let in_flight = &tracker.inner.in_flight;
        in_flight.set(in_flight.get() + 1);
        Self(tracker)
    }
}

impl Drop for CycleGuard {
    fn drop(&mut self) {
        let in_flight = &self.0.inner.in_flight;
        in_flight.set(in_flight.get().saturating_sub(1));
    }
}

impl ReminderTracker {
    pub fn new(config: TrackerConfig, services: Services) -> Self {
        Self {
            inner: Rc::new(TrackerInner {
                config,
                services,
                reminders: RefCell::new(Vec::new()),
                interval: RefCell::new(None),
                in_flight: Cell::new(0),
            }),
        }
    }

    /// Snapshot of the active reminder set
    pub fn reminders(&self) -> Vec<Reminder> {
        self.inner.reminders.borrow().clone()
    }

    pub fn reminder_count(&self) -> usize {
        self.inner.reminders.borrow().len()
    }

    /// Number of polling cycles currently running
    pub fn cycles_in_flight(&self) -> usize {
        self.inner.in_flight.get()
    }

    /// Page-ready hook: render whatever state exists
    pub fn initialize(&self) {
        self.update_notification_count();
    }

    /// Render the badge from the current reminder count
    pub fn update_notification_count(&self) {
        let count = self.reminder_count();
        self.inner.services.view.render_badge(BadgeState::for_count(count));
    }

    // ========================
    // Location Polling
    // ========================

    /// Replace any running timer with one firing every `interval_minutes`
    pub fn start_location_checking(&self, interval_minutes: u32) -> TrackerResult<()> {
        if interval_minutes == 0 {
            return Err(TrackerError::InvalidInterval);
        }

        self.stop_location_checking();

        let period = Duration::from_secs(u64::from(interval_minutes) * 60);
        let weak = Rc::downgrade(&self.inner);
        let handle = self.inner.services.scheduler.every(
            period,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    ReminderTracker { inner }.on_tick();
                }
            }),
        );
        *self.inner.interval.borrow_mut() = Some(handle);

        log::info!("Location checking started (every {} minutes)", interval_minutes);
        Ok(())
    }

    pub fn stop_location_checking(&self) {
        let previous = self.inner.interval.borrow_mut().take();
        if let Some(handle) = previous {
            handle.cancel();
            log::debug!("Location checking stopped");
        }
    }

    pub fn is_checking(&self) -> bool {
        self.inner.interval.borrow().is_some()
    }

    fn on_tick(&self) {
        if self.inner.config.skip_when_in_flight && self.cycles_in_flight() > 0 {
            log::debug!("Previous location check still running, skipping this one");
            return;
        }

        let guard = CycleGuard::enter(self.clone());
        self.inner.services.scheduler.spawn(Box::pin(async move {
            guard.0.run_cycle().await;
        }));
    }

    /// Run one polling cycle now. Returns true when a reminder was added.
    pub async fn check_location(&self) -> bool {
        let guard = CycleGuard::enter(self.clone());
        guard.0.run_cycle().await
    }

    async fn run_cycle(&self) -> bool {
        let services = &self.inner.services;

        if !services.geolocator.is_available() {
            log::debug!("Geolocation not available, skipping location check");
            return false;
        }

        let coords = match services.geolocator.current_position().await {
            Ok(coords) => coords,
            Err(e) => {
                log::warn!("Could not read current position: {}", e);
                return false;
            }
        };

        let preferences = services.view.preferences();
        services.view.show_coordinates(coords);

        let report = LocationReport::new(coords, preferences);
        match services.api.process_location(&report).await {
            Ok(response) => self.apply_response(response),
            Err(e) => {
                log::error!("Error checking location: {}", e);
                false
            }
        }
    }

    /// Fetch the server's test reminder and treat it like a polled one
    pub async fn request_test_reminder(&self) -> bool {
        match self.inner.services.api.test_reminder().await {
            Ok(response) => self.apply_response(response),
            Err(e) => {
                log::error!("Error requesting test reminder: {}", e);
                false
            }
        }
    }

    fn apply_response(&self, response: ProcessLocationResponse) -> bool {
        let refusal = response.message.clone();
        let Some((reminder, html)) = response.accepted() else {
            if let Some(message) = refusal {
                log::debug!("No reminder for this location: {}", message);
            }
            return false;
        };

        let services = &self.inner.services;
        if let Some(html) = html.as_deref() {
            services.view.append_reminder_html(reminder.id, html);
        }

        if let Err(e) = services
            .notifier
            .notify(&self.inner.config.notification_title, &reminder.message)
        {
            log::warn!("Could not show notification for reminder {}: {}", reminder.id, e);
        }

        log::info!("Reminder {} received", reminder.id);
        self.inner.reminders.borrow_mut().push(reminder);
        self.update_notification_count();
        true
    }

    // ========================
    // Background Tracking
    // ========================

    /// Ask for notification permission and start polling if granted.
    /// Returns whether tracking is now enabled.
    pub async fn enable_background_tracking(&self) -> bool {
        let services = &self.inner.services;

        if !services.notifier.is_supported() {
            log::debug!("Notifications not supported, background tracking unavailable");
            return false;
        }

        let permission = match services.notifier.request_permission().await {
            Ok(permission) => permission,
            Err(e) => {
                log::warn!("Notification permission request failed: {}", e);
                return false;
            }
        };

        if !permission.is_granted() {
            log::debug!("Notification permission not granted ({:?})", permission);
            return false;
        }

        if let Err(e) = self.start_location_checking(self.inner.config.tracking_interval_minutes) {
            log::warn!("Could not start background tracking: {}", e);
            return false;
        }

        services.view.show_tracking_status(self.inner.config.status.enabled());
        true
    }

    // ========================
    // Dismissal
    // ========================

    /// Remove every reminder with `id`. Returns how many were removed.
    pub fn dismiss(&self, id: ReminderId) -> usize {
        let removed = {
            let mut reminders = self.inner.reminders.borrow_mut();
            let before = reminders.len();
            reminders.retain(|reminder| reminder.id != id);
            before - reminders.len()
        };

        self.inner.services.view.remove_reminder_html(id);
        self.update_notification_count();

        if removed > 0 && self.inner.config.sync_dismissals {
            self.sync_dismissal(id);
        }
        removed
    }

    fn sync_dismissal(&self, id: ReminderId) {
        let api = Rc::clone(&self.inner.services.api);
        self.inner.services.scheduler.spawn(Box::pin(async move {
            match api.dismiss_reminder(id).await {
                Ok(response) if response.success => {
                    log::debug!("Server dismissed reminder {}", id);
                }
                Ok(response) => {
                    log::warn!(
                        "Server did not dismiss reminder {}: {}",
                        id,
                        response.message.unwrap_or_default()
                    );
                }
                Err(e) => log::error!("Error dismissing reminder {}: {}", id, e),
            }
        }));
    }

    /// Page teardown
    pub fn shutdown(&self) {
        self.stop_location_checking();
    }
}
