//! In-memory collaborators for tracker tests.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::config::TrackerConfig;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    BadgeState, Coordinates, DismissResponse, LocationReport, Permission, ProcessLocationResponse,
    Reminder, ReminderId, TrackingStatus,
};
use crate::traits::{Geolocator, IntervalHandle, LocalTask, Notifier, ReminderApi, ReminderView, Scheduler};
use crate::tracker::{ReminderTracker, Services};

pub struct FakeGeolocator {
    pub available: Cell<bool>,
    pub position: Cell<Option<Coordinates>>,
    pub lookups: Cell<usize>,
}

impl FakeGeolocator {
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            available: Cell::new(true),
            position: Cell::new(Some(Coordinates::new(latitude, longitude))),
            lookups: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl Geolocator for FakeGeolocator {
    fn is_available(&self) -> bool {
        self.available.get()
    }

    async fn current_position(&self) -> TrackerResult<Coordinates> {
        self.lookups.set(self.lookups.get() + 1);
        self.position
            .get()
            .ok_or_else(|| TrackerError::Position("User denied Geolocation".to_string()))
    }
}

pub struct FakeNotifier {
    pub supported: Cell<bool>,
    pub permission: Cell<Permission>,
    pub fail_notify: Cell<bool>,
    pub permission_requests: Cell<usize>,
    pub shown: RefCell<Vec<(String, String)>>,
}

impl Default for FakeNotifier {
    fn default() -> Self {
        Self {
            supported: Cell::new(true),
            permission: Cell::new(Permission::Granted),
            fail_notify: Cell::new(false),
            permission_requests: Cell::new(0),
            shown: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl Notifier for FakeNotifier {
    fn is_supported(&self) -> bool {
        self.supported.get()
    }

    async fn request_permission(&self) -> TrackerResult<Permission> {
        self.permission_requests.set(self.permission_requests.get() + 1);
        Ok(self.permission.get())
    }

    fn notify(&self, title: &str, body: &str) -> TrackerResult<()> {
        if self.fail_notify.get() {
            return Err(TrackerError::Notification("permission revoked".to_string()));
        }
        self.shown.borrow_mut().push((title.to_string(), body.to_string()));
        Ok(())
    }
}

/// Replies are consumed in order; an empty queue answers `{success: false}`
#[derive(Default)]
pub struct FakeApi {
    pub replies: RefCell<VecDeque<TrackerResult<ProcessLocationResponse>>>,
    pub reports: RefCell<Vec<LocationReport>>,
    pub test_requests: Cell<usize>,
    pub dismissed: RefCell<Vec<ReminderId>>,
}

impl FakeApi {
    pub fn reply(&self, reply: TrackerResult<ProcessLocationResponse>) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn reply_with_reminder(&self, id: i64, message: &str, html: &str) {
        self.reply(Ok(ProcessLocationResponse {
            success: true,
            reminder: Some(Reminder::new(id, message)),
            html: Some(html.to_string()),
            message: None,
        }));
    }

    fn next_reply(&self) -> TrackerResult<ProcessLocationResponse> {
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ProcessLocationResponse::default()))
    }
}

#[async_trait(?Send)]
impl ReminderApi for FakeApi {
    async fn process_location(&self, report: &LocationReport) -> TrackerResult<ProcessLocationResponse> {
        self.reports.borrow_mut().push(report.clone());
        self.next_reply()
    }

    async fn test_reminder(&self) -> TrackerResult<ProcessLocationResponse> {
        self.test_requests.set(self.test_requests.get() + 1);
        self.next_reply()
    }

    async fn dismiss_reminder(&self, id: ReminderId) -> TrackerResult<DismissResponse> {
        self.dismissed.borrow_mut().push(id);
        Ok(DismissResponse { success: true, message: None })
    }
}

#[derive(Default)]
pub struct RecordingView {
    pub badge: RefCell<Option<BadgeState>>,
    pub preferences: RefCell<String>,
    pub coordinates: Cell<Option<Coordinates>>,
    pub container: RefCell<Vec<(ReminderId, String)>>,
    pub status: RefCell<Option<TrackingStatus>>,
}

impl RecordingView {
    pub fn badge(&self) -> BadgeState {
        self.badge.borrow().clone().expect("badge was never rendered")
    }

    pub fn container_html(&self) -> Vec<String> {
        self.container.borrow().iter().map(|(_, html)| html.clone()).collect()
    }
}

impl ReminderView for RecordingView {
    fn render_badge(&self, badge: BadgeState) {
        *self.badge.borrow_mut() = Some(badge);
    }

    fn preferences(&self) -> String {
        self.preferences.borrow().clone()
    }

    fn show_coordinates(&self, coords: Coordinates) {
        self.coordinates.set(Some(coords));
    }

    fn append_reminder_html(&self, id: ReminderId, html: &str) {
        self.container.borrow_mut().push((id, html.to_string()));
    }

    fn remove_reminder_html(&self, id: ReminderId) {
        self.container.borrow_mut().retain(|(card_id, _)| *card_id != id);
    }

    fn show_tracking_status(&self, status: TrackingStatus) {
        *self.status.borrow_mut() = Some(status);
    }
}

struct FakeTimer {
    period: Duration,
    tick: Box<dyn FnMut()>,
    cancelled: Rc<Cell<bool>>,
}

struct FakeIntervalHandle {
    cancelled: Rc<Cell<bool>>,
}

impl IntervalHandle for FakeIntervalHandle {
    fn cancel(self: Box<Self>) {
        self.cancelled.set(true);
    }
}

/// Timers fire only when the test says so; spawned tasks queue until drained
#[derive(Default)]
pub struct FakeScheduler {
    timers: RefCell<Vec<FakeTimer>>,
    tasks: RefCell<VecDeque<LocalTask>>,
}

impl FakeScheduler {
    pub fn active_periods(&self) -> Vec<Duration> {
        self.timers
            .borrow()
            .iter()
            .filter(|timer| !timer.cancelled.get())
            .map(|timer| timer.period)
            .collect()
    }

    /// Fire every uncancelled timer once
    pub fn fire(&self) {
        let mut timers = std::mem::take(&mut *self.timers.borrow_mut());
        for timer in timers.iter_mut().filter(|timer| !timer.cancelled.get()) {
            (timer.tick)();
        }
        let mut current = self.timers.borrow_mut();
        timers.append(&mut current);
        *current = timers;
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Run queued tasks, including ones they spawn, to completion
    pub async fn run_tasks(&self) {
        loop {
            let next = self.tasks.borrow_mut().pop_front();
            match next {
                Some(task) => task.await,
                None => break,
            }
        }
    }
}

impl Scheduler for FakeScheduler {
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Box<dyn IntervalHandle> {
        let cancelled = Rc::new(Cell::new(false));
        self.timers.borrow_mut().push(FakeTimer {
            period,
            tick,
            cancelled: Rc::clone(&cancelled),
        });
        Box::new(FakeIntervalHandle { cancelled })
    }

    fn spawn(&self, task: LocalTask) {
        self.tasks.borrow_mut().push_back(task);
    }
}

/// A tracker wired to fakes, with handles kept for assertions
pub struct Harness {
    pub tracker: ReminderTracker,
    pub geolocator: Rc<FakeGeolocator>,
    pub notifier: Rc<FakeNotifier>,
    pub api: Rc<FakeApi>,
    pub view: Rc<RecordingView>,
    pub scheduler: Rc<FakeScheduler>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(TrackerConfig::default())
    }

    pub fn with_config(config: TrackerConfig) -> Self {
        let geolocator = Rc::new(FakeGeolocator::at(40.7812, -73.9665));
        let notifier = Rc::new(FakeNotifier::default());
        let api = Rc::new(FakeApi::default());
        let view = Rc::new(RecordingView::default());
        let scheduler = Rc::new(FakeScheduler::default());

        let tracker = ReminderTracker::new(
            config,
            Services {
                geolocator: geolocator.clone(),
                notifier: notifier.clone(),
                api: api.clone(),
                view: view.clone(),
                scheduler: scheduler.clone(),
            },
        );

        Self {
            tracker,
            geolocator,
            notifier,
            api,
            view,
            scheduler,
        }
    }

    /// Fire the timers and let the spawned cycles finish
    pub async fn tick(&self) {
        self.scheduler.fire();
        self.scheduler.run_tasks().await;
    }
}
