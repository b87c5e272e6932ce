//! Application Context
//!
//! Tracker handle and page signals provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reminder_tracker::{CardKey, ReminderTracker};

use crate::view::PageSignals;

/// App-wide tracker access provided via context
#[derive(Clone, Copy)]
pub struct TrackerContext {
    /// The tracker is `Rc`-based, so it lives in local storage
    tracker: StoredValue<ReminderTracker, LocalStorage>,
    pub page: PageSignals,
}

impl TrackerContext {
    pub fn new(tracker: ReminderTracker, page: PageSignals) -> Self {
        Self {
            tracker: StoredValue::new_local(tracker),
            page,
        }
    }

    pub fn tracker(&self) -> ReminderTracker {
        self.tracker.get_value()
    }

    /// Toggle button handler
    pub fn enable_background_tracking(&self) {
        let tracker = self.tracker();
        spawn_local(async move {
            tracker.enable_background_tracking().await;
        });
    }

    /// Run one polling cycle now
    pub fn check_now(&self) {
        let tracker = self.tracker();
        spawn_local(async move {
            tracker.check_location().await;
        });
    }

    pub fn request_test_reminder(&self) {
        let tracker = self.tracker();
        spawn_local(async move {
            tracker.request_test_reminder().await;
        });
    }

    /// A dismiss control inside card `key` was clicked
    pub fn dismiss_card(&self, key: CardKey) {
        let reminder_id = self.page.cards.with_untracked(|cards| cards.reminder_for(key));
        match reminder_id {
            Some(id) => {
                self.tracker().dismiss(id);
            }
            None => log::debug!("Dismiss control {:?} is not bound to a reminder", key),
        }
    }

    pub fn shutdown(&self) {
        self.tracker.with_value(|tracker| tracker.shutdown());
    }
}

/// Get the tracker context
pub fn use_tracker() -> TrackerContext {
    expect_context::<TrackerContext>()
}
