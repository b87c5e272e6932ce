//! Page Signals
//!
//! Reactive state behind the page elements. The tracker writes here through
//! `ReminderView`; components read it.

use leptos::prelude::*;
use reminder_tracker::{
    BadgeState, Coordinates, ReminderCards, ReminderId, ReminderView, TrackerConfig, TrackingStatus,
};

#[derive(Clone, Copy)]
pub struct PageSignals {
    pub badge: RwSignal<BadgeState>,
    /// Bound to the preferences input
    pub preferences: RwSignal<String>,
    pub coordinates: RwSignal<Option<Coordinates>>,
    /// Fragments in the reminders container, keyed by dismiss control
    pub cards: RwSignal<ReminderCards>,
    pub status: RwSignal<TrackingStatus>,
}

impl PageSignals {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            badge: RwSignal::new(BadgeState::default()),
            preferences: RwSignal::new(String::new()),
            coordinates: RwSignal::new(None),
            cards: RwSignal::new(ReminderCards::new()),
            status: RwSignal::new(config.status.initial()),
        }
    }
}

impl ReminderView for PageSignals {
    fn render_badge(&self, badge: BadgeState) {
        self.badge.set(badge);
    }

    fn preferences(&self) -> String {
        self.preferences.get_untracked()
    }

    fn show_coordinates(&self, coords: Coordinates) {
        self.coordinates.set(Some(coords));
    }

    fn append_reminder_html(&self, id: ReminderId, html: &str) {
        self.cards.update(|cards| {
            cards.push(id, html);
        });
    }

    fn remove_reminder_html(&self, id: ReminderId) {
        self.cards.update(|cards| {
            cards.remove_reminder(id);
        });
    }

    fn show_tracking_status(&self, status: TrackingStatus) {
        self.status.set(status);
    }
}
