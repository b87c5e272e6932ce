//! Photo Reminder App
//!
//! Builds the tracker over the browser capabilities and lays out the page.

use std::rc::Rc;

use leptos::prelude::*;
use reminder_tracker::{ReminderTracker, Services, TrackerConfig};

use crate::browser::{BrowserGeolocator, BrowserNotifier, BrowserScheduler};
use crate::commands::HttpReminderApi;
use crate::components::{LocationForm, NotificationBadge, ReminderList, TrackingToggle};
use crate::context::TrackerContext;
use crate::view::PageSignals;

#[component]
pub fn App(config: TrackerConfig) -> impl IntoView {
    let page = PageSignals::new(&config);
    let show_test_button = config.show_test_button;

    let api = HttpReminderApi::new(&config);
    let tracker = ReminderTracker::new(
        config,
        Services {
            geolocator: Rc::new(BrowserGeolocator),
            notifier: Rc::new(BrowserNotifier),
            api: Rc::new(api),
            view: Rc::new(page),
            scheduler: Rc::new(BrowserScheduler),
        },
    );
    tracker.initialize();

    // Provide context to all children
    let ctx = TrackerContext::new(tracker, page);
    provide_context(ctx);

    // Stop polling when the app is torn down
    on_cleanup(move || ctx.shutdown());

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Photo Reminders"</h1>
                <NotificationBadge />
            </header>

            <TrackingToggle />

            <main class="main-content">
                <LocationForm />
                <ReminderList show_test_button=show_test_button />
            </main>
        </div>
    }
}
