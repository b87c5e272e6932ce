//! Notification Badge Component
//!
//! Count of active reminders, hidden when there are none.

use leptos::prelude::*;

use crate::context::use_tracker;

#[component]
pub fn NotificationBadge() -> impl IntoView {
    let badge = use_tracker().page.badge;

    view! {
        <span
            id="notification-count"
            class="notification-badge"
            style:display=move || if badge.get().visible { "block" } else { "none" }
        >
            {move || badge.get().text}
        </span>
    }
}
