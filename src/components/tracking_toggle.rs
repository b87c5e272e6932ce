//! Tracking Toggle Component
//!
//! Status indicator plus the button that asks for notification permission.

use leptos::prelude::*;

use crate::context::use_tracker;

#[component]
pub fn TrackingToggle() -> impl IntoView {
    let ctx = use_tracker();
    let status = ctx.page.status;

    view! {
        <div class="tracking-row">
            <span
                id="tracking-status"
                class=move || format!("tracking-status {}", status.get().class)
            >
                {move || status.get().text}
            </span>
            <button
                id="toggle-tracking"
                class="tracking-btn"
                on:click=move |_| ctx.enable_background_tracking()
            >
                "Enable background tracking"
            </button>
        </div>
    }
}
