//! Location Form Component
//!
//! Preferences input, last known coordinates, and a manual check.

use leptos::prelude::*;

use crate::context::use_tracker;

#[component]
pub fn LocationForm() -> impl IntoView {
    let ctx = use_tracker();
    let preferences = ctx.page.preferences;
    let coordinates = ctx.page.coordinates;

    let latitude = move || {
        coordinates.get().map(|c| c.latitude.to_string()).unwrap_or_default()
    };
    let longitude = move || {
        coordinates.get().map(|c| c.longitude.to_string()).unwrap_or_default()
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.check_now();
    };

    view! {
        <form class="location-form" on:submit=on_submit>
            <label for="preferences">"Photo preferences"</label>
            <input
                id="preferences"
                type="text"
                placeholder="parks, street art, food..."
                prop:value=move || preferences.get()
                on:input=move |ev| preferences.set(event_target_value(&ev))
            />
            <div class="coordinates-row">
                <input id="latitude" type="text" readonly placeholder="Latitude" prop:value=latitude />
                <input id="longitude" type="text" readonly placeholder="Longitude" prop:value=longitude />
            </div>
            <button type="submit">"Check now"</button>
        </form>
    }
}
