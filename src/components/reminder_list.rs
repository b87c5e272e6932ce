//! Reminder List Component
//!
//! The reminders container. Each card holds a server-rendered fragment; any
//! `[data-dismiss-reminder]` control inside it dismisses the card's reminder.

use leptos::prelude::*;
use reminder_tracker::ReminderCard;
use wasm_bindgen::JsCast;

use crate::context::use_tracker;

const DISMISS_SELECTOR: &str = "[data-dismiss-reminder]";

#[component]
pub fn ReminderList(show_test_button: bool) -> impl IntoView {
    let ctx = use_tracker();
    let cards = ctx.page.cards;

    view! {
        <section class="reminders">
            <Show when=move || show_test_button>
                <button class="test-reminder-btn" on:click=move |_| ctx.request_test_reminder()>
                    "Send test reminder"
                </button>
            </Show>
            <div id="reminders-container">
                <Show when=move || cards.with(|c| c.is_empty())>
                    <p class="empty-reminders">"No reminders yet."</p>
                </Show>
                <For
                    each={move || cards.get().iter().cloned().collect::<Vec<_>>()}
                    key=|card| card.key
                    children={move |card| view! { <ReminderCardView card=card /> }}
                />
            </div>
        </section>
    }
}

#[component]
fn ReminderCardView(card: ReminderCard) -> impl IntoView {
    let ctx = use_tracker();
    let key = card.key;

    let on_click = move |ev: web_sys::MouseEvent| {
        if hits_dismiss_control(&ev) {
            ev.stop_propagation();
            ctx.dismiss_card(key);
        }
    };

    view! {
        <div class="reminder-card" on:click=on_click>
            <div class="reminder-body" inner_html=card.html />
            <button class="dismiss-btn" title="Dismiss" data-dismiss-reminder="">
                "×"
            </button>
        </div>
    }
}

/// Whether the click landed on a dismiss control inside this card
fn hits_dismiss_control(ev: &web_sys::MouseEvent) -> bool {
    let Some(card) = ev
        .current_target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
    else {
        return false;
    };

    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(DISMISS_SELECTOR).ok().flatten())
        .map(|control| {
            let node: &web_sys::Node = control.as_ref();
            card.contains(Some(node))
        })
        .unwrap_or(false)
}
