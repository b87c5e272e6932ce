#![allow(warnings)]
//! Photo Reminder Frontend Entry Point

mod app;
mod browser;
mod commands;
mod components;
mod config;
mod context;
mod logger;
mod view;

use app::App;
use leptos::prelude::*;
use reminder_tracker::TrackerConfig;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load_config();
    let level = loaded
        .as_ref()
        .map(|config| config.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    logger::init_logger(&level);

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Ignoring reminder config: {}", e);
        TrackerConfig::default()
    });

    mount_to_body(move || view! { <App config=config /> });
}
