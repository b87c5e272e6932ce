//! Timers
//!
//! `setInterval` via gloo-timers; tasks go to the Leptos local executor.

use gloo_timers::callback::Interval;
use leptos::task::spawn_local;
use reminder_tracker::{IntervalHandle, LocalTask, Scheduler};
use std::time::Duration;

/// Browsers clamp longer delays to 1ms
const MAX_DELAY_MS: u32 = i32::MAX as u32;

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn every(&self, period: Duration, mut tick: Box<dyn FnMut()>) -> Box<dyn IntervalHandle> {
        Box::new(BrowserInterval(Interval::new(interval_millis(period), move || tick())))
    }

    fn spawn(&self, task: LocalTask) {
        spawn_local(task);
    }
}

/// Timer delay in ms, capped at the largest delay browsers honor
pub(crate) fn interval_millis(period: Duration) -> u32 {
    u32::try_from(period.as_millis()).unwrap_or(MAX_DELAY_MS).min(MAX_DELAY_MS)
}

struct BrowserInterval(Interval);

impl IntervalHandle for BrowserInterval {
    fn cancel(self: Box<Self>) {
        self.0.cancel();
    }
}
