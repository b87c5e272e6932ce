//! Browser Capabilities
//!
//! web-sys implementations of the tracker's collaborator traits.

mod geolocation;
mod notification;
mod scheduler;

pub use geolocation::BrowserGeolocator;
pub use notification::BrowserNotifier;
pub use scheduler::BrowserScheduler;

use wasm_bindgen::JsValue;

/// Best-effort readable text for a thrown JS value
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
