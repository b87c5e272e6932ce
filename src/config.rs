//! Page Configuration
//!
//! Reads `TrackerConfig` from an inline JSON script element, if the page has one.

use reminder_tracker::{TrackerConfig, TrackerResult};

/// Id of `<script type="application/json">` holding config overrides
pub const CONFIG_ELEMENT_ID: &str = "reminder-config";

/// Defaults when the element is absent or empty
pub fn load_config() -> TrackerResult<TrackerConfig> {
    let text = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Ok(TrackerConfig::default());
    }
    TrackerConfig::from_json(&text)
}
