//! Notifications
//!
//! Permission requests and display through the `Notification` API.

use async_trait::async_trait;
use reminder_tracker::{Notifier, Permission, TrackerError, TrackerResult};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Notification, NotificationOptions, NotificationPermission};

use super::js_error_message;

pub struct BrowserNotifier;

#[async_trait(?Send)]
impl Notifier for BrowserNotifier {
    fn is_supported(&self) -> bool {
        web_sys::window()
            .map(|win| js_sys::Reflect::has(&win, &JsValue::from_str("Notification")).unwrap_or(false))
            .unwrap_or(false)
    }

    async fn request_permission(&self) -> TrackerResult<Permission> {
        let promise = Notification::request_permission()
            .map_err(|e| TrackerError::Permission(js_error_message(&e)))?;
        let value = JsFuture::from(promise)
            .await
            .map_err(|e| TrackerError::Permission(js_error_message(&e)))?;

        Ok(Permission::from_browser(&value.as_string().unwrap_or_default()))
    }

    fn notify(&self, title: &str, body: &str) -> TrackerResult<()> {
        if !self.is_supported() {
            return Err(TrackerError::Notification("notifications not supported".to_string()));
        }
        if Notification::permission() != NotificationPermission::Granted {
            return Err(TrackerError::Notification("permission not granted".to_string()));
        }

        let options = NotificationOptions::new();
        options.set_body(body);
        Notification::new_with_options(title, &options)
            .map(|_| ())
            .map_err(|e| TrackerError::Notification(js_error_message(&e)))
    }
}
