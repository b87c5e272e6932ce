//! Geolocation
//!
//! Single-shot `getCurrentPosition` bridged into a future.

use async_trait::async_trait;
use reminder_tracker::{Coordinates, Geolocator, TrackerError, TrackerResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Geolocation, GeolocationPosition};

use super::js_error_message;

pub struct BrowserGeolocator;

impl BrowserGeolocator {
    fn geolocation() -> Option<Geolocation> {
        let navigator = web_sys::window()?.navigator();
        let present = js_sys::Reflect::has(&navigator, &JsValue::from_str("geolocation")).unwrap_or(false);
        if !present {
            return None;
        }
        navigator.geolocation().ok()
    }
}

#[async_trait(?Send)]
impl Geolocator for BrowserGeolocator {
    fn is_available(&self) -> bool {
        Self::geolocation().is_some()
    }

    async fn current_position(&self) -> TrackerResult<Coordinates> {
        let geolocation = Self::geolocation().ok_or(TrackerError::GeolocationUnavailable)?;

        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            if let Err(err) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
                let _ = reject.call1(&JsValue::NULL, &err);
            }
        });

        let value = JsFuture::from(promise)
            .await
            .map_err(|e| TrackerError::Position(js_error_message(&e)))?;
        let position: GeolocationPosition = value
            .dyn_into()
            .map_err(|_| TrackerError::Position("unexpected position value".to_string()))?;

        let coords = position.coords();
        Ok(Coordinates::new(coords.latitude(), coords.longitude()))
    }
}
