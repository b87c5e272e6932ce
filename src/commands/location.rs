//! Location Commands
//!
//! Bindings for the process-location, test-reminder and dismiss endpoints.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use reminder_tracker::{
    DismissResponse, LocationReport, ProcessLocationResponse, ReminderApi, ReminderId, TrackerConfig,
    TrackerError, TrackerResult,
};
use serde::de::DeserializeOwned;
use web_sys::FormData;

use crate::browser::js_error_message;

/// Same-origin reminder server client
pub struct HttpReminderApi {
    config: TrackerConfig,
}

impl HttpReminderApi {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

#[async_trait(?Send)]
impl ReminderApi for HttpReminderApi {
    async fn process_location(&self, report: &LocationReport) -> TrackerResult<ProcessLocationResponse> {
        let form = location_form(report)?;
        let response = Request::post(&self.config.process_location_path)
            .body(form)
            .map_err(http_error)?
            .send()
            .await
            .map_err(http_error)?;
        decode(response).await
    }

    async fn test_reminder(&self) -> TrackerResult<ProcessLocationResponse> {
        let response = Request::get(&self.config.test_reminder_path)
            .send()
            .await
            .map_err(http_error)?;
        decode(response).await
    }

    async fn dismiss_reminder(&self, id: ReminderId) -> TrackerResult<DismissResponse> {
        let response = Request::post(&self.config.dismiss_path(id))
            .send()
            .await
            .map_err(http_error)?;
        decode(response).await
    }
}

// ========================
// Helpers
// ========================

/// Multipart form with the report fields
fn location_form(report: &LocationReport) -> TrackerResult<FormData> {
    let form = FormData::new().map_err(|e| TrackerError::Http(js_error_message(&e)))?;
    for (name, value) in report.form_fields() {
        form.append_with_str(name, &value)
            .map_err(|e| TrackerError::Http(js_error_message(&e)))?;
    }
    Ok(form)
}

/// Error statuses still carry a JSON body, so decode regardless
async fn decode<T: DeserializeOwned>(response: Response) -> TrackerResult<T> {
    if !response.ok() {
        log::debug!("{} answered with status {}", response.url(), response.status());
    }
    response
        .json::<T>()
        .await
        .map_err(|e| TrackerError::Decode(e.to_string()))
}

fn http_error(e: gloo_net::Error) -> TrackerError {
    TrackerError::Http(e.to_string())
}
