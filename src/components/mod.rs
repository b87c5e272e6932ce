//! UI Components
//!
//! Page sections bound to the tracker context.

mod location_form;
mod notification_badge;
mod reminder_list;
mod tracking_toggle;

pub use location_form::LocationForm;
pub use notification_badge::NotificationBadge;
pub use reminder_list::ReminderList;
pub use tracking_toggle::TrackingToggle;
