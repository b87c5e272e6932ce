//! Reminder Server Bindings
//!
//! HTTP wrappers for the reminder server endpoints, organized by domain.

mod location;

pub use location::*;
