//! Multi-step intake forms for clients, staff and incident reports.
//!
//! Each wizard keeps one flat form struct shared by all of its tabs; moving
//! between tabs never loses input. `build` turns the form into a domain
//! record, validating only what would corrupt the store.

use thiserror::Error;

pub mod client;
pub mod incident;
pub mod staff;

pub use client::{ClientForm, SchedulePreset};
pub use incident::IncidentForm;
pub use staff::StaffForm;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("age must be a whole number, got '{0}'")]
    InvalidAge(String),
}

/// Record ids are minted from the submission instant, e.g. `client-1724572800123`.
pub fn mint_id(prefix: &str, now_millis: i64) -> String {
    format!("{prefix}-{now_millis}")
}
