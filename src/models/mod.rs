//! Domain records for the home-care agency.
//!
//! These are plain data shapes seeded from mock data; behavior lives in the
//! store, the view models and the EMAR tracker.

pub mod activity;
pub mod client;
pub mod incident;
pub mod patch;
pub mod staff;
pub mod timesheet;
pub mod visit;

pub use activity::{ActivityKind, ActivityLogEntry, DashboardMetrics, Priority};
pub use client::{
    Client, ClientStatus, ContactInfo, Gender, GpDetails, Medication, NextOfKin, PreferredGender,
    Schedule, ScheduleType, ServiceLevel,
};
pub use incident::{Incident, IncidentStatus, Severity};
pub use patch::Patch;
pub use staff::{
    Availability, DaySchedule, Staff, StaffContactInfo, StaffMetrics, StaffRole, StaffStatus,
    Transport, WeekSchedule,
};
pub use timesheet::{DailyBreakdown, TimesheetEntry};
pub use visit::{TimeSlot, Visit, VisitStatus};

/// The geographic districts the agency operates in. Every patch, client and
/// staff district filter draws from this list.
pub const DISTRICTS: [&str; 8] = [
    "Central",
    "North",
    "South",
    "East",
    "West",
    "Northeast",
    "Southeast",
    "Northwest",
];
