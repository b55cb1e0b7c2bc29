use std::fmt;

use serde::{Deserialize, Serialize};

/// Agency-wide event feed shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub message: String,
    pub timestamp: String,
    pub priority: Priority,
    pub client_id: Option<String>,
    pub staff_id: Option<String>,
    pub resolved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    MissedMedication,
    NoAccess,
    RefusedCare,
    Incident,
    Alert,
    ContactNote,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActivityKind::MissedMedication => "missed-medication",
            ActivityKind::NoAccess => "no-access",
            ActivityKind::RefusedCare => "refused-care",
            ActivityKind::Incident => "incident",
            ActivityKind::Alert => "alert",
            ActivityKind::ContactNote => "contact-note",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        })
    }
}

/// Headline counters on the dashboard. Seeded by the planning system rather
/// than derived from the record lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub active_clients: u32,
    pub staff_on_duty: u32,
    pub pending_clients: u32,
    pub active_alerts: u32,
    pub incident_reports: u32,
    pub pending_assessments: u32,
    pub clients_ending_soon: u32,
    pub staff_on_leave: u32,
}
