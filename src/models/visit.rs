use std::fmt;

use serde::{Deserialize, Serialize};

/// One scheduled care call on the rota board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub id: String,
    pub client_id: String,
    pub staff_id: String,
    pub date: String, // ISO date
    pub time_slot: TimeSlot,
    pub duration: u32, // minutes
    pub tasks: Vec<String>,
    pub status: VisitStatus,
    pub location: String,
    pub mileage: Option<f32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeSlot {
    Am,
    Pm,
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeSlot::Am => "am",
            TimeSlot::Pm => "pm",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisitStatus {
    Scheduled,
    InProgress,
    Completed,
    Missed,
}

impl fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VisitStatus::Scheduled => "scheduled",
            VisitStatus::InProgress => "in-progress",
            VisitStatus::Completed => "completed",
            VisitStatus::Missed => "missed",
        })
    }
}
