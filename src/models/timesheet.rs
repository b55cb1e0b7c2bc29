use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    pub id: String,
    pub staff_id: String,
    pub week_ending: String, // ISO date
    pub total_hours: f32,
    pub total_mileage: f32,
    pub shifts_completed: u32,
    pub overtime_hours: f32,
    pub hourly_rate: f32,
    pub daily_hours: DailyBreakdown,
    pub daily_mileage: DailyBreakdown,
}

impl TimesheetEntry {
    pub fn base_pay(&self) -> f32 {
        self.total_hours * self.hourly_rate
    }
}

/// Weekday figures with the weekend folded into one bucket, matching how the
/// agency's paper timesheets are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyBreakdown {
    pub monday: f32,
    pub tuesday: f32,
    pub wednesday: f32,
    pub thursday: f32,
    pub friday: f32,
    pub weekend: f32,
}

impl DailyBreakdown {
    pub fn total(&self) -> f32 {
        self.monday + self.tuesday + self.wednesday + self.thursday + self.friday + self.weekend
    }
}
