use std::fmt;

use serde::{Deserialize, Serialize};

use super::client::Gender;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub staff_ref_number: String,
    pub gender: Gender,
    pub contact_info: StaffContactInfo,
    pub transport: Transport,
    pub patches: Vec<String>,
    pub languages: Vec<String>,
    pub skills: Vec<String>,
    pub id_number: String,
    pub status: StaffStatus,
    pub role: StaffRole,
    pub availability: Availability,
    pub metrics: StaffMetrics,
    pub work_schedule: WeekSchedule,
    pub car_reg: Option<String>,
    pub postcode: Option<String>,
    pub join_date: Option<String>,
    pub left_date: Option<String>,
    pub preferred_district: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transport {
    Car,
    Public,
    Bicycle,
    Walking,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Transport::Car => "car",
            Transport::Public => "public",
            Transport::Bicycle => "bicycle",
            Transport::Walking => "walking",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaffStatus {
    Active,
    Leave,
    Training,
    Sick,
    Inactive,
}

impl StaffStatus {
    pub const ALL: [StaffStatus; 5] = [
        StaffStatus::Active,
        StaffStatus::Leave,
        StaffStatus::Training,
        StaffStatus::Sick,
        StaffStatus::Inactive,
    ];
}

impl fmt::Display for StaffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StaffStatus::Active => "active",
            StaffStatus::Leave => "leave",
            StaffStatus::Training => "training",
            StaffStatus::Sick => "sick",
            StaffStatus::Inactive => "inactive",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaffRole {
    Carer,
    PlannerAdmin,
    Assessor,
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StaffRole::Carer => "carer",
            StaffRole::PlannerAdmin => "planner-admin",
            StaffRole::Assessor => "assessor",
        };
        f.write_str(s)
    }
}

/// Shift availability derived from the weekly work schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Availability {
    pub am: bool,
    pub pm: bool,
    pub full_day: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StaffMetrics {
    pub total_hours: f32,
    pub mileage: f32,
    pub shifts_completed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub am: bool,
    pub pm: bool,
    pub am_start: String,
    pub am_end: String,
    pub pm_start: String,
    pub pm_end: String,
}

impl Default for DaySchedule {
    fn default() -> Self {
        Self {
            am: false,
            pm: false,
            am_start: "07:00".to_string(),
            am_end: "14:00".to_string(),
            pm_start: "16:00".to_string(),
            pm_end: "22:00".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeekSchedule {
    pub monday: DaySchedule,
    pub tuesday: DaySchedule,
    pub wednesday: DaySchedule,
    pub thursday: DaySchedule,
    pub friday: DaySchedule,
    pub saturday: DaySchedule,
    pub sunday: DaySchedule,
}

impl WeekSchedule {
    pub fn days(&self) -> [&DaySchedule; 7] {
        [
            &self.monday,
            &self.tuesday,
            &self.wednesday,
            &self.thursday,
            &self.friday,
            &self.saturday,
            &self.sunday,
        ]
    }

    pub fn days_mut(&mut self) -> [&mut DaySchedule; 7] {
        [
            &mut self.monday,
            &mut self.tuesday,
            &mut self.wednesday,
            &mut self.thursday,
            &mut self.friday,
            &mut self.saturday,
            &mut self.sunday,
        ]
    }

    /// Availability flags: am if any day has an am slot, pm likewise, and
    /// full-day when some day carries both.
    pub fn availability(&self) -> Availability {
        let days = self.days();
        Availability {
            am: days.iter().any(|d| d.am),
            pm: days.iter().any(|d| d.pm),
            full_day: days.iter().any(|d| d.am && d.pm),
        }
    }
}
