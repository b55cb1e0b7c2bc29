use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub address: String,
    pub keybox_code: String,
    pub contact_info: ContactInfo,
    pub next_of_kin: NextOfKin,
    pub service_level: ServiceLevel,
    pub care_needs: Vec<String>,
    pub medications: Vec<Medication>,
    pub gp_details: GpDetails,
    pub schedule: Schedule,
    pub patch: String,
    pub status: ClientStatus,
    pub admission_date: String, // ISO date, e.g. "2025-03-14"
    pub preferred_carer: Option<String>,
    pub other_residents: Option<String>,
    pub allergies: Vec<String>,
    pub additional_tasks: Vec<String>,
    pub preferred_language: Option<String>,
    pub preferred_gender: Option<PreferredGender>,
}

impl Client {
    /// Any medication flagged as running low.
    pub fn has_low_stock(&self) -> bool {
        self.medications.iter().any(|m| m.low_stock)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub emergency_contact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextOfKin {
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpDetails {
    pub name: String,
    pub practice: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    /// One or more scheduled dose times as "HH:MM" tokens, comma-separated,
    /// e.g. "08:00, 20:00".
    pub time: String,
    pub instructions: String,
    pub route: Option<String>,
    pub low_stock: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(rename = "type")]
    pub kind: ScheduleType,
    pub days: Vec<String>,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleType {
    Am,
    Pm,
    FullDay,
}

impl fmt::Display for ScheduleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScheduleType::Am => "am",
            ScheduleType::Pm => "pm",
            ScheduleType::FullDay => "full-day",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreferredGender {
    Male,
    Female,
    NoPreference,
}

/// Ordinal care-intensity classification; drives the default care-needs set
/// offered in the client wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ServiceLevel {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
}

impl ServiceLevel {
    pub const ALL: [ServiceLevel; 4] = [
        ServiceLevel::One,
        ServiceLevel::Two,
        ServiceLevel::Three,
        ServiceLevel::Four,
    ];

    pub fn as_u8(&self) -> u8 {
        match self {
            ServiceLevel::One => 1,
            ServiceLevel::Two => 2,
            ServiceLevel::Three => 3,
            ServiceLevel::Four => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceLevel::One => "Level 1 - Low",
            ServiceLevel::Two => "Level 2 - Moderate",
            ServiceLevel::Three => "Level 3 - High",
            ServiceLevel::Four => "Level 4 - Complex",
        }
    }
}

impl fmt::Display for ServiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClientStatus {
    Active,
    Pending,
    EndingSoon,
    Completed,
}

impl ClientStatus {
    pub const ALL: [ClientStatus; 4] = [
        ClientStatus::Active,
        ClientStatus::Pending,
        ClientStatus::EndingSoon,
        ClientStatus::Completed,
    ];
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClientStatus::Active => "active",
            ClientStatus::Pending => "pending",
            ClientStatus::EndingSoon => "ending-soon",
            ClientStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The wire names are what a future backend would serve; they must not
    // drift from the enum variants.
    #[test]
    fn schedule_serializes_with_the_legacy_field_names() {
        let schedule = Schedule {
            kind: ScheduleType::FullDay,
            days: vec!["Monday".to_string()],
            start_date: "2025-01-06".to_string(),
            end_date: "2025-12-19".to_string(),
        };
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["type"], "full-day");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn service_levels_serialize_as_bare_digits() {
        assert_eq!(
            serde_json::to_string(&ServiceLevel::Two).unwrap(),
            "\"2\""
        );
        let parsed: ServiceLevel = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(parsed, ServiceLevel::Four);
    }

    #[test]
    fn statuses_use_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ClientStatus::EndingSoon).unwrap(),
            "\"ending-soon\""
        );
    }
}
