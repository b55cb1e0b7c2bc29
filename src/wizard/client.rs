use crate::models::{
    Client, ContactInfo, ClientStatus, Gender, GpDetails, Medication, NextOfKin, PreferredGender,
    Schedule, ScheduleType, ServiceLevel,
};

use super::{mint_id, FormError};

/// Default care-needs checklist offered for each service level. The lists
/// are cumulative: each level carries everything below it plus its own
/// additions. Picking a level replaces the current selection with this
/// list; individual needs can then be toggled off.
pub fn care_needs_for(level: ServiceLevel) -> &'static [&'static str] {
    match level {
        ServiceLevel::One => &[
            "Food Preparation",
            "Light Cleaning",
            "Shopping",
            "Companionship",
        ],
        ServiceLevel::Two => &[
            "Food Preparation",
            "Light Cleaning",
            "Shopping",
            "Companionship",
            "Personal Care",
            "Medication Management",
        ],
        ServiceLevel::Three => &[
            "Food Preparation",
            "Light Cleaning",
            "Shopping",
            "Companionship",
            "Personal Care",
            "Medication Management",
            "Mobility Support",
            "Meal Preparation",
            "Housekeeping",
        ],
        ServiceLevel::Four => &[
            "Food Preparation",
            "Light Cleaning",
            "Shopping",
            "Companionship",
            "Personal Care",
            "Medication Management",
            "Mobility Support",
            "Meal Preparation",
            "Housekeeping",
            "Manual Handling (2 Person)",
            "Complex Mobility Support",
        ],
    }
}

/// Which days a schedule preset ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulePreset {
    Weekdays,
    Weekends,
    EveryDay,
}

impl SchedulePreset {
    pub fn days(&self) -> &'static [&'static str] {
        match self {
            SchedulePreset::Weekdays => {
                &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
            }
            SchedulePreset::Weekends => &["Saturday", "Sunday"],
            SchedulePreset::EveryDay => &[
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ],
        }
    }
}

/// All wizard input in one flat struct. Every tab edits the same instance,
/// so nothing is lost moving back and forth between tabs.
#[derive(Debug, Clone, Default)]
pub struct ClientForm {
    pub name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub address: String,
    pub keybox_code: String,
    pub phone: String,
    pub email: String,
    pub emergency_contact: String,
    pub next_of_kin_name: String,
    pub next_of_kin_relationship: String,
    pub next_of_kin_phone: String,
    pub service_level: Option<ServiceLevel>,
    pub care_needs: Vec<String>,
    pub medications: Vec<Medication>,
    pub gp_name: String,
    pub gp_practice: String,
    pub gp_phone: String,
    pub schedule_type: Option<ScheduleType>,
    pub schedule_days: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub patch: String,
    pub preferred_carer: String,
    pub allergies: Vec<String>,
    pub additional_tasks: Vec<String>,
    pub preferred_language: String,
    pub preferred_gender: Option<PreferredGender>,
}

impl ClientForm {
    /// Select a service level and reset the care-needs checklist to that
    /// level's defaults.
    pub fn set_service_level(&mut self, level: ServiceLevel) {
        self.service_level = Some(level);
        self.care_needs = care_needs_for(level)
            .iter()
            .map(|n| n.to_string())
            .collect();
    }

    pub fn apply_preset(&mut self, preset: SchedulePreset) {
        self.schedule_days = preset.days().iter().map(|d| d.to_string()).collect();
    }

    pub fn toggle_care_need(&mut self, need: &str) {
        if let Some(pos) = self.care_needs.iter().position(|n| n == need) {
            self.care_needs.remove(pos);
        } else {
            self.care_needs.push(need.to_string());
        }
    }

    /// Turn the form into a client record. New clients always start pending;
    /// the planning team activates them once the first visit is booked.
    pub fn build(&self, now_millis: i64) -> Result<Client, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Missing("name"));
        }
        let age: u32 = self
            .age
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidAge(self.age.clone()))?;
        let service_level = self.service_level.unwrap_or(ServiceLevel::One);

        Ok(Client {
            id: mint_id("client", now_millis),
            name: self.name.trim().to_string(),
            age,
            gender: self.gender.unwrap_or(Gender::Other),
            address: self.address.clone(),
            keybox_code: self.keybox_code.clone(),
            contact_info: ContactInfo {
                phone: self.phone.clone(),
                email: self.email.clone(),
                emergency_contact: self.emergency_contact.clone(),
            },
            next_of_kin: NextOfKin {
                name: self.next_of_kin_name.clone(),
                relationship: self.next_of_kin_relationship.clone(),
                phone: self.next_of_kin_phone.clone(),
            },
            service_level,
            care_needs: self.care_needs.clone(),
            medications: self.medications.clone(),
            gp_details: GpDetails {
                name: self.gp_name.clone(),
                practice: self.gp_practice.clone(),
                phone: self.gp_phone.clone(),
            },
            schedule: Schedule {
                kind: self.schedule_type.unwrap_or(ScheduleType::Am),
                days: self.schedule_days.clone(),
                start_date: self.start_date.clone(),
                end_date: self.end_date.clone(),
            },
            patch: self.patch.clone(),
            status: ClientStatus::Pending,
            admission_date: self.start_date.clone(),
            preferred_carer: none_if_empty(&self.preferred_carer),
            other_residents: None,
            allergies: self.allergies.clone(),
            additional_tasks: self.additional_tasks.clone(),
            preferred_language: none_if_empty(&self.preferred_language),
            preferred_gender: self.preferred_gender,
        })
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_pending_client_from_the_form() {
        let mut form = ClientForm {
            name: "Jane Doe".to_string(),
            age: "82".to_string(),
            gender: Some(Gender::Female),
            start_date: "2025-09-01".to_string(),
            ..ClientForm::default()
        };
        form.set_service_level(ServiceLevel::Two);
        form.apply_preset(SchedulePreset::Weekdays);

        let client = form.build(1_724_572_800_123).unwrap();
        assert_eq!(client.id, "client-1724572800123");
        assert_eq!(client.age, 82);
        assert_eq!(client.status, ClientStatus::Pending);
        assert_eq!(client.admission_date, "2025-09-01");
        assert_eq!(client.care_needs, care_needs_for(ServiceLevel::Two));
        assert_eq!(client.schedule.days.len(), 5);
    }

    #[test]
    fn care_needs_lists_are_cumulative() {
        assert_eq!(
            care_needs_for(ServiceLevel::Two),
            &[
                "Food Preparation",
                "Light Cleaning",
                "Shopping",
                "Companionship",
                "Personal Care",
                "Medication Management",
            ]
        );
        let levels = ServiceLevel::ALL.map(care_needs_for);
        for pair in levels.windows(2) {
            assert!(pair[0].iter().all(|need| pair[1].contains(need)));
            assert!(pair[0].len() < pair[1].len());
        }
    }

    #[test]
    fn changing_level_resets_the_checklist() {
        let mut form = ClientForm::default();
        form.set_service_level(ServiceLevel::One);
        form.toggle_care_need("Shopping");
        assert!(!form.care_needs.iter().any(|n| n == "Shopping"));

        form.set_service_level(ServiceLevel::Four);
        assert_eq!(form.care_needs, care_needs_for(ServiceLevel::Four));
    }

    #[test]
    fn rejects_blank_name_and_bad_age() {
        let form = ClientForm {
            age: "82".to_string(),
            ..ClientForm::default()
        };
        assert_eq!(form.build(0), Err(FormError::Missing("name")));

        let form = ClientForm {
            name: "Jane Doe".to_string(),
            age: "eighty-two".to_string(),
            ..ClientForm::default()
        };
        assert_eq!(
            form.build(0),
            Err(FormError::InvalidAge("eighty-two".to_string()))
        );
    }
}
