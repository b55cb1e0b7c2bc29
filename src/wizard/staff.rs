use crate::models::{
    Gender, Staff, StaffContactInfo, StaffMetrics, StaffRole, StaffStatus, Transport, WeekSchedule,
};

use super::{mint_id, FormError};

/// Flat staff intake form; the weekly schedule grid is edited in place and
/// the availability flags are derived from it on build.
#[derive(Debug, Clone, Default)]
pub struct StaffForm {
    pub name: String,
    pub gender: Option<Gender>,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub postcode: String,
    pub transport: Option<Transport>,
    pub car_reg: String,
    pub patches: Vec<String>,
    pub languages: Vec<String>,
    pub skills: Vec<String>,
    pub role: Option<StaffRole>,
    pub join_date: String,
    pub work_schedule: WeekSchedule,
    pub preferred_district: String,
}

impl StaffForm {
    /// Reference numbers are `SC` plus the last six digits of the submission
    /// instant, matching the numbering the rota exports use.
    pub fn reference_number(now_millis: i64) -> String {
        let digits = format!("{now_millis}");
        let tail = &digits[digits.len().saturating_sub(6)..];
        format!("SC{tail}")
    }

    pub fn build(&self, now_millis: i64) -> Result<Staff, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Missing("name"));
        }
        let reference = Self::reference_number(now_millis);

        Ok(Staff {
            id: mint_id("staff", now_millis),
            name: self.name.trim().to_string(),
            staff_ref_number: reference.clone(),
            gender: self.gender.unwrap_or(Gender::Other),
            contact_info: StaffContactInfo {
                phone: self.phone.clone(),
                email: self.email.clone(),
                address: self.address.clone(),
            },
            transport: self.transport.unwrap_or(Transport::Public),
            patches: self.patches.clone(),
            languages: self.languages.clone(),
            skills: self.skills.clone(),
            id_number: reference,
            status: StaffStatus::Active,
            role: self.role.unwrap_or(StaffRole::Carer),
            availability: self.work_schedule.availability(),
            metrics: StaffMetrics::default(),
            work_schedule: self.work_schedule.clone(),
            car_reg: car_reg_if_driving(self.transport, &self.car_reg),
            postcode: trimmed(&self.postcode),
            join_date: trimmed(&self.join_date),
            left_date: None,
            preferred_district: trimmed(&self.preferred_district),
        })
    }
}

fn car_reg_if_driving(transport: Option<Transport>, car_reg: &str) -> Option<String> {
    match transport {
        Some(Transport::Car) => trimmed(car_reg),
        _ => None,
    }
}

fn trimmed(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_number_uses_the_last_six_digits() {
        assert_eq!(StaffForm::reference_number(1_724_572_800_123), "SC800123");
        assert_eq!(StaffForm::reference_number(123), "SC123");
    }

    #[test]
    fn availability_is_derived_from_the_schedule_grid() {
        let mut form = StaffForm {
            name: "Alex Morgan".to_string(),
            ..StaffForm::default()
        };
        form.work_schedule.monday.am = true;
        form.work_schedule.wednesday.pm = true;
        form.work_schedule.friday.am = true;
        form.work_schedule.friday.pm = true;

        let staff = form.build(1_724_572_800_456).unwrap();
        assert!(staff.availability.am);
        assert!(staff.availability.pm);
        assert!(staff.availability.full_day);
        assert_eq!(staff.staff_ref_number, "SC800456");
        assert_eq!(staff.status, StaffStatus::Active);
    }

    #[test]
    fn car_registration_only_kept_for_drivers() {
        let form = StaffForm {
            name: "Alex Morgan".to_string(),
            transport: Some(Transport::Bicycle),
            car_reg: "YS21 KXB".to_string(),
            ..StaffForm::default()
        };
        assert_eq!(form.build(0).unwrap().car_reg, None);

        let form = StaffForm {
            transport: Some(Transport::Car),
            ..form
        };
        assert_eq!(form.build(0).unwrap().car_reg.as_deref(), Some("YS21 KXB"));
    }
}
