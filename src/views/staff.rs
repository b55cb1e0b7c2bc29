use crate::filters::{matches_any_district, matches_choice, matches_text};
use crate::models::{Staff, StaffRole, StaffStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaffDetailTab {
    #[default]
    Overview,
    Schedule,
    Skills,
    Metrics,
}

impl StaffDetailTab {
    pub const ALL: [StaffDetailTab; 4] = [
        StaffDetailTab::Overview,
        StaffDetailTab::Schedule,
        StaffDetailTab::Skills,
        StaffDetailTab::Metrics,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            StaffDetailTab::Overview => "Overview",
            StaffDetailTab::Schedule => "Schedule",
            StaffDetailTab::Skills => "Skills",
            StaffDetailTab::Metrics => "Metrics",
        }
    }
}

/// Staff directory. A staff member covers several patches, so the district
/// multi-select matches when any of them is selected.
#[derive(Debug, Clone, Default)]
pub struct StaffView {
    pub search: String,
    pub status: Option<StaffStatus>,
    pub role: Option<StaffRole>,
    pub districts: Vec<String>,
    pub cursor: usize,
    pub detail_tab: StaffDetailTab,
}

impl StaffView {
    pub fn filtered<'a>(&self, staff: &'a [Staff]) -> Vec<&'a Staff> {
        staff
            .iter()
            .filter(|member| {
                matches_text(&self.search, &[&member.name, &member.staff_ref_number])
                    && matches_choice(self.status.as_ref(), &member.status)
                    && matches_choice(self.role.as_ref(), &member.role)
                    && matches_any_district(&self.districts, &member.patches)
            })
            .collect()
    }

    pub fn on_duty_count(&self, staff: &[Staff]) -> usize {
        staff
            .iter()
            .filter(|s| s.status == StaffStatus::Active)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn search_matches_reference_numbers() {
        let staff = mock::staff();
        let view = StaffView {
            search: "sc1014".to_string(),
            ..StaffView::default()
        };
        let rows = view.filtered(&staff);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Sarah Ahmed");
    }

    #[test]
    fn district_filter_matches_any_patch() {
        let staff = mock::staff();
        let view = StaffView {
            districts: vec!["Northeast".to_string()],
            ..StaffView::default()
        };
        let rows = view.filtered(&staff);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Michael Chen");
    }

    #[test]
    fn role_and_status_combine() {
        let staff = mock::staff();
        let view = StaffView {
            role: Some(StaffRole::Carer),
            status: Some(StaffStatus::Active),
            ..StaffView::default()
        };
        assert_eq!(view.filtered(&staff).len(), 3);
    }
}
