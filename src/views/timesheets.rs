use crate::filters::matches_text;
use crate::models::TimesheetEntry;
use crate::store::AppState;

/// Weekly timesheet review. Overtime is paid at time and a half; the base
/// rate already covers the hours, so only the premium half is added here.
pub const OVERTIME_PREMIUM: f32 = 0.5;

#[derive(Debug, Clone, Default)]
pub struct TimesheetsView {
    pub search: String,
    pub cursor: usize,
}

/// A timesheet joined with the staff member's name for display.
#[derive(Debug, Clone)]
pub struct TimesheetRow<'a> {
    pub entry: &'a TimesheetEntry,
    pub staff_name: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeekTotals {
    pub hours: f32,
    pub mileage: f32,
    pub pay: f32,
}

pub fn total_pay(entry: &TimesheetEntry) -> f32 {
    entry.base_pay() + entry.overtime_hours * entry.hourly_rate * OVERTIME_PREMIUM
}

impl TimesheetsView {
    pub fn rows<'a>(&self, state: &'a AppState) -> Vec<TimesheetRow<'a>> {
        state
            .timesheets
            .iter()
            .filter_map(|entry| {
                let staff_name = state
                    .staff_member(&entry.staff_id)
                    .map(|s| s.name.as_str())?;
                matches_text(&self.search, &[staff_name]).then_some(TimesheetRow {
                    entry,
                    staff_name,
                })
            })
            .collect()
    }

    pub fn totals(&self, state: &AppState) -> WeekTotals {
        self.rows(state)
            .into_iter()
            .fold(WeekTotals::default(), |mut totals, row| {
                totals.hours += row.entry.total_hours;
                totals.mileage += row.entry.total_mileage;
                totals.pay += total_pay(row.entry);
                totals
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn rows_join_staff_names_and_drop_orphans() {
        let mut state = mock::seed();
        state.timesheets[0].staff_id = "staff-gone".to_string();
        let rows = TimesheetsView::default().rows(&state);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| !r.staff_name.is_empty()));
    }

    #[test]
    fn overtime_adds_only_the_premium_half() {
        let state = mock::seed();
        let entry = &state.timesheets[0];
        // 38.5h at 12.40 plus 2.5h overtime premium at 6.20.
        let expected = 38.5 * 12.40 + 2.5 * 12.40 * 0.5;
        assert!((total_pay(entry) - expected).abs() < 0.01);
    }

    #[test]
    fn totals_respect_the_search_filter() {
        let state = mock::seed();
        let view = TimesheetsView {
            search: "jennifer".to_string(),
            ..TimesheetsView::default()
        };
        let totals = view.totals(&state);
        assert!((totals.hours - 38.5).abs() < f32::EPSILON);
    }

    #[test]
    fn daily_breakdown_sums_to_the_weekly_total() {
        let state = mock::seed();
        for entry in &state.timesheets {
            assert!((entry.daily_hours.total() - entry.total_hours).abs() < 0.01);
        }
    }
}
