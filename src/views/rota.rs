use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{Client, Staff, TimeSlot, Visit};
use crate::store::AppState;

/// The rota board is drawn staff-first or client-first, for one day or for
/// the week containing the selected date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotaMode {
    #[default]
    DayStaff,
    DayClients,
    WeekStaff,
    WeekClients,
}

impl RotaMode {
    pub const ALL: [RotaMode; 4] = [
        RotaMode::DayStaff,
        RotaMode::DayClients,
        RotaMode::WeekStaff,
        RotaMode::WeekClients,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            RotaMode::DayStaff => "DAY BY STAFF",
            RotaMode::DayClients => "DAY BY CLIENT",
            RotaMode::WeekStaff => "WEEK BY STAFF",
            RotaMode::WeekClients => "WEEK BY CLIENT",
        }
    }

    pub fn is_week(&self) -> bool {
        matches!(self, RotaMode::WeekStaff | RotaMode::WeekClients)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RotaView {
    pub mode: RotaMode,
    pub date: String, // ISO date
    pub cursor: usize,
}

/// One day-board row: a person and their AM/PM calls for the selected date.
#[derive(Debug, Clone)]
pub struct RotaRow<'a> {
    pub name: &'a str,
    pub am: Vec<&'a Visit>,
    pub pm: Vec<&'a Visit>,
}

/// Visit counts for one weekday cell on the week board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayLoad {
    pub am: usize,
    pub pm: usize,
}

/// One week-board row: a person and their call counts for Monday..Sunday of
/// the week containing the selected date.
#[derive(Debug, Clone)]
pub struct WeekRow<'a> {
    pub name: &'a str,
    pub days: [DayLoad; 7],
}

impl RotaView {
    pub fn toggle_mode(&mut self) {
        let index = RotaMode::ALL
            .iter()
            .position(|m| *m == self.mode)
            .unwrap_or(0);
        self.mode = RotaMode::ALL[(index + 1) % RotaMode::ALL.len()];
        self.cursor = 0;
    }

    pub fn rows<'a>(&self, state: &'a AppState) -> Vec<RotaRow<'a>> {
        match self.mode {
            RotaMode::DayStaff | RotaMode::WeekStaff => state
                .staff
                .iter()
                .map(|member| self.row(&member.name, state, |v| v.staff_id == member.id))
                .collect(),
            RotaMode::DayClients | RotaMode::WeekClients => state
                .clients
                .iter()
                .map(|client| self.row(&client.name, state, |v| v.client_id == client.id))
                .collect(),
        }
    }

    fn row<'a>(
        &self,
        name: &'a str,
        state: &'a AppState,
        belongs: impl Fn(&Visit) -> bool,
    ) -> RotaRow<'a> {
        let mut row = RotaRow {
            name,
            am: Vec::new(),
            pm: Vec::new(),
        };
        for visit in state.visits.iter().filter(|v| v.date == self.date) {
            if !belongs(visit) {
                continue;
            }
            match visit.time_slot {
                TimeSlot::Am => row.am.push(visit),
                TimeSlot::Pm => row.pm.push(visit),
            }
        }
        row
    }

    /// Monday..Sunday ISO dates of the week containing the selected date.
    /// An unparseable date yields no days, so the week board renders empty
    /// rather than wrong.
    pub fn week_dates(&self) -> Vec<String> {
        let Ok(date) = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") else {
            return Vec::new();
        };
        let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        (0..7)
            .map(|offset| (monday + Duration::days(offset)).format("%Y-%m-%d").to_string())
            .collect()
    }

    pub fn week_rows<'a>(&self, state: &'a AppState) -> Vec<WeekRow<'a>> {
        let dates = self.week_dates();
        match self.mode {
            RotaMode::DayStaff | RotaMode::WeekStaff => state
                .staff
                .iter()
                .map(|member| {
                    self.week_row(&member.name, state, &dates, |v| v.staff_id == member.id)
                })
                .collect(),
            RotaMode::DayClients | RotaMode::WeekClients => state
                .clients
                .iter()
                .map(|client| {
                    self.week_row(&client.name, state, &dates, |v| v.client_id == client.id)
                })
                .collect(),
        }
    }

    fn week_row<'a>(
        &self,
        name: &'a str,
        state: &'a AppState,
        dates: &[String],
        belongs: impl Fn(&Visit) -> bool,
    ) -> WeekRow<'a> {
        let mut days = [DayLoad::default(); 7];
        for visit in state.visits.iter().filter(|v| belongs(v)) {
            let Some(index) = dates.iter().position(|d| *d == visit.date) else {
                continue;
            };
            match visit.time_slot {
                TimeSlot::Am => days[index].am += 1,
                TimeSlot::Pm => days[index].pm += 1,
            }
        }
        WeekRow { name, days }
    }
}

/// Candidate carers for a client's call, those covering the client's patch
/// listed before the rest. The planner can still pick anyone.
pub fn assignment_options<'a>(staff: &'a [Staff], client: &Client) -> Vec<&'a Staff> {
    let (mut local, distant): (Vec<_>, Vec<_>) = staff
        .iter()
        .partition(|member| member.patches.iter().any(|p| p == &client.patch));
    local.extend(distant);
    local
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn rows_split_visits_into_am_and_pm() {
        let state = mock::seed();
        let view = RotaView {
            date: "2025-08-25".to_string(),
            ..RotaView::default()
        };
        let rows = view.rows(&state);
        let jennifer = rows.iter().find(|r| r.name == "Jennifer Mills").unwrap();
        assert_eq!(jennifer.am.len(), 2);
        assert!(jennifer.pm.is_empty());
    }

    #[test]
    fn client_mode_groups_by_client() {
        let state = mock::seed();
        let mut view = RotaView {
            date: "2025-08-25".to_string(),
            ..RotaView::default()
        };
        view.toggle_mode();
        assert_eq!(view.mode, RotaMode::DayClients);
        let rows = view.rows(&state);
        let margaret = rows.iter().find(|r| r.name == "Margaret Thompson").unwrap();
        assert_eq!(margaret.am.len(), 1);
        assert_eq!(margaret.pm.len(), 1);
    }

    #[test]
    fn mode_cycles_through_all_four_boards() {
        let mut view = RotaView::default();
        let mut seen = vec![view.mode];
        for _ in 0..3 {
            view.toggle_mode();
            seen.push(view.mode);
        }
        assert_eq!(seen, RotaMode::ALL);
        view.toggle_mode();
        assert_eq!(view.mode, RotaMode::DayStaff);
    }

    #[test]
    fn other_dates_yield_empty_rows() {
        let state = mock::seed();
        let view = RotaView {
            date: "2030-01-01".to_string(),
            ..RotaView::default()
        };
        assert!(view
            .rows(&state)
            .iter()
            .all(|r| r.am.is_empty() && r.pm.is_empty()));
    }

    #[test]
    fn week_dates_run_monday_to_sunday() {
        // 2025-08-27 is a Wednesday.
        let view = RotaView {
            date: "2025-08-27".to_string(),
            ..RotaView::default()
        };
        let dates = view.week_dates();
        assert_eq!(dates.first().map(String::as_str), Some("2025-08-25"));
        assert_eq!(dates.last().map(String::as_str), Some("2025-08-31"));

        let bad = RotaView {
            date: "not a date".to_string(),
            ..RotaView::default()
        };
        assert!(bad.week_dates().is_empty());
    }

    #[test]
    fn week_board_counts_calls_per_weekday() {
        let state = mock::seed();
        let view = RotaView {
            mode: RotaMode::WeekStaff,
            date: "2025-08-25".to_string(), // a Monday
            ..RotaView::default()
        };
        let rows = view.week_rows(&state);
        let jennifer = rows.iter().find(|r| r.name == "Jennifer Mills").unwrap();
        assert_eq!(jennifer.days[0], DayLoad { am: 2, pm: 0 });
        // The missed Sunday call belongs to the previous week.
        assert!(jennifer.days[1..].iter().all(|d| *d == DayLoad::default()));

        let sarah = rows.iter().find(|r| r.name == "Sarah Ahmed").unwrap();
        assert_eq!(sarah.days[0], DayLoad { am: 1, pm: 0 });
    }

    #[test]
    fn week_client_board_follows_the_client_schedule() {
        let state = mock::seed();
        let view = RotaView {
            mode: RotaMode::WeekClients,
            date: "2025-08-25".to_string(),
            ..RotaView::default()
        };
        let rows = view.week_rows(&state);
        let margaret = rows.iter().find(|r| r.name == "Margaret Thompson").unwrap();
        assert_eq!(margaret.days[0], DayLoad { am: 1, pm: 1 });
    }

    #[test]
    fn local_carers_are_offered_first() {
        let state = mock::seed();
        let margaret = state.client("client-1").unwrap();
        let options = assignment_options(&state.staff, margaret);
        assert_eq!(options.len(), state.staff.len());
        // Margaret is in the North patch.
        assert!(options[0].patches.iter().any(|p| p == "North"));
        assert!(options
            .last()
            .unwrap()
            .patches
            .iter()
            .all(|p| p != "North"));
    }
}
