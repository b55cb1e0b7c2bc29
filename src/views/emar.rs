use chrono::NaiveTime;

use crate::emar::{DailySummary, EmarHistoryEntry, MedicationChart};
use crate::filters::{matches_districts, matches_text};
use crate::models::Client;
use crate::store::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmarMode {
    #[default]
    Daily,
    History,
}

/// Medication administration screen: a client picker on the left, the dose
/// chart or the history for the picked client on the right.
#[derive(Debug, Clone, Default)]
pub struct EmarView {
    pub search: String,
    pub districts: Vec<String>,
    pub selected_client: Option<String>,
    pub date: String, // ISO date
    pub mode: EmarMode,
    pub chart: MedicationChart,
    pub medication_cursor: usize,
    pub dose_cursor: usize,
    pub notes: String,
    /// Cursor into the refusal-reason list while the picker is open.
    pub reason_picker: Option<usize>,
}

impl EmarView {
    /// Clients offered in the picker. Only clients with medications appear;
    /// there is nothing to chart for the rest.
    pub fn clients<'a>(&self, state: &'a AppState) -> Vec<&'a Client> {
        state
            .clients
            .iter()
            .filter(|client| {
                !client.medications.is_empty()
                    && matches_text(&self.search, &[&client.name])
                    && matches_districts(&self.districts, &client.patch)
            })
            .collect()
    }

    /// Pick a client; the chart is per client and date so it starts over.
    pub fn select_client(&mut self, id: Option<String>) {
        if self.selected_client != id {
            self.chart.reset();
            self.medication_cursor = 0;
            self.dose_cursor = 0;
            self.reason_picker = None;
        }
        self.selected_client = id;
    }

    pub fn select_date(&mut self, date: String) {
        if self.date != date {
            self.chart.reset();
        }
        self.date = date;
    }

    pub fn summary(&self, client: &Client, now: NaiveTime) -> DailySummary {
        self.chart.daily_summary(client, now)
    }

    /// Past administrations for the picked client, newest first.
    pub fn history<'a>(&self, state: &'a AppState) -> Vec<&'a EmarHistoryEntry> {
        let Some(client_id) = self.selected_client.as_deref() else {
            return Vec::new();
        };
        let mut entries: Vec<_> = state
            .emar_history
            .iter()
            .filter(|e| e.client_id == client_id)
            .collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emar::{DoseKey, DoseOutcome, DoseStatus};
    use crate::mock;

    #[test]
    fn picker_skips_clients_without_medications() {
        let state = mock::seed();
        let view = EmarView::default();
        let names: Vec<_> = view.clients(&state).iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"Margaret Thompson"));
        assert!(!names.contains(&"Arthur Pemberton"));
    }

    #[test]
    fn changing_client_resets_the_chart() {
        let mut view = EmarView::default();
        view.select_client(Some("client-1".to_string()));
        view.chart.record_at(
            DoseKey::new("med-1", 0),
            DoseOutcome::Administered,
            None,
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        );

        // Re-selecting the same client keeps the session.
        view.select_client(Some("client-1".to_string()));
        assert_eq!(
            view.chart.status(&DoseKey::new("med-1", 0)),
            DoseStatus::Administered
        );

        view.select_client(Some("client-2".to_string()));
        assert_eq!(
            view.chart.status(&DoseKey::new("med-1", 0)),
            DoseStatus::Pending
        );
    }

    #[test]
    fn history_is_per_client_newest_first() {
        let state = mock::seed();
        let mut view = EmarView::default();
        view.select_client(Some("client-1".to_string()));

        let history = view.history(&state);
        assert_eq!(history.len(), 2);
        assert!(history[0].timestamp >= history[1].timestamp);
        assert!(history.iter().all(|e| e.client_id == "client-1"));
    }

    #[test]
    fn no_selection_means_no_history() {
        let state = mock::seed();
        let view = EmarView::default();
        assert!(view.history(&state).is_empty());
    }
}
