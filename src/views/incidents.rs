use crate::filters::{matches_choice, matches_text};
use crate::models::{Incident, IncidentStatus, Severity};

/// Open and investigating reports live on the current tab; resolved and
/// closed ones on the history tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncidentTab {
    #[default]
    Current,
    History,
}

#[derive(Debug, Clone, Default)]
pub struct IncidentsView {
    pub tab: IncidentTab,
    pub search: String,
    pub severity: Option<Severity>,
    pub status: Option<IncidentStatus>,
    pub location: String,
    pub reported_by: String,
    pub date_from: String, // ISO date, empty = unbounded
    pub date_to: String,
    pub cursor: usize,
}

impl IncidentsView {
    pub fn filtered<'a>(&self, incidents: &'a [Incident]) -> Vec<&'a Incident> {
        incidents
            .iter()
            .filter(|incident| self.on_tab(incident) && self.matches(incident))
            .collect()
    }

    fn on_tab(&self, incident: &Incident) -> bool {
        match self.tab {
            IncidentTab::Current => incident.is_current(),
            IncidentTab::History => !incident.is_current(),
        }
    }

    fn matches(&self, incident: &Incident) -> bool {
        matches_text(
            &self.search,
            &[&incident.title, &incident.description, &incident.client_name],
        ) && matches_choice(self.severity.as_ref(), &incident.severity)
            && matches_choice(self.status.as_ref(), &incident.status)
            && matches_text(&self.location, &[&incident.location])
            && matches_text(&self.reported_by, &[&incident.reported_by])
            && self.in_date_range(&incident.date_reported)
    }

    // Dates are ISO strings, so string comparison is date comparison. The
    // `date_reported` field carries a time suffix, which only matters on the
    // upper bound; pad it to the end of the day.
    fn in_date_range(&self, reported: &str) -> bool {
        if !self.date_from.is_empty() && reported < self.date_from.as_str() {
            return false;
        }
        if !self.date_to.is_empty() {
            let end = format!("{}T23:59:59", self.date_to);
            if reported > end.as_str() {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn every_incident_is_on_exactly_one_tab() {
        let incidents = mock::incidents();
        let current = IncidentsView::default();
        let history = IncidentsView {
            tab: IncidentTab::History,
            ..IncidentsView::default()
        };
        assert_eq!(
            current.filtered(&incidents).len() + history.filtered(&incidents).len(),
            incidents.len()
        );
        assert!(current.filtered(&incidents).iter().all(|i| i.is_current()));
    }

    #[test]
    fn severity_and_search_combine_with_and() {
        let incidents = mock::incidents();
        let view = IncidentsView {
            severity: Some(Severity::High),
            search: "fall".to_string(),
            ..IncidentsView::default()
        };
        let rows = view.filtered(&incidents);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Client Fall");
    }

    #[test]
    fn date_range_is_inclusive_of_both_ends() {
        let incidents = mock::incidents();
        let view = IncidentsView {
            date_from: "2025-08-21".to_string(),
            date_to: "2025-08-22".to_string(),
            ..IncidentsView::default()
        };
        let rows = view.filtered(&incidents);
        assert_eq!(rows.len(), 2);
        assert!(rows
            .iter()
            .all(|i| i.date_reported.starts_with("2025-08-21")
                || i.date_reported.starts_with("2025-08-22")));
    }

    #[test]
    fn reporter_filter_narrows_the_history_tab() {
        let incidents = mock::incidents();
        let view = IncidentsView {
            tab: IncidentTab::History,
            reported_by: "chen".to_string(),
            ..IncidentsView::default()
        };
        let rows = view.filtered(&incidents);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Vehicle Incident");
    }
}
