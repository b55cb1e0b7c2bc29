use crate::models::{Client, Incident, IncidentStatus, Severity, Staff};

use super::{mint_id, FormError};

/// Categories offered by the report form.
pub const INCIDENT_TYPES: [&str; 6] = [
    "Client Fall",
    "Medication Error",
    "No Access",
    "Safeguarding Concern",
    "Vehicle Incident",
    "Other",
];

#[derive(Debug, Clone, Default)]
pub struct IncidentForm {
    pub title: String,
    pub description: String,
    pub person_search: String,
    pub person: Option<String>,
    pub location: String,
    pub severity: Option<Severity>,
    pub immediate_actions: String,
    pub witnesses: String,
}

impl IncidentForm {
    /// Names matching the search term, drawn from the live client and staff
    /// lists. An empty term offers nobody rather than everybody; the field
    /// is a picker, not a browse list.
    pub fn person_matches<'a>(
        &self,
        clients: &'a [Client],
        staff: &'a [Staff],
    ) -> Vec<&'a str> {
        let term = self.person_search.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        clients
            .iter()
            .map(|c| c.name.as_str())
            .chain(staff.iter().map(|s| s.name.as_str()))
            .filter(|name| name.to_lowercase().contains(&term))
            .collect()
    }

    /// New reports always open as `Open` under the reporting user's name;
    /// triage moves them along from the incident board.
    pub fn build(&self, now_millis: i64, reported_at: &str) -> Result<Incident, FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::Missing("incident type"));
        }
        if self.description.trim().is_empty() {
            return Err(FormError::Missing("description"));
        }

        Ok(Incident {
            id: mint_id("inc", now_millis),
            title: self.title.clone(),
            description: self.description.trim().to_string(),
            client_name: self
                .person
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
            location: self.location.clone(),
            severity: self.severity.unwrap_or(Severity::Low),
            status: IncidentStatus::Open,
            reported_by: "Current User".to_string(),
            date_reported: reported_at.to_string(),
            immediate_actions: trimmed(&self.immediate_actions),
            witnesses: trimmed(&self.witnesses),
        })
    }
}

fn trimmed(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn person_search_spans_clients_and_staff() {
        let form = IncidentForm {
            person_search: "mi".to_string(),
            ..IncidentForm::default()
        };
        let clients = mock::clients();
        let staff = mock::staff();
        let matches = form.person_matches(&clients, &staff);
        assert!(matches.contains(&"Jennifer Mills"));
        assert!(matches.contains(&"Michael Chen"));
        assert!(!matches.contains(&"Dorothy Williams"));
    }

    #[test]
    fn empty_search_offers_nobody() {
        let form = IncidentForm::default();
        assert!(form
            .person_matches(&mock::clients(), &mock::staff())
            .is_empty());
    }

    #[test]
    fn new_reports_open_under_the_current_user() {
        let form = IncidentForm {
            title: "Client Fall".to_string(),
            description: "Slipped on the doorstep, no injury.".to_string(),
            person: Some("Margaret Thompson".to_string()),
            location: "North Sheffield".to_string(),
            severity: Some(Severity::Medium),
            ..IncidentForm::default()
        };
        let incident = form.build(1_724_572_800_789, "2025-08-25T10:00:00").unwrap();
        assert_eq!(incident.id, "inc-1724572800789");
        assert_eq!(incident.status, IncidentStatus::Open);
        assert_eq!(incident.reported_by, "Current User");
        assert!(incident.is_current());
    }

    #[test]
    fn incomplete_reports_are_rejected() {
        let form = IncidentForm::default();
        assert_eq!(
            form.build(0, "2025-08-25T10:00:00"),
            Err(FormError::Missing("incident type"))
        );
    }
}
