use crate::emar::DoseStatus;
use crate::models::{ClientStatus, IncidentStatus, ServiceLevel, Severity, StaffStatus};
use crate::store::AppState;

/// The report screen renders one table of label/count rows per report kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportKind {
    #[default]
    ClientSummary,
    StaffOverview,
    IncidentTrends,
    MedicationCompliance,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::ClientSummary,
        ReportKind::StaffOverview,
        ReportKind::IncidentTrends,
        ReportKind::MedicationCompliance,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::ClientSummary => "Client Summary",
            ReportKind::StaffOverview => "Staff Overview",
            ReportKind::IncidentTrends => "Incident Trends",
            ReportKind::MedicationCompliance => "Medication Compliance",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportsView {
    pub kind: ReportKind,
}

pub type ReportRow = (String, usize);

impl ReportsView {
    pub fn rows(&self, state: &AppState) -> Vec<ReportRow> {
        match self.kind {
            ReportKind::ClientSummary => client_summary(state),
            ReportKind::StaffOverview => staff_overview(state),
            ReportKind::IncidentTrends => incident_trends(state),
            ReportKind::MedicationCompliance => medication_compliance(state),
        }
    }
}

fn client_summary(state: &AppState) -> Vec<ReportRow> {
    let by_status = |status: ClientStatus| {
        state.clients.iter().filter(|c| c.status == status).count()
    };
    let by_level = |level: ServiceLevel| {
        state
            .clients
            .iter()
            .filter(|c| c.service_level == level)
            .count()
    };
    let mut rows = vec![
        ("Total clients".to_string(), state.clients.len()),
        ("Active".to_string(), by_status(ClientStatus::Active)),
        ("Pending".to_string(), by_status(ClientStatus::Pending)),
        ("Ending soon".to_string(), by_status(ClientStatus::EndingSoon)),
    ];
    for level in ServiceLevel::ALL {
        rows.push((level.label().to_string(), by_level(level)));
    }
    rows
}

fn staff_overview(state: &AppState) -> Vec<ReportRow> {
    let by_status = |status: StaffStatus| {
        state.staff.iter().filter(|s| s.status == status).count()
    };
    vec![
        ("Total staff".to_string(), state.staff.len()),
        ("Active".to_string(), by_status(StaffStatus::Active)),
        ("On leave".to_string(), by_status(StaffStatus::Leave)),
        ("In training".to_string(), by_status(StaffStatus::Training)),
        ("Off sick".to_string(), by_status(StaffStatus::Sick)),
    ]
}

fn incident_trends(state: &AppState) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = Severity::ALL
        .iter()
        .map(|severity| {
            let count = state
                .incidents
                .iter()
                .filter(|i| i.severity == *severity)
                .count();
            (format!("Severity: {severity}"), count)
        })
        .collect();
    let open = state
        .incidents
        .iter()
        .filter(|i| i.status == IncidentStatus::Open)
        .count();
    rows.push(("Awaiting triage".to_string(), open));
    rows
}

/// Tallies over the recorded administration history, not today's chart.
fn medication_compliance(state: &AppState) -> Vec<ReportRow> {
    let by_status = |status: DoseStatus| {
        state
            .emar_history
            .iter()
            .filter(|e| e.status == status)
            .count()
    };
    vec![
        ("Doses recorded".to_string(), state.emar_history.len()),
        ("Administered".to_string(), by_status(DoseStatus::Administered)),
        ("Skipped".to_string(), by_status(DoseStatus::Skipped)),
        ("Refused".to_string(), by_status(DoseStatus::Refused)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    fn value(rows: &[ReportRow], label: &str) -> usize {
        rows.iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| *v)
            .unwrap()
    }

    #[test]
    fn client_summary_counts_statuses_and_levels() {
        let state = mock::seed();
        let rows = ReportsView::default().rows(&state);
        assert_eq!(value(&rows, "Total clients"), 4);
        assert_eq!(value(&rows, "Active"), 2);
        assert_eq!(value(&rows, "Level 2 - Moderate"), 1);
    }

    #[test]
    fn compliance_report_reads_the_history() {
        let state = mock::seed();
        let view = ReportsView {
            kind: ReportKind::MedicationCompliance,
        };
        let rows = view.rows(&state);
        assert_eq!(value(&rows, "Doses recorded"), 4);
        assert_eq!(value(&rows, "Administered"), 2);
        assert_eq!(value(&rows, "Refused"), 1);
    }

    #[test]
    fn incident_trends_cover_every_severity() {
        let state = mock::seed();
        let view = ReportsView {
            kind: ReportKind::IncidentTrends,
        };
        let rows = view.rows(&state);
        let severities: usize = Severity::ALL
            .iter()
            .map(|s| value(&rows, &format!("Severity: {s}")))
            .sum();
        assert_eq!(severities, state.incidents.len());
    }
}
