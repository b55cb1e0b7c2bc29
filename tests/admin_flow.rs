//! End-to-end flows through the store, the wizards and the view models,
//! the way a planner would use them across one shift.

use chrono::NaiveTime;

use careboard::emar::{DoseKey, DoseOutcome, RefusalReason};
use careboard::mock;
use careboard::models::{ClientStatus, ServiceLevel};
use careboard::store::{Action, View};
use careboard::views::{ClientsView, EmarView, IncidentTab, IncidentsView};
use careboard::wizard::{ClientForm, IncidentForm, SchedulePreset, StaffForm};

#[test]
fn intake_to_directory_flow() {
    let mut state = mock::seed();

    let mut form = ClientForm {
        name: "Edith Palmer".to_string(),
        age: "88".to_string(),
        address: "S10 5QQ - 3 Ranmoor Court".to_string(),
        patch: "West".to_string(),
        start_date: "2025-09-08".to_string(),
        ..ClientForm::default()
    };
    form.set_service_level(ServiceLevel::Three);
    form.apply_preset(SchedulePreset::EveryDay);
    let client = form.build(1_757_000_000_000).unwrap();
    state.dispatch(Action::AddClient(client));

    // The new client shows up under the pending filter straight away.
    let view = ClientsView {
        status: Some(ClientStatus::Pending),
        search: "palmer".to_string(),
        ..ClientsView::default()
    };
    let rows = view.filtered(&state.clients);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].schedule.days.len(), 7);
}

#[test]
fn staff_intake_keeps_reference_numbers_distinct() {
    let mut state = mock::seed();
    let form = StaffForm {
        name: "Alex Morgan".to_string(),
        ..StaffForm::default()
    };
    let first = form.build(1_757_000_000_111).unwrap();
    let second = form.build(1_757_000_000_222).unwrap();
    assert_ne!(first.staff_ref_number, second.staff_ref_number);

    state.dispatch(Action::AddStaff(first));
    state.dispatch(Action::AddStaff(second));
    assert_eq!(state.staff.len(), 7);
}

#[test]
fn medication_round_flow() {
    let state = mock::seed();
    let mut emar = EmarView::default();
    emar.select_client(Some("client-1".to_string()));
    let client = state.client("client-1").unwrap();

    let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    // Margaret has three doses across two medications; at 09:00 the 08:00
    // ones are already due.
    let before = emar.summary(client, nine);
    assert_eq!(before.administered, 0);
    assert_eq!(before.missed, 1);
    assert_eq!(before.pending, 2);

    emar.chart.record_at(
        DoseKey::new("med-1", 0),
        DoseOutcome::Administered,
        None,
        nine,
    );
    emar.chart.record_at(
        DoseKey::new("med-2", 0),
        DoseOutcome::Refused(RefusalReason::ClientFeltUnwell),
        Some("GP to be informed".to_string()),
        nine,
    );

    let after = emar.summary(client, nine);
    assert_eq!(after.administered, 1);
    // The refused evening dose is not yet due, so it still counts as pending.
    assert_eq!(after.pending, 2);
    assert_eq!(after.missed, 0);

    let record = emar.chart.record_for(&DoseKey::new("med-2", 0)).unwrap();
    assert_eq!(record.reason.as_deref(), Some("Client felt unwell"));

    // Moving to another client starts a fresh chart.
    emar.select_client(Some("client-2".to_string()));
    let robert = state.client("client-2").unwrap();
    let fresh = emar.summary(robert, NaiveTime::from_hms_opt(7, 0, 0).unwrap());
    assert_eq!(fresh.administered, 0);
}

#[test]
fn incident_report_lands_on_the_current_tab() {
    let mut state = mock::seed();
    let mut form = IncidentForm {
        title: "No Access".to_string(),
        description: "No answer at the door on the lunchtime call.".to_string(),
        person_search: "davies".to_string(),
        location: "South Sheffield".to_string(),
        ..IncidentForm::default()
    };
    form.person = form
        .person_matches(&state.clients, &state.staff)
        .first()
        .map(|n| n.to_string());

    let report = form.build(1_757_000_000_333, "2025-08-25T12:30:00").unwrap();
    state.dispatch(Action::AddIncident(report));
    state.dispatch(Action::SetView(View::Incidents));

    let current = IncidentsView::default().filtered(&state.incidents);
    assert!(current
        .iter()
        .any(|i| i.id == "inc-1757000000333" && i.client_name == "Robert Davies"));

    let history = IncidentsView {
        tab: IncidentTab::History,
        ..IncidentsView::default()
    };
    assert!(history
        .filtered(&state.incidents)
        .iter()
        .all(|i| i.id != "inc-1757000000333"));
}
