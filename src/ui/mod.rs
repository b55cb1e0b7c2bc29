//! Terminal shell: one [`App`] owning the store and the per-screen view
//! models, a blocking event loop, and the key router.
//!
//! Keys mutate view-model state directly (cursors, filters, form fields);
//! anything that changes shared records goes through the store's dispatch.

use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::info;

use crate::emar::{parse_dose_times, DoseKey, DoseOutcome, RefusalReason};
use crate::filters::toggle_district;
use crate::models::{
    IncidentStatus, ScheduleType, ServiceLevel, Severity, StaffRole, Transport, DISTRICTS,
};
use crate::store::{Action, AppState, View};
use crate::views::{
    ClientsView, DashboardView, EmarMode, EmarView, IncidentTab, IncidentsView, PatchesView,
    ReportKind, ReportsView, RotaView, StaffView, TimesheetsView,
};
use crate::wizard::{incident, ClientForm, IncidentForm, SchedulePreset, StaffForm};

pub mod render;

/// Where typed characters go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
    /// Editing the note attached to the next dose outcome.
    Notes,
    /// District multi-select: digits toggle districts on the active screen.
    Districts,
}

/// Which text filter the search mode is feeding. Only the incidents screen
/// has more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Main,
    Location,
    Reporter,
    DateFrom,
    DateTo,
}

pub struct App {
    pub state: AppState,
    pub dashboard: DashboardView,
    pub clients: ClientsView,
    pub staff: StaffView,
    pub rota: RotaView,
    pub emar: EmarView,
    pub incidents: IncidentsView,
    pub patches: PatchesView,
    pub reports: ReportsView,
    pub timesheets: TimesheetsView,
    pub client_form: ClientForm,
    pub staff_form: StaffForm,
    pub incident_form: IncidentForm,
    pub form_field: usize,
    pub input_mode: InputMode,
    pub search_field: SearchField,
    pub status_line: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let today = Local::now().format("%Y-%m-%d").to_string();
        let mut app = Self {
            state,
            dashboard: DashboardView::default(),
            clients: ClientsView::default(),
            staff: StaffView::default(),
            rota: RotaView::default(),
            emar: EmarView::default(),
            incidents: IncidentsView::default(),
            patches: PatchesView::default(),
            reports: ReportsView::default(),
            timesheets: TimesheetsView::default(),
            client_form: ClientForm::default(),
            staff_form: StaffForm::default(),
            incident_form: IncidentForm::default(),
            form_field: 0,
            input_mode: InputMode::default(),
            search_field: SearchField::default(),
            status_line: None,
            should_quit: false,
        };
        app.rota.date = today.clone();
        app.emar.date = today;
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.status_line = None;
        match self.input_mode {
            InputMode::Search => return self.handle_search_key(key),
            InputMode::Notes => return self.handle_notes_key(key),
            InputMode::Districts => return self.handle_district_key(key),
            InputMode::Normal => {}
        }
        if self.state.current_view == View::Emar && self.emar.reason_picker.is_some() {
            return self.handle_reason_key(key);
        }
        match self.state.current_view {
            View::AddClient => self.handle_client_form_key(key),
            View::AddStaff => self.handle_staff_form_key(key),
            View::AddIncident => self.handle_incident_form_key(key),
            _ => self.handle_browse_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.cycle_view(1),
            KeyCode::BackTab => self.cycle_view(-1),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(view) = View::NAV.get(index) {
                    self.state.dispatch(Action::SetView(*view));
                }
            }
            KeyCode::Char('0') => self.state.dispatch(Action::SetView(View::Settings)),
            KeyCode::Char('/') => {
                if self.searchable() {
                    self.search_field = SearchField::Main;
                    self.input_mode = InputMode::Search;
                }
            }
            KeyCode::Char('d') => {
                if self.active_districts().is_some() {
                    self.input_mode = InputMode::Districts;
                }
            }
            KeyCode::Esc => self.clear_selection(),
            _ => self.handle_view_key(key),
        }
    }

    fn cycle_view(&mut self, step: isize) {
        let nav = View::NAV;
        let current = nav
            .iter()
            .position(|v| *v == self.state.current_view)
            .unwrap_or(0);
        let next = (current as isize + step).rem_euclid(nav.len() as isize) as usize;
        self.state.dispatch(Action::SetView(nav[next]));
    }

    fn searchable(&self) -> bool {
        matches!(
            self.state.current_view,
            View::Clients | View::Staff | View::Emar | View::Incidents | View::Timesheets
        )
    }

    fn active_search(&mut self) -> Option<&mut String> {
        match self.state.current_view {
            View::Clients => Some(&mut self.clients.search),
            View::Staff => Some(&mut self.staff.search),
            View::Emar => Some(&mut self.emar.search),
            View::Incidents => Some(match self.search_field {
                SearchField::Main => &mut self.incidents.search,
                SearchField::Location => &mut self.incidents.location,
                SearchField::Reporter => &mut self.incidents.reported_by,
                SearchField::DateFrom => &mut self.incidents.date_from,
                SearchField::DateTo => &mut self.incidents.date_to,
            }),
            View::Timesheets => Some(&mut self.timesheets.search),
            _ => None,
        }
    }

    /// The district multi-select the `d` mode edits, per screen.
    fn active_districts(&mut self) -> Option<&mut Vec<String>> {
        match self.state.current_view {
            View::Clients => Some(&mut self.clients.districts),
            View::Staff => Some(&mut self.staff.districts),
            View::Emar => Some(&mut self.emar.districts),
            View::Patches => Some(&mut self.patches.districts),
            _ => None,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                if let Some(search) = self.active_search() {
                    search.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(search) = self.active_search() {
                    search.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_notes_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                self.emar.notes.pop();
            }
            KeyCode::Char(c) => self.emar.notes.push(c),
            _ => {}
        }
    }

    fn handle_district_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('d') => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Char(c @ '1'..='8') => {
                let district = DISTRICTS[c as usize - '1' as usize];
                if let Some(selected) = self.active_districts() {
                    toggle_district(selected, district);
                }
            }
            _ => {}
        }
    }

    fn clear_selection(&mut self) {
        match self.state.current_view {
            View::Clients => {
                self.clients.search.clear();
                self.state.dispatch(Action::SelectClient(None));
            }
            View::Staff => {
                self.staff.search.clear();
                self.state.dispatch(Action::SelectStaff(None));
            }
            View::Emar => {
                self.emar.search.clear();
                self.emar.select_client(None);
            }
            View::Patches => self.state.dispatch(Action::SelectPatch(None)),
            View::Incidents => self.incidents.search.clear(),
            View::Timesheets => self.timesheets.search.clear(),
            _ => {}
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match self.state.current_view {
            View::Dashboard => {
                let len = self.dashboard.activity_feed(&self.state).len();
                move_cursor(&mut self.dashboard.activity_cursor, len, key.code);
            }
            View::Clients => self.handle_clients_key(key),
            View::Staff => self.handle_staff_key(key),
            View::Rota => self.handle_rota_key(key),
            View::Emar => self.handle_emar_key(key),
            View::Incidents => self.handle_incidents_key(key),
            View::Patches => {
                let len = self.patches.filtered(&self.state.patches).len();
                move_cursor(&mut self.patches.cursor, len, key.code);
            }
            View::Reports => {
                if let KeyCode::Left | KeyCode::Right = key.code {
                    self.reports.kind = cycle(
                        &ReportKind::ALL,
                        self.reports.kind,
                        key.code == KeyCode::Right,
                    );
                }
            }
            View::Timesheets => {
                let len = self.timesheets.rows(&self.state).len();
                move_cursor(&mut self.timesheets.cursor, len, key.code);
            }
            _ => {}
        }
    }

    fn handle_clients_key(&mut self, key: KeyEvent) {
        let rows = self.clients.filtered(&self.state.clients);
        match key.code {
            KeyCode::Char('a') => {
                self.client_form = ClientForm::default();
                self.form_field = 0;
                self.state.dispatch(Action::SetView(View::AddClient));
            }
            KeyCode::Enter => {
                if let Some(client) = rows.get(self.clients.cursor) {
                    let id = client.id.clone();
                    self.state.dispatch(Action::SelectClient(Some(id)));
                }
            }
            KeyCode::Left | KeyCode::Right => {
                self.clients.detail_tab = cycle(
                    &crate::views::ClientDetailTab::ALL,
                    self.clients.detail_tab,
                    key.code == KeyCode::Right,
                );
            }
            _ => move_cursor(&mut self.clients.cursor, rows.len(), key.code),
        }
    }

    fn handle_staff_key(&mut self, key: KeyEvent) {
        let rows = self.staff.filtered(&self.state.staff);
        match key.code {
            KeyCode::Char('a') => {
                self.staff_form = StaffForm::default();
                self.form_field = 0;
                self.state.dispatch(Action::SetView(View::AddStaff));
            }
            KeyCode::Enter => {
                if let Some(member) = rows.get(self.staff.cursor) {
                    let id = member.id.clone();
                    self.state.dispatch(Action::SelectStaff(Some(id)));
                }
            }
            KeyCode::Left | KeyCode::Right => {
                self.staff.detail_tab = cycle(
                    &crate::views::StaffDetailTab::ALL,
                    self.staff.detail_tab,
                    key.code == KeyCode::Right,
                );
            }
            _ => move_cursor(&mut self.staff.cursor, rows.len(), key.code),
        }
    }

    fn handle_rota_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('m') => self.rota.toggle_mode(),
            KeyCode::Char('[') => {
                if let Some(date) = shift_date(&self.rota.date, -1) {
                    self.rota.date = date;
                }
            }
            KeyCode::Char(']') => {
                if let Some(date) = shift_date(&self.rota.date, 1) {
                    self.rota.date = date;
                }
            }
            _ => {
                let len = self.rota.rows(&self.state).len();
                move_cursor(&mut self.rota.cursor, len, key.code);
            }
        }
    }

    fn handle_emar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('h') => {
                self.emar.mode = match self.emar.mode {
                    EmarMode::Daily => EmarMode::History,
                    EmarMode::History => EmarMode::Daily,
                };
            }
            KeyCode::Enter => {
                let picker = self.emar.clients(&self.state);
                if let Some(client) = picker.get(self.emar.medication_cursor) {
                    let id = client.id.clone();
                    self.emar.select_client(Some(id));
                }
            }
            KeyCode::Left => self.emar.dose_cursor = self.emar.dose_cursor.saturating_sub(1),
            KeyCode::Right => {
                let doses = self.dose_count();
                if self.emar.dose_cursor + 1 < doses {
                    self.emar.dose_cursor += 1;
                }
            }
            KeyCode::Char('a') => self.record_dose(DoseOutcome::Administered),
            KeyCode::Char('s') => self.record_dose(DoseOutcome::Skipped),
            KeyCode::Char('r') => {
                if self.selected_emar_client().is_some() {
                    self.emar.reason_picker = Some(0);
                }
            }
            KeyCode::Char('n') => {
                if self.selected_emar_client().is_some() {
                    self.input_mode = InputMode::Notes;
                }
            }
            KeyCode::Char('[') => {
                if let Some(date) = shift_date(&self.emar.date, -1) {
                    self.emar.select_date(date);
                }
            }
            KeyCode::Char(']') => {
                if let Some(date) = shift_date(&self.emar.date, 1) {
                    self.emar.select_date(date);
                }
            }
            _ => {
                let len = if self.emar.selected_client.is_none() {
                    self.emar.clients(&self.state).len()
                } else {
                    self.selected_emar_client()
                        .map(|c| c.medications.len())
                        .unwrap_or(0)
                };
                move_cursor(&mut self.emar.medication_cursor, len, key.code);
                self.emar.dose_cursor = 0;
            }
        }
    }

    fn handle_reason_key(&mut self, key: KeyEvent) {
        let Some(index) = self.emar.reason_picker else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.emar.reason_picker = None,
            KeyCode::Up => self.emar.reason_picker = Some(index.saturating_sub(1)),
            KeyCode::Down => {
                self.emar.reason_picker = Some((index + 1).min(RefusalReason::ALL.len() - 1));
            }
            KeyCode::Enter => {
                self.record_dose(DoseOutcome::Refused(RefusalReason::ALL[index]));
                self.emar.reason_picker = None;
            }
            _ => {}
        }
    }

    fn selected_emar_client(&self) -> Option<&crate::models::Client> {
        self.emar
            .selected_client
            .as_deref()
            .and_then(|id| self.state.client(id))
    }

    fn dose_count(&self) -> usize {
        self.selected_emar_client()
            .and_then(|c| c.medications.get(self.emar.medication_cursor))
            .map(|m| parse_dose_times(m).len())
            .unwrap_or(0)
    }

    fn record_dose(&mut self, outcome: DoseOutcome) {
        let Some(client) = self.selected_emar_client() else {
            return;
        };
        let Some(medication) = client.medications.get(self.emar.medication_cursor) else {
            return;
        };
        let key = DoseKey::new(medication.id.clone(), self.emar.dose_cursor);
        let notes = (!self.emar.notes.trim().is_empty()).then(|| self.emar.notes.trim().to_string());
        self.emar.chart.record(key, outcome, notes);
        self.emar.notes.clear();
    }

    fn handle_incidents_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('n') => {
                self.incident_form = IncidentForm::default();
                self.form_field = 0;
                self.state.dispatch(Action::SetView(View::AddIncident));
            }
            KeyCode::Char('t') => {
                self.incidents.tab = match self.incidents.tab {
                    IncidentTab::Current => IncidentTab::History,
                    IncidentTab::History => IncidentTab::Current,
                };
                self.incidents.cursor = 0;
            }
            KeyCode::Char('v') => {
                self.incidents.severity = cycle_option(&Severity::ALL, self.incidents.severity);
                self.incidents.cursor = 0;
            }
            KeyCode::Char('s') => {
                self.incidents.status = cycle_option(&IncidentStatus::ALL, self.incidents.status);
                self.incidents.cursor = 0;
            }
            KeyCode::Char('l') => self.incident_search(SearchField::Location),
            KeyCode::Char('b') => self.incident_search(SearchField::Reporter),
            KeyCode::Char('f') => self.incident_search(SearchField::DateFrom),
            KeyCode::Char('u') => self.incident_search(SearchField::DateTo),
            _ => {
                let len = self.incidents.filtered(&self.state.incidents).len();
                move_cursor(&mut self.incidents.cursor, len, key.code);
            }
        }
    }

    fn incident_search(&mut self, field: SearchField) {
        self.search_field = field;
        self.input_mode = InputMode::Search;
    }

    // Wizard keys: plain characters edit the focused field, Up/Down move
    // focus, Enter submits, Esc abandons the form.

    const CLIENT_FIELDS: usize = 6;

    fn handle_client_form_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('l') => {
                    let next = match self.client_form.service_level {
                        None => ServiceLevel::One,
                        Some(level) => cycle(&ServiceLevel::ALL, level, true),
                    };
                    self.client_form.set_service_level(next);
                }
                KeyCode::Char('p') => {
                    let preset = match self.client_form.schedule_days.len() {
                        0 => SchedulePreset::Weekdays,
                        5 => SchedulePreset::EveryDay,
                        _ => SchedulePreset::Weekends,
                    };
                    self.client_form.apply_preset(preset);
                }
                KeyCode::Char('t') => {
                    let next = match self.client_form.schedule_type {
                        None | Some(ScheduleType::FullDay) => ScheduleType::Am,
                        Some(ScheduleType::Am) => ScheduleType::Pm,
                        Some(ScheduleType::Pm) => ScheduleType::FullDay,
                    };
                    self.client_form.schedule_type = Some(next);
                }
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Esc => self.state.dispatch(Action::SetView(View::Clients)),
            KeyCode::Up => self.form_field = self.form_field.saturating_sub(1),
            KeyCode::Down => {
                self.form_field = (self.form_field + 1).min(Self::CLIENT_FIELDS - 1)
            }
            KeyCode::Enter => self.submit_client_form(),
            KeyCode::Backspace => {
                self.client_field_mut().pop();
            }
            KeyCode::Char(c) => self.client_field_mut().push(c),
            _ => {}
        }
    }

    fn client_field_mut(&mut self) -> &mut String {
        let form = &mut self.client_form;
        match self.form_field {
            0 => &mut form.name,
            1 => &mut form.age,
            2 => &mut form.address,
            3 => &mut form.patch,
            4 => &mut form.start_date,
            _ => &mut form.end_date,
        }
    }

    fn submit_client_form(&mut self) {
        match self.client_form.build(Local::now().timestamp_millis()) {
            Ok(client) => {
                info!(client = %client.name, "client intake completed");
                self.status_line = Some(format!("Added client {}", client.name));
                self.state.dispatch(Action::AddClient(client));
                self.state.dispatch(Action::SetView(View::Clients));
            }
            Err(err) => self.status_line = Some(err.to_string()),
        }
    }

    const STAFF_FIELDS: usize = 6;

    fn handle_staff_form_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('t') => {
                    let next = match self.staff_form.transport {
                        None | Some(Transport::Walking) => Transport::Car,
                        Some(Transport::Car) => Transport::Public,
                        Some(Transport::Public) => Transport::Bicycle,
                        Some(Transport::Bicycle) => Transport::Walking,
                    };
                    self.staff_form.transport = Some(next);
                }
                KeyCode::Char('r') => {
                    let next = match self.staff_form.role {
                        None | Some(StaffRole::Assessor) => StaffRole::Carer,
                        Some(StaffRole::Carer) => StaffRole::PlannerAdmin,
                        Some(StaffRole::PlannerAdmin) => StaffRole::Assessor,
                    };
                    self.staff_form.role = Some(next);
                }
                KeyCode::Char('a') => toggle_weekday_shifts(&mut self.staff_form, true),
                KeyCode::Char('e') => toggle_weekday_shifts(&mut self.staff_form, false),
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Esc => self.state.dispatch(Action::SetView(View::Staff)),
            KeyCode::Up => self.form_field = self.form_field.saturating_sub(1),
            KeyCode::Down => self.form_field = (self.form_field + 1).min(Self::STAFF_FIELDS - 1),
            KeyCode::Enter => self.submit_staff_form(),
            KeyCode::Backspace => {
                self.staff_field_mut().pop();
            }
            KeyCode::Char(c) => self.staff_field_mut().push(c),
            _ => {}
        }
    }

    fn staff_field_mut(&mut self) -> &mut String {
        let form = &mut self.staff_form;
        match self.form_field {
            0 => &mut form.name,
            1 => &mut form.phone,
            2 => &mut form.email,
            3 => &mut form.address,
            4 => &mut form.postcode,
            _ => &mut form.join_date,
        }
    }

    fn submit_staff_form(&mut self) {
        match self.staff_form.build(Local::now().timestamp_millis()) {
            Ok(member) => {
                info!(staff = %member.name, reference = %member.staff_ref_number, "staff intake completed");
                self.status_line = Some(format!(
                    "Added {} ({})",
                    member.name, member.staff_ref_number
                ));
                self.state.dispatch(Action::AddStaff(member));
                self.state.dispatch(Action::SetView(View::Staff));
            }
            Err(err) => self.status_line = Some(err.to_string()),
        }
    }

    const INCIDENT_FIELDS: usize = 5;

    fn handle_incident_form_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('t') => {
                    let current = incident::INCIDENT_TYPES
                        .iter()
                        .position(|t| *t == self.incident_form.title)
                        .unwrap_or(incident::INCIDENT_TYPES.len() - 1);
                    let next = (current + 1) % incident::INCIDENT_TYPES.len();
                    self.incident_form.title = incident::INCIDENT_TYPES[next].to_string();
                }
                KeyCode::Char('v') => {
                    let next = match self.incident_form.severity {
                        None => Severity::Low,
                        Some(severity) => cycle(&Severity::ALL, severity, true),
                    };
                    self.incident_form.severity = Some(next);
                }
                KeyCode::Char('n') => {
                    let pick = self
                        .incident_form
                        .person_matches(&self.state.clients, &self.state.staff)
                        .first()
                        .map(|name| name.to_string());
                    self.incident_form.person = pick;
                }
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Esc => self.state.dispatch(Action::SetView(View::Incidents)),
            KeyCode::Up => self.form_field = self.form_field.saturating_sub(1),
            KeyCode::Down => {
                self.form_field = (self.form_field + 1).min(Self::INCIDENT_FIELDS - 1)
            }
            KeyCode::Enter => self.submit_incident_form(),
            KeyCode::Backspace => {
                self.incident_field_mut().pop();
            }
            KeyCode::Char(c) => self.incident_field_mut().push(c),
            _ => {}
        }
    }

    fn incident_field_mut(&mut self) -> &mut String {
        let form = &mut self.incident_form;
        match self.form_field {
            0 => &mut form.description,
            1 => &mut form.person_search,
            2 => &mut form.location,
            3 => &mut form.immediate_actions,
            _ => &mut form.witnesses,
        }
    }

    fn submit_incident_form(&mut self) {
        let reported_at = Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        match self
            .incident_form
            .build(Local::now().timestamp_millis(), &reported_at)
        {
            Ok(report) => {
                info!(incident = %report.title, severity = %report.severity, "incident reported");
                self.status_line = Some(format!("Reported: {}", report.title));
                self.state.dispatch(Action::AddIncident(report));
                self.state.dispatch(Action::SetView(View::Incidents));
            }
            Err(err) => self.status_line = Some(err.to_string()),
        }
    }
}

fn move_cursor(cursor: &mut usize, len: usize, code: KeyCode) {
    match code {
        KeyCode::Up => *cursor = cursor.saturating_sub(1),
        KeyCode::Down => {
            if *cursor + 1 < len {
                *cursor += 1;
            }
        }
        _ => {}
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len() as isize;
    let index = all.iter().position(|v| *v == current).unwrap_or(0) as isize;
    let step = if forward { 1 } else { -1 };
    all[((index + step).rem_euclid(len)) as usize]
}

/// Cycle an optional select through None -> each value -> None again.
fn cycle_option<T: Copy + PartialEq>(all: &[T], current: Option<T>) -> Option<T> {
    match current {
        None => all.first().copied(),
        Some(value) => {
            let index = all.iter().position(|v| *v == value).unwrap_or(0);
            all.get(index + 1).copied()
        }
    }
}

fn shift_date(date: &str, days: i64) -> Option<String> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some(
        (parsed + chrono::Duration::days(days))
            .format("%Y-%m-%d")
            .to_string(),
    )
}

fn toggle_weekday_shifts(form: &mut StaffForm, morning: bool) {
    for day in form.work_schedule.days_mut().into_iter().take(5) {
        if morning {
            day.am = !day.am;
        } else {
            day.pm = !day.pm;
        }
    }
}

/// Run the shell until the user quits. Sets up the alternate screen, runs
/// the draw/poll loop, and restores the terminal on the way out.
pub fn run(state: AppState, tick_rate: Duration) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = event_loop(&mut terminal, App::new(state), tick_rate);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| render::draw(frame, &app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
        if app.should_quit {
            info!("shutting down");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn tab_cycles_through_the_nav_bar() {
        let mut app = App::new(mock::seed());
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.state.current_view, View::Rota);
        app.handle_key(key(KeyCode::BackTab));
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.state.current_view, View::Settings);
    }

    #[test]
    fn search_mode_captures_characters() {
        let mut app = App::new(mock::seed());
        app.state.dispatch(Action::SetView(View::Clients));
        app.handle_key(key(KeyCode::Char('/')));
        for c in "oak".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.clients.search, "oak");
        assert_eq!(app.clients.filtered(&app.state.clients).len(), 1);
    }

    #[test]
    fn district_mode_toggles_the_active_screen_filter() {
        let mut app = App::new(mock::seed());
        app.state.dispatch(Action::SetView(View::Clients));
        app.handle_key(key(KeyCode::Char('d')));
        assert_eq!(app.input_mode, InputMode::Districts);

        app.handle_key(key(KeyCode::Char('2'))); // North
        assert_eq!(app.clients.districts, vec!["North".to_string()]);
        assert_eq!(app.clients.filtered(&app.state.clients).len(), 1);

        app.handle_key(key(KeyCode::Char('2')));
        assert!(app.clients.districts.is_empty());
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Normal);

        // The same mode edits the patches screen's own filter.
        app.state.dispatch(Action::SetView(View::Patches));
        app.handle_key(key(KeyCode::Char('d')));
        app.handle_key(key(KeyCode::Char('1'))); // Central
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.patches.districts, vec!["Central".to_string()]);
    }

    #[test]
    fn client_wizard_submits_through_the_store() {
        let mut app = App::new(mock::seed());
        let before = app.state.clients.len();
        app.state.dispatch(Action::SetView(View::Clients));
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.state.current_view, View::AddClient);

        for c in "Jane Doe".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Down));
        for c in "82".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(ctrl('l'));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.state.current_view, View::Clients);
        assert_eq!(app.state.clients.len(), before + 1);
        let added = app.state.clients.last().unwrap();
        assert_eq!(added.name, "Jane Doe");
        assert_eq!(
            added.care_needs,
            crate::wizard::client::care_needs_for(ServiceLevel::One)
        );
    }

    #[test]
    fn invalid_wizard_input_stays_on_the_form() {
        let mut app = App::new(mock::seed());
        app.state.dispatch(Action::SetView(View::AddClient));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.current_view, View::AddClient);
        assert!(app.status_line.as_deref().unwrap().contains("name"));
    }

    #[test]
    fn staff_wizard_toggles_weekday_shifts_together() {
        let mut app = App::new(mock::seed());
        app.state.dispatch(Action::SetView(View::AddStaff));
        app.handle_key(ctrl('a'));
        let schedule = &app.staff_form.work_schedule;
        assert!(schedule.monday.am && schedule.friday.am);
        assert!(!schedule.saturday.am && !schedule.sunday.am);
        assert!(!schedule.monday.pm);

        app.handle_key(ctrl('a'));
        assert!(!app.staff_form.work_schedule.monday.am);
    }

    #[test]
    fn emar_records_against_the_selected_dose() {
        let mut app = App::new(mock::seed());
        app.state.dispatch(Action::SetView(View::Emar));
        app.handle_key(key(KeyCode::Enter)); // pick the first client
        assert_eq!(app.emar.selected_client.as_deref(), Some("client-1"));

        app.handle_key(key(KeyCode::Right)); // second dose of med-1
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(
            app.emar.chart.status(&DoseKey::new("med-1", 1)),
            crate::emar::DoseStatus::Administered
        );
        assert_eq!(
            app.emar.chart.status(&DoseKey::new("med-1", 0)),
            crate::emar::DoseStatus::Pending
        );
    }

    #[test]
    fn refusal_goes_through_the_reason_picker() {
        let mut app = App::new(mock::seed());
        app.state.dispatch(Action::SetView(View::Emar));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.emar.selected_client.as_deref(), Some("client-1"));

        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.emar.reason_picker, Some(0));
        app.handle_key(key(KeyCode::Char('q'))); // swallowed by the picker
        assert!(!app.should_quit);

        app.handle_key(key(KeyCode::Down)); // Client was asleep
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.emar.reason_picker, None);
        let record = app
            .emar
            .chart
            .record_for(&DoseKey::new("med-1", 0))
            .unwrap();
        assert_eq!(record.status, crate::emar::DoseStatus::Refused);
        assert_eq!(record.reason.as_deref(), Some("Client was asleep"));

        // Esc backs out without recording.
        app.handle_key(key(KeyCode::Char('r')));
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.emar.reason_picker, None);
        assert!(app.emar.selected_client.is_some());
    }

    #[test]
    fn dose_notes_are_typed_then_attached_to_the_next_outcome() {
        let mut app = App::new(mock::seed());
        app.state.dispatch(Action::SetView(View::Emar));
        app.handle_key(key(KeyCode::Enter));

        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.input_mode, InputMode::Notes);
        for c in "taken with tea".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.emar.notes, "taken with tea");

        app.handle_key(key(KeyCode::Char('a')));
        let record = app
            .emar
            .chart
            .record_for(&DoseKey::new("med-1", 0))
            .unwrap();
        assert_eq!(record.notes.as_deref(), Some("taken with tea"));
        assert!(app.emar.notes.is_empty());
    }

    #[test]
    fn bracket_keys_change_the_chart_date_and_reset_it() {
        let mut app = App::new(mock::seed());
        app.state.dispatch(Action::SetView(View::Emar));
        app.emar.date = "2025-08-25".to_string();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(
            app.emar.chart.status(&DoseKey::new("med-1", 0)),
            crate::emar::DoseStatus::Administered
        );

        app.handle_key(key(KeyCode::Char(']')));
        assert_eq!(app.emar.date, "2025-08-26");
        assert_eq!(
            app.emar.chart.status(&DoseKey::new("med-1", 0)),
            crate::emar::DoseStatus::Pending
        );

        app.handle_key(key(KeyCode::Char('[')));
        assert_eq!(app.emar.date, "2025-08-25");
    }

    #[test]
    fn incident_filters_have_key_bindings() {
        let mut app = App::new(mock::seed());
        app.state.dispatch(Action::SetView(View::Incidents));

        app.handle_key(key(KeyCode::Char('v')));
        assert_eq!(app.incidents.severity, Some(Severity::Low));
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Char('v')));
        }
        assert_eq!(app.incidents.severity, Some(Severity::Critical));
        app.handle_key(key(KeyCode::Char('v')));
        assert_eq!(app.incidents.severity, None);

        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.incidents.status, Some(IncidentStatus::Open));

        app.handle_key(key(KeyCode::Char('b')));
        for c in "chen".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.incidents.reported_by, "chen");

        app.handle_key(key(KeyCode::Char('f')));
        for c in "2025-08-21".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.incidents.date_from, "2025-08-21");
    }

    #[test]
    fn incident_form_picks_a_person_from_the_search() {
        let mut app = App::new(mock::seed());
        app.state.dispatch(Action::SetView(View::Incidents));
        app.handle_key(key(KeyCode::Char('n')));
        app.handle_key(ctrl('t')); // first incident type
        app.handle_key(key(KeyCode::Down)); // focus the person search
        for c in "margaret".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(ctrl('n'));
        assert_eq!(
            app.incident_form.person.as_deref(),
            Some("Margaret Thompson")
        );

        app.handle_key(key(KeyCode::Up)); // back to the description
        for c in "Fall at home".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        let before = app.state.incidents.len();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.incidents.len(), before + 1);
        assert_eq!(app.state.current_view, View::Incidents);
    }
}
