//! Single reducer-driven application store.
//!
//! All shared state is owned by [`AppState`] and mutated only through
//! [`AppState::dispatch`]. Dispatch is synchronous and runs inside the event
//! handler, so writes are serialized by construction; no locking is needed.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::emar::EmarHistoryEntry;
use crate::models::{
    ActivityLogEntry, Client, DashboardMetrics, Incident, Patch, Staff, TimesheetEntry, Visit,
};

/// Closed set of screens. The renderer and the key router both match on this
/// exhaustively, so adding a view is a compile-time checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Rota,
    Clients,
    AddClient,
    Staff,
    AddStaff,
    Emar,
    Timesheets,
    Patches,
    Reports,
    Incidents,
    AddIncident,
    Settings,
}

impl View {
    /// Screens reachable from the navigation bar, in display order. The
    /// wizard views are reached from their parent screens instead.
    pub const NAV: [View; 10] = [
        View::Dashboard,
        View::Rota,
        View::Clients,
        View::Staff,
        View::Emar,
        View::Timesheets,
        View::Patches,
        View::Reports,
        View::Incidents,
        View::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Rota => "Rota",
            View::Clients => "Clients",
            View::AddClient => "Add Client",
            View::Staff => "Staff",
            View::AddStaff => "Add Staff",
            View::Emar => "EMAR",
            View::Timesheets => "Timesheets",
            View::Patches => "Patches",
            View::Reports => "Reports",
            View::Incidents => "Incidents",
            View::AddIncident => "Report Incident",
            View::Settings => "Settings",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view: {0}")]
pub struct UnknownView(String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(View::Dashboard),
            "rota" => Ok(View::Rota),
            "clients" => Ok(View::Clients),
            "add-client" => Ok(View::AddClient),
            "staff" => Ok(View::Staff),
            "add-staff" => Ok(View::AddStaff),
            "emar" => Ok(View::Emar),
            "timesheet" | "timesheets" => Ok(View::Timesheets),
            "patches" => Ok(View::Patches),
            "reports" => Ok(View::Reports),
            "incidents" => Ok(View::Incidents),
            "add-incident" => Ok(View::AddIncident),
            "settings" => Ok(View::Settings),
            other => Err(UnknownView(other.to_string())),
        }
    }
}

/// Everything the reducer can be asked to do: replace a list, add one
/// record, update one record, or move the navigation selection.
#[derive(Debug, Clone)]
pub enum Action {
    SetClients(Vec<Client>),
    AddClient(Client),
    UpdateClient(Client),
    SetStaff(Vec<Staff>),
    AddStaff(Staff),
    UpdateStaff(Staff),
    AddIncident(Incident),
    SetView(View),
    SelectClient(Option<String>),
    SelectStaff(Option<String>),
    SelectPatch(Option<String>),
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub clients: Vec<Client>,
    pub staff: Vec<Staff>,
    pub incidents: Vec<Incident>,
    pub patches: Vec<Patch>,
    pub timesheets: Vec<TimesheetEntry>,
    pub visits: Vec<Visit>,
    pub activity_log: Vec<ActivityLogEntry>,
    pub emar_history: Vec<EmarHistoryEntry>,
    pub dashboard_metrics: DashboardMetrics,
    pub current_view: View,
    pub selected_client: Option<String>,
    pub selected_staff: Option<String>,
    pub selected_patch: Option<String>,
}

impl Default for View {
    fn default() -> Self {
        View::Dashboard
    }
}

impl AppState {
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "dispatch");
        match action {
            Action::SetClients(clients) => self.clients = clients,
            Action::AddClient(client) => self.clients.push(client),
            Action::UpdateClient(client) => {
                if let Some(existing) = self.clients.iter_mut().find(|c| c.id == client.id) {
                    *existing = client;
                }
            }
            Action::SetStaff(staff) => self.staff = staff,
            Action::AddStaff(member) => self.staff.push(member),
            Action::UpdateStaff(member) => {
                if let Some(existing) = self.staff.iter_mut().find(|s| s.id == member.id) {
                    *existing = member;
                }
            }
            Action::AddIncident(incident) => self.incidents.push(incident),
            Action::SetView(view) => self.current_view = view,
            Action::SelectClient(id) => self.selected_client = id,
            Action::SelectStaff(id) => self.selected_staff = id,
            Action::SelectPatch(id) => self.selected_patch = id,
        }
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn staff_member(&self, id: &str) -> Option<&Staff> {
        self.staff.iter().find(|s| s.id == id)
    }

    pub fn selected_client(&self) -> Option<&Client> {
        self.selected_client.as_deref().and_then(|id| self.client(id))
    }

    pub fn selected_staff(&self) -> Option<&Staff> {
        self.selected_staff
            .as_deref()
            .and_then(|id| self.staff_member(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use crate::models::ClientStatus;

    #[test]
    fn starts_on_the_dashboard() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Dashboard);
    }

    #[test]
    fn add_client_appends_to_the_list() {
        let mut state = mock::seed();
        let before = state.clients.len();
        let mut client = state.clients[0].clone();
        client.id = "client-999".to_string();
        state.dispatch(Action::AddClient(client));
        assert_eq!(state.clients.len(), before + 1);
    }

    #[test]
    fn update_client_replaces_by_id_only() {
        let mut state = mock::seed();
        let mut edited = state.clients[0].clone();
        edited.status = ClientStatus::Completed;
        let untouched = state.clients[1].clone();

        state.dispatch(Action::UpdateClient(edited.clone()));
        assert_eq!(state.clients[0], edited);
        assert_eq!(state.clients[1], untouched);
    }

    #[test]
    fn update_of_unknown_id_is_a_no_op() {
        let mut state = mock::seed();
        let mut ghost = state.clients[0].clone();
        ghost.id = "client-does-not-exist".to_string();
        let before = state.clients.clone();
        state.dispatch(Action::UpdateClient(ghost));
        assert_eq!(state.clients, before);
    }

    #[test]
    fn navigation_actions_update_the_selection() {
        let mut state = mock::seed();
        let id = state.clients[0].id.clone();
        state.dispatch(Action::SelectClient(Some(id.clone())));
        state.dispatch(Action::SetView(View::Emar));
        assert_eq!(state.current_view, View::Emar);
        assert_eq!(state.selected_client().unwrap().id, id);

        state.dispatch(Action::SelectClient(None));
        assert!(state.selected_client().is_none());
    }

    #[test]
    fn view_names_round_trip_for_navigation_targets() {
        assert_eq!("dashboard".parse::<View>().unwrap(), View::Dashboard);
        assert_eq!("timesheet".parse::<View>().unwrap(), View::Timesheets);
        assert!("lorem".parse::<View>().is_err());
    }
}
