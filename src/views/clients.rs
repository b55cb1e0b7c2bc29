use crate::filters::{matches_choice, matches_districts, matches_text};
use crate::models::{Client, ClientStatus, ServiceLevel};

/// Tabs inside the client detail modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientDetailTab {
    #[default]
    Overview,
    CarePlan,
    Medications,
    Contacts,
}

impl ClientDetailTab {
    pub const ALL: [ClientDetailTab; 4] = [
        ClientDetailTab::Overview,
        ClientDetailTab::CarePlan,
        ClientDetailTab::Medications,
        ClientDetailTab::Contacts,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ClientDetailTab::Overview => "Overview",
            ClientDetailTab::CarePlan => "Care Plan",
            ClientDetailTab::Medications => "Medications",
            ClientDetailTab::Contacts => "Contacts",
        }
    }
}

/// Client directory: search, selects and the district multi-select combine
/// with AND.
#[derive(Debug, Clone, Default)]
pub struct ClientsView {
    pub search: String,
    pub status: Option<ClientStatus>,
    pub service_level: Option<ServiceLevel>,
    pub districts: Vec<String>,
    pub cursor: usize,
    pub detail_tab: ClientDetailTab,
}

/// Header counters over the unfiltered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClientCounts {
    pub active: usize,
    pub pending: usize,
    pub ending_soon: usize,
}

impl ClientsView {
    pub fn filtered<'a>(&self, clients: &'a [Client]) -> Vec<&'a Client> {
        clients
            .iter()
            .filter(|client| {
                matches_text(&self.search, &[&client.name, &client.address])
                    && matches_choice(self.status.as_ref(), &client.status)
                    && matches_choice(self.service_level.as_ref(), &client.service_level)
                    && matches_districts(&self.districts, &client.patch)
            })
            .collect()
    }

    pub fn counts(&self, clients: &[Client]) -> ClientCounts {
        let mut counts = ClientCounts::default();
        for client in clients {
            match client.status {
                ClientStatus::Active => counts.active += 1,
                ClientStatus::Pending => counts.pending += 1,
                ClientStatus::EndingSoon => counts.ending_soon += 1,
                ClientStatus::Completed => {}
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::toggle_district;
    use crate::mock;

    #[test]
    fn search_covers_name_and_address() {
        let clients = mock::clients();
        let view = ClientsView {
            search: "elm road".to_string(),
            ..ClientsView::default()
        };
        let rows = view.filtered(&clients);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Robert Davies");
    }

    #[test]
    fn predicates_combine_with_and() {
        let clients = mock::clients();
        let mut view = ClientsView {
            status: Some(ClientStatus::Active),
            ..ClientsView::default()
        };
        assert_eq!(view.filtered(&clients).len(), 2);

        toggle_district(&mut view.districts, "Central");
        let rows = view.filtered(&clients);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Dorothy Williams");
    }

    #[test]
    fn counts_ignore_completed_clients() {
        let clients = mock::clients();
        let counts = ClientsView::default().counts(&clients);
        assert_eq!(
            counts,
            ClientCounts {
                active: 2,
                pending: 1,
                ending_soon: 1
            }
        );
    }
}
