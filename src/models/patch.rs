use serde::{Deserialize, Serialize};

/// A named geographic service area to which clients and staff are assigned.
///
/// The counters are seed data from the planning system, not derived from the
/// client and staff lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    pub id: String,
    pub name: String,
    pub planner: String,
    pub district: String,
    pub client_count: u32,
    pub staff_count: u32,
    pub available_staff: u32,
    pub pending_clients: u32,
}

impl Patch {
    /// Clients per staff member; the board flags patches running hot.
    pub fn client_staff_ratio(&self) -> f32 {
        if self.staff_count == 0 {
            return 0.0;
        }
        self.client_count as f32 / self.staff_count as f32
    }

    pub fn availability_percent(&self) -> f32 {
        if self.staff_count == 0 {
            return 0.0;
        }
        self.available_staff as f32 / self.staff_count as f32 * 100.0
    }
}
