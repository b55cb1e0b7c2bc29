//! Per-screen view models.
//!
//! Each screen owns a small struct holding its filter and cursor state and
//! exposing the derived rows the renderer draws. View models read the store
//! but never mutate it; all writes go through the store's dispatch.

pub mod clients;
pub mod dashboard;
pub mod emar;
pub mod incidents;
pub mod patches;
pub mod reports;
pub mod rota;
pub mod staff;
pub mod timesheets;

pub use clients::{ClientDetailTab, ClientsView};
pub use dashboard::DashboardView;
pub use emar::{EmarMode, EmarView};
pub use incidents::{IncidentTab, IncidentsView};
pub use patches::PatchesView;
pub use reports::{ReportKind, ReportsView};
pub use rota::{RotaMode, RotaView};
pub use staff::{StaffDetailTab, StaffView};
pub use timesheets::TimesheetsView;
