//! Careboard core library
//!
//! Admin dashboard for a home-care agency: clients, staff, rota, medication
//! administration, incidents, timesheets and patch capacity, all served from
//! an in-memory store seeded with mock data.

pub mod emar;
pub mod filters;
pub mod mock;
pub mod models;
pub mod store;
pub mod ui;
pub mod views;
pub mod wizard;

/// Application configuration
pub mod config {
    use serde::Deserialize;

    #[derive(Debug, Clone, Deserialize)]
    pub struct Config {
        pub agency: AgencyConfig,
        pub ui: UiConfig,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct AgencyConfig {
        pub name: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct UiConfig {
        pub tick_ms: u64,
        pub default_view: String,
    }

    /// Load configuration from `config/default.toml`, an optional
    /// environment-specific file, and `CAREBOARD_*` variables, in that
    /// order of precedence.
    pub fn load_config() -> Result<Config, config::ConfigError> {
        let env = std::env::var("CAREBOARD_ENV").unwrap_or_else(|_| "development".into());

        config::Config::builder()
            .set_default("agency.name", "Careboard")?
            .set_default("ui.tick_ms", 250)?
            .set_default("ui.default_view", "dashboard")?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(config::Environment::with_prefix("CAREBOARD").separator("__"))
            .build()?
            .try_deserialize()
    }
}
