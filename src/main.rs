//! Careboard
//!
//! Terminal dashboard for a home-care agency. All data is seeded in memory;
//! quitting discards everything.

use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use careboard::store::{Action, View};
use careboard::{config, mock, ui};

#[derive(Parser, Debug)]
#[command(name = "careboard")]
#[command(about = "Terminal dashboard for home-care agency administration")]
#[command(version)]
struct Args {
    /// Screen to open on, e.g. "emar" or "incidents"
    #[arg(long)]
    view: Option<String>,

    /// Refresh interval in milliseconds (overrides the config file)
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Log file path. The terminal is taken over by the UI, so logs never
    /// go to stdout.
    #[arg(long, default_value = "careboard.log")]
    log_file: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = File::create(&args.log_file)
        .with_context(|| format!("failed to create log file {}", args.log_file))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let config = config::load_config().context("failed to load configuration")?;
    info!(agency = %config.agency.name, "starting careboard");

    let mut state = mock::seed();
    let start_view = args
        .view
        .as_deref()
        .unwrap_or(&config.ui.default_view)
        .parse::<View>()
        .context("unknown start view")?;
    state.dispatch(Action::SetView(start_view));

    let tick = Duration::from_millis(args.tick_ms.unwrap_or(config.ui.tick_ms));
    ui::run(state, tick)
}
