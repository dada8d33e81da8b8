mod config;
mod controller;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use booking_core::{BookingFlow, FlowSettings, MatchCatalog};
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{
    config::{load_startup_config, CliOverrides},
    ui::BookingGuiApp,
};

#[derive(Parser, Debug)]
#[command(about = "Football match ticket booking")]
struct Args {
    /// Optional TOML file with startup settings.
    #[arg(long, default_value = "booking.toml")]
    config: PathBuf,
    #[arg(long)]
    assets_dir: Option<PathBuf>,
    /// Match catalog in TOML; the built-in fixtures are used when absent.
    #[arg(long)]
    catalog: Option<PathBuf>,
    #[arg(long)]
    clear_tickets_on_logout: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli = CliOverrides {
        assets_dir: args.assets_dir,
        catalog_path: args.catalog,
        clear_tickets_on_logout: args.clear_tickets_on_logout,
    };
    let startup = load_startup_config(&args.config, &cli, |name| std::env::var(name).ok())?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&startup.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog = match &startup.catalog_path {
        Some(path) => MatchCatalog::load(path)
            .with_context(|| format!("failed to load match catalog '{}'", path.display()))?,
        None => MatchCatalog::mock(),
    };
    let flow = BookingFlow::with_settings(
        catalog,
        FlowSettings {
            logout_policy: startup.logout_policy,
        },
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Aboor Tickets")
            .with_inner_size([420.0, 860.0])
            .with_min_inner_size([360.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Aboor Tickets",
        options,
        Box::new(move |cc| Ok(Box::new(BookingGuiApp::new(cc, flow, &startup)))),
    )
    .map_err(|err| anyhow::anyhow!("gui exited with error: {err}"))
}
