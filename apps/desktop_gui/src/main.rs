use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Result};
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use wizard_core::load_settings;

use crate::backend_bridge::commands::ExportCommand;
use crate::controller::events::UiEvent;
use crate::ui::SotlWizardApp;

const APP_TITLE: &str = "SoTL Snapshot";

#[derive(Parser, Debug)]
#[command(name = "sotl-desktop")]
struct Args {
    /// Settings file; defaults to the per-user config directory.
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();
    let settings = load_settings(args.settings.as_deref())?;
    tracing::info!(event = %settings.event_title, export_dir = %settings.export_dir.display(), "starting desktop wizard");

    let (cmd_tx, cmd_rx) = bounded::<ExportCommand>(4);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(16);
    backend_bridge::runtime::launch(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([900.0, 820.0])
            .with_min_inner_size([560.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(SotlWizardApp::new(settings, cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("desktop window failed: {err}"))
}
