use std::{path::PathBuf, time::Duration};

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::StartupConfig;
use crate::controller::events::UiEvent;
use crate::ui::{theme, SiteApp};

#[derive(Parser, Debug)]
#[command(about = "TheLittleLemon Restaurant desktop site")]
struct Args {
    /// TOML config file; defaults to the per-user config directory.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Tracing filter, e.g. `info` or `site_core=debug`.
    #[arg(long)]
    log: Option<String>,
    /// Skip downloading menu pictures.
    #[arg(long)]
    no_images: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut notes = Vec::new();
    let mut startup =
        StartupConfig::load(args.config.as_deref(), &mut notes).context("loading startup config")?;
    startup.apply_args(args.log, args.no_images);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&startup.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    for note in notes {
        tracing::warn!("{note}");
    }

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    if startup.fetch_images {
        backend_bridge::runtime::launch(
            cmd_rx,
            ui_tx.clone(),
            Duration::from_secs(startup.image_timeout_secs),
        );
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&startup.window_title)
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };
    let fetch_images = startup.fetch_images;
    tracing::info!(fetch_images, "starting desktop shell");
    eframe::run_native(
        &startup.window_title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(theme::site_visuals());
            Ok(Box::new(SiteApp::new(cmd_tx, ui_tx, ui_rx, fetch_images)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop shell exited with error: {err}"))
}
