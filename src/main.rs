use anyhow::Context;
use env_logger::Builder;
use log::{LevelFilter, error, info};
use std::path::PathBuf;

use crate::control::{ControlClient, HttpTransport, MonitorConfig, leak_request_event_queue};
use crate::display::DebugSurface;
use crate::ui::AppState;

mod control;
mod display;
mod ui;

fn init_logging(extra_filters: Option<&str>) {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .filter(Some("propolis_monitor"), LevelFilter::Debug);
    if let Some(filters) = extra_filters {
        builder.parse_filters(filters);
    }
    builder.init();
}

fn run(config: MonitorConfig) -> anyhow::Result<()> {
    let base_url = config.base_url()?;
    let transport = HttpTransport::new()?;
    let surface = DebugSurface::new(config.display_id.as_str());
    let client = ControlClient::new(base_url, transport, surface, leak_request_event_queue())?;

    info!("Monitoring control API at {} (connection {})", client.base_url(), client.connection());

    // The GUI runs on the main thread (required on macOS)
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.as_str())
            .with_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        &config.window_title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(AppState::new(client)))),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
    .context("Monitor window failed")
}

fn main() {
    let config_arg = std::env::args_os().nth(1).map(PathBuf::from);
    let config = MonitorConfig::resolve(config_arg);
    init_logging(config.as_ref().ok().and_then(|c| c.log_filter.as_deref()));

    info!("Starting up");

    let result = config.and_then(run);
    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
