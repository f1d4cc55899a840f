mod app;
mod color;
mod config;
mod data;
mod error;
mod format;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::SalesDashboardApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::load(Path::new(config::CONFIG_FILE))?;

    // A dataset that cannot be loaded stops the dashboard before any window opens.
    let dataset = data::loader::load_file(&config.data_path, config.date_order)
        .inspect_err(|e| log::error!("Failed to load {}: {e}", config.data_path.display()))
        .with_context(|| format!("loading {}", config.data_path.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    let state = AppState::new(dataset, config.date_order);
    let title = config.title.clone();

    eframe::run_native(
        &config.title,
        options,
        Box::new(|_cc| Ok(Box::new(SalesDashboardApp::new(state, title)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
