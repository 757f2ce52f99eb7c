mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use anyhow::{anyhow, Context};
use app::LaunchDashboardApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // The dataset is read once; without it there is nothing to show.
    let dataset = data::loader::load_file(&config.dataset_path)
        .with_context(|| {
            format!(
                "loading launch records from {}",
                config.dataset_path.display()
            )
        })
        .inspect_err(|e| log::error!("{e:#}"))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashboardApp::new(config, dataset)))),
    )
    .map_err(|e| anyhow!("running dashboard window: {e}"))
}
