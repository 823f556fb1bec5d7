mod app;
mod color;
mod config;
mod data;
mod lasso;
mod state;
mod ui;

use anyhow::Context;
use app::TweetLensApp;
use clap::Parser;
use config::Config;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::parse();

    // A dataset that cannot be loaded is fatal: no window is opened.
    let dataset = match data::loader::load_file(&config.data) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("Failed to load {}: {e}", config.data.display());
            return Err(e).with_context(|| format!("loading {}", config.data.display()));
        }
    };
    log::info!("Loaded {} from {}", state::describe(&dataset), config.data.display());

    let state = AppState::new(dataset, &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tweet Lens – Sentiment Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(TweetLensApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
