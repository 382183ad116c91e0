mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{anyhow, Context, Result};
use app::SalesPandaApp;
use clap::Parser;
use config::Args;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut state = AppState::new(args.load_options(), args.default_subcategories);

    // A file named on the command line must load, or we do not start.
    if let Some(path) = &args.path {
        let dataset = data::loader::load_file(path, &state.load_options)
            .inspect_err(|e| log::error!("Failed to load {}: {e}", path.display()))
            .with_context(|| format!("loading {}", path.display()))?;
        state.set_dataset(dataset, Some(path.clone()));
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sales Panda – Sales Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(SalesPandaApp::new(state)))),
    )
    .map_err(|e| anyhow!("UI error: {e}"))
}
