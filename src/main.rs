mod app;
mod color;
mod config;
mod data;
mod render;
mod state;
mod ui;

use app::HeatmapApp;
use config::HeatmapConfig;
use eframe::egui;
use state::ViewState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = HeatmapConfig::default();
    let grid = match data::loader::load_grid(&config) {
        Ok(grid) => grid,
        Err(e) => {
            log::error!("Failed to load condition sweep: {e:#}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} conditions with {} angle samples each",
        grid.n_rows(),
        grid.n_cols()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tilt Sweep – Coupling Heatmap",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(HeatmapApp::new(ViewState::new(config, grid))))
        }),
    )
}
