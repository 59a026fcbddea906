use eframe::egui;

use crate::state::ViewState;
use crate::ui::{colorbar, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HeatmapApp {
    state: ViewState,
}

impl HeatmapApp {
    pub fn new(state: ViewState) -> Self {
        Self { state }
    }
}

impl eframe::App for HeatmapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Right side panel: colour bar ----
        egui::SidePanel::right("colorbar_panel")
            .default_width(150.0)
            .resizable(false)
            .show(ctx, |ui| {
                colorbar::colorbar(ui, &self.state);
            });

        // ---- Central panel: filled-contour plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::contour_plot(ui, &mut self.state);
        });
    }
}
