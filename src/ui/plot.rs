use eframe::egui::{vec2, FontId, RichText, TextStyle, Ui};
use egui_plot::{uniform_grid_spacer, Plot, PlotImage, PlotPoint};

use crate::state::ViewState;

// ---------------------------------------------------------------------------
// Filled-contour plot (central panel)
// ---------------------------------------------------------------------------

/// Render the contour plot in the central panel.
pub fn contour_plot(ui: &mut Ui, state: &mut ViewState) {
    let label_size = state.config.label_font_size;
    let tick_size = state.config.tick_label_size;
    let tick_padding = state.config.tick_padding;
    let angle_step = state.config.angle_tick_step;

    let (key_min, key_max) = state.grid.key_span();
    let (angle_min, angle_max) = state.grid.angle_span();
    let texture = state.texture(ui.ctx());

    // Tick label font and tick-to-label padding for both axes.
    ui.style_mut()
        .text_styles
        .insert(TextStyle::Body, FontId::proportional(tick_size));
    ui.style_mut().spacing.item_spacing = vec2(tick_padding, tick_padding);

    let center = PlotPoint::new(
        (key_min + key_max) / 2.0,
        (angle_min + angle_max) / 2.0,
    );
    let extent = vec2(
        (key_max - key_min) as f32,
        (angle_max - angle_min) as f32,
    );

    Plot::new("contour_plot")
        .x_axis_label(RichText::new("h/λ").italics().size(label_size))
        .y_axis_label(RichText::new("c-Axis tilt angle (deg.)").size(label_size))
        .y_grid_spacer(uniform_grid_spacer(move |_| {
            [angle_step * 3.0, angle_step, angle_step]
        }))
        .y_axis_formatter(move |mark, _range| {
            // Label only the configured step multiples, with a degree suffix.
            let step = mark.value / angle_step;
            if (step - step.round()).abs() < 1e-9 {
                format!("{:.0}°", mark.value)
            } else {
                String::new()
            }
        })
        .show_grid(false)
        .show(ui, |plot_ui| {
            plot_ui.image(PlotImage::new(texture, center, extent));
        });
}
