use eframe::egui::{
    pos2, vec2, Align2, Color32, CornerRadius, FontId, Rect, RichText, Sense, Stroke, StrokeKind,
    Ui,
};

use crate::state::ViewState;

const STRIP_WIDTH: f32 = 28.0;
const TICK_LEN: f32 = 5.0;
const TICK_GAP: f32 = 9.0;

// ---------------------------------------------------------------------------
// Colour bar (right side panel)
// ---------------------------------------------------------------------------

/// Paint the vertical colour bar: label, gradient strip, and tick marks.
pub fn colorbar(ui: &mut Ui, state: &ViewState) {
    let config = &state.config;

    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new("K² (%)").italics().size(config.label_font_size));
    });
    ui.add_space(config.tick_padding);

    let desired = vec2(ui.available_width(), ui.available_height());
    let (rect, _) = ui.allocate_exact_size(desired, Sense::hover());
    let strip = Rect::from_min_max(
        rect.min,
        pos2(rect.min.x + STRIP_WIDTH, rect.max.y),
    );

    let painter = ui.painter();
    let (min, max) = state.scale.domain();

    // One painted row per pixel; the band quantization shows through the
    // scale itself.
    let height = strip.height().max(1.0);
    for row in 0..height.ceil() as usize {
        let top = strip.top() + row as f32;
        let value = max - (row as f64 + 0.5) / height as f64 * (max - min);
        let slice = Rect::from_min_max(
            pos2(strip.left(), top),
            pos2(strip.right(), (top + 1.0).min(strip.bottom())),
        );
        painter.rect_filled(slice, CornerRadius::ZERO, state.scale.color_for(value));
    }
    painter.rect_stroke(
        strip,
        CornerRadius::ZERO,
        Stroke::new(1.0, Color32::DARK_GRAY),
        StrokeKind::Inside,
    );

    let text_color = ui.visuals().text_color();
    for value in state.scale.tick_values() {
        let t = ((value - min) / (max - min)) as f32;
        let y = strip.bottom() - t * strip.height();
        painter.line_segment(
            [pos2(strip.right(), y), pos2(strip.right() + TICK_LEN, y)],
            Stroke::new(1.5, Color32::DARK_GRAY),
        );
        painter.text(
            pos2(strip.right() + TICK_LEN + TICK_GAP, y),
            Align2::LEFT_CENTER,
            format!("{value}"),
            FontId::proportional(config.tick_label_size),
            text_color,
        );
    }
}
