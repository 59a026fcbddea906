use eframe::egui::{Context, TextureHandle, TextureId, TextureOptions};

use crate::color::ColorScale;
use crate::config::HeatmapConfig;
use crate::data::model::HeatmapGrid;
use crate::render;

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

/// Everything the panels draw from: the assembled grid, the colour scale,
/// and the rasterized texture (created on first frame, then reused).
pub struct ViewState {
    pub config: HeatmapConfig,
    pub grid: HeatmapGrid,
    pub scale: ColorScale,
    texture: Option<TextureHandle>,
}

impl ViewState {
    pub fn new(config: HeatmapConfig, grid: HeatmapGrid) -> Self {
        let scale = ColorScale::new(
            config.scale_min,
            config.scale_max,
            config.bands,
            config.colorbar_ticks,
        );
        ViewState {
            config,
            grid,
            scale,
            texture: None,
        }
    }

    /// Texture of the rasterized contour plot, created lazily because a GPU
    /// context is only available once the UI is running.
    pub fn texture(&mut self, ctx: &Context) -> TextureId {
        let config = &self.config;
        let grid = &self.grid;
        let scale = &self.scale;
        self.texture
            .get_or_insert_with(|| {
                let image =
                    render::rasterize(grid, scale, config.raster_width, config.raster_height);
                log::info!(
                    "rasterized {}x{} contour texture from a {}x{} grid",
                    config.raster_width,
                    config.raster_height,
                    grid.n_rows(),
                    grid.n_cols()
                );
                ctx.load_texture("contour", image, TextureOptions::LINEAR)
            })
            .id()
    }
}
