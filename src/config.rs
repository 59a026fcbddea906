use std::path::PathBuf;

// ---------------------------------------------------------------------------
// HeatmapConfig – all plot constants in one explicit structure
// ---------------------------------------------------------------------------

/// Configuration for one heatmap run: which condition files to load and how
/// to style the rendered figure. Built once in `main` and passed through the
/// pipeline; nothing is read from disk or the environment.
#[derive(Debug, Clone)]
pub struct HeatmapConfig {
    /// Normalized-thickness condition keys, in row order (top row first).
    /// Each key maps to an input file via [`HeatmapConfig::file_name`].
    pub condition_keys: Vec<f64>,
    /// Directory the condition files are resolved against.
    pub data_dir: PathBuf,

    /// Lower bound of the color scale.
    pub scale_min: f64,
    /// Upper bound of the color scale.
    pub scale_max: f64,
    /// Number of discrete contour bands across the color scale.
    pub bands: usize,
    /// Number of evenly spaced tick marks on the color bar.
    pub colorbar_ticks: usize,

    /// Font size for the axis and color-bar labels.
    pub label_font_size: f32,
    /// Font size for tick labels on both axes and the color bar.
    pub tick_label_size: f32,
    /// Padding between ticks and their labels.
    pub tick_padding: f32,
    /// Spacing of the angle-axis ticks, in degrees.
    pub angle_tick_step: f64,

    /// Raster resolution of the contour texture.
    pub raster_width: usize,
    pub raster_height: usize,
}

impl HeatmapConfig {
    fn default_condition_keys() -> Vec<f64> {
        vec![1.5, 1.25, 1.0, 0.75, 0.5, 0.25, 0.0]
    }

    /// File name for a condition key: `1.5` → `"1.5.txt"`, `1.0` → `"1.txt"`.
    pub fn file_name(key: f64) -> String {
        format!("{key}.txt")
    }

    /// Full path of the condition file for `key`.
    pub fn path_for(&self, key: f64) -> PathBuf {
        self.data_dir.join(Self::file_name(key))
    }
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            condition_keys: Self::default_condition_keys(),
            data_dir: PathBuf::from("."),
            scale_min: 0.0,
            scale_max: 12.0,
            bands: 500,
            colorbar_ticks: 7,
            label_font_size: 30.0,
            tick_label_size: 30.0,
            tick_padding: 15.0,
            angle_tick_step: 30.0,
            raster_width: 512,
            raster_height: 512,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys_are_the_seven_conditions_in_row_order() {
        let config = HeatmapConfig::default();
        assert_eq!(
            config.condition_keys,
            vec![1.5, 1.25, 1.0, 0.75, 0.5, 0.25, 0.0]
        );
    }

    #[test]
    fn file_names_drop_trailing_zeros() {
        assert_eq!(HeatmapConfig::file_name(1.5), "1.5.txt");
        assert_eq!(HeatmapConfig::file_name(1.25), "1.25.txt");
        assert_eq!(HeatmapConfig::file_name(1.0), "1.txt");
        assert_eq!(HeatmapConfig::file_name(0.25), "0.25.txt");
        assert_eq!(HeatmapConfig::file_name(0.0), "0.txt");
    }

    #[test]
    fn paths_resolve_against_the_data_dir() {
        let config = HeatmapConfig {
            data_dir: PathBuf::from("/measurements"),
            ..Default::default()
        };
        assert_eq!(
            config.path_for(0.75),
            PathBuf::from("/measurements/0.75.txt")
        );
    }

    #[test]
    fn default_scale_matches_the_figure_constants() {
        let config = HeatmapConfig::default();
        assert_eq!(config.scale_min, 0.0);
        assert_eq!(config.scale_max, 12.0);
        assert_eq!(config.bands, 500);
        assert_eq!(config.colorbar_ticks, 7);
    }
}
