use eframe::egui::{Color32, ColorImage};

use crate::color::ColorScale;
use crate::data::model::HeatmapGrid;

// ---------------------------------------------------------------------------
// Contour rasterizer
// ---------------------------------------------------------------------------

/// Rasterize the grid into a filled-contour image.
///
/// Each pixel centre is mapped into (key, angle) space, the grid is sampled
/// bilinearly there, and the value is pushed through the banded colour
/// scale. Image rows run top to bottom while the angle axis increases
/// upward.
pub fn rasterize(
    grid: &HeatmapGrid,
    scale: &ColorScale,
    width: usize,
    height: usize,
) -> ColorImage {
    let mut image = ColorImage::new([width, height], Color32::BLACK);

    let (key_min, key_max) = grid.key_span();
    let (angle_min, angle_max) = grid.angle_span();

    for py in 0..height {
        let fy = (py as f64 + 0.5) / height as f64;
        let angle = angle_max - fy * (angle_max - angle_min);
        for px in 0..width {
            let fx = (px as f64 + 0.5) / width as f64;
            let key = key_min + fx * (key_max - key_min);
            image.pixels[py * width + px] = scale.color_for(grid.sample(key, angle));
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ConditionSeries;

    fn grid(rows: Vec<(f64, Vec<f64>, Vec<f64>)>) -> HeatmapGrid {
        HeatmapGrid::assemble(
            rows.into_iter()
                .map(|(key, angles, values)| ConditionSeries { key, angles, values })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn image_has_the_requested_dimensions() {
        let g = grid(vec![
            (1.0, vec![0.0, 90.0], vec![5.0, 5.0]),
            (0.0, vec![0.0, 90.0], vec![5.0, 5.0]),
        ]);
        let scale = ColorScale::new(0.0, 12.0, 500, 7);
        let image = rasterize(&g, &scale, 8, 4);
        assert_eq!(image.size, [8, 4]);
        assert_eq!(image.pixels.len(), 32);
    }

    #[test]
    fn uniform_field_renders_a_single_colour() {
        let g = grid(vec![
            (1.0, vec![0.0, 90.0], vec![5.0, 5.0]),
            (0.0, vec![0.0, 90.0], vec![5.0, 5.0]),
        ]);
        let scale = ColorScale::new(0.0, 12.0, 500, 7);
        let image = rasterize(&g, &scale, 4, 4);
        let expected = scale.color_for(5.0);
        assert!(image.pixels.iter().all(|&p| p == expected));
    }

    #[test]
    fn high_angles_land_in_the_top_rows() {
        // Value grows with angle; the top pixel row must be the brighter one.
        let g = grid(vec![
            (1.0, vec![0.0, 90.0], vec![0.0, 12.0]),
            (0.0, vec![0.0, 90.0], vec![0.0, 12.0]),
        ]);
        let scale = ColorScale::new(0.0, 12.0, 500, 7);
        let image = rasterize(&g, &scale, 1, 2);

        // Pixel centres sit at angles 67.5 and 22.5.
        assert_eq!(image.pixels[0], scale.color_for(9.0));
        assert_eq!(image.pixels[1], scale.color_for(3.0));
    }

    #[test]
    fn out_of_scale_values_still_render() {
        let g = grid(vec![
            (1.0, vec![0.0, 90.0], vec![-40.0, 44.0]),
            (0.0, vec![0.0, 90.0], vec![-40.0, 44.0]),
        ]);
        let scale = ColorScale::new(0.0, 12.0, 500, 7);
        let image = rasterize(&g, &scale, 2, 2);
        assert_eq!(image.pixels.len(), 4);
        // Top row clamps to the hot end, bottom row to the cold end.
        assert_eq!(image.pixels[0], scale.color_for(12.0));
        assert_eq!(image.pixels[3], scale.color_for(0.0));
    }
}
