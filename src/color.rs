use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Viridis anchor table
// ---------------------------------------------------------------------------

/// Evenly spaced sRGB anchors of the viridis colormap; intermediate colours
/// are interpolated in linear RGB.
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 45, 123),
    (59, 82, 139),
    (44, 114, 142),
    (33, 145, 140),
    (40, 174, 128),
    (94, 201, 98),
    (173, 220, 48),
    (253, 231, 37),
];

fn anchor(i: usize) -> LinSrgb {
    let (r, g, b) = VIRIDIS[i];
    Srgb::new(r, g, b).into_format::<f32>().into_linear()
}

/// Sample the continuous viridis ramp at `t` in [0, 1].
fn viridis(t: f64) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let pos = t * (VIRIDIS.len() - 1) as f64;
    let i = (pos.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = (pos - i as f64) as f32;

    let mixed = anchor(i).mix(anchor(i + 1), frac);
    let rgb: Srgb = Srgb::from_linear(mixed);
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

// ---------------------------------------------------------------------------
// ColorScale – banded value → colour mapping over a fixed domain
// ---------------------------------------------------------------------------

/// Maps coupling values onto viridis, quantized into a fixed number of
/// contour bands over [min, max]. Values outside the domain clamp to the end
/// bands; they are rendered, never rejected.
#[derive(Debug, Clone)]
pub struct ColorScale {
    min: f64,
    max: f64,
    bands: usize,
    ticks: usize,
}

impl ColorScale {
    pub fn new(min: f64, max: f64, bands: usize, ticks: usize) -> Self {
        ColorScale {
            min,
            max,
            bands: bands.max(1),
            ticks: ticks.max(2),
        }
    }

    /// (min, max) of the value domain.
    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Index of the contour band `value` falls into.
    fn band(&self, value: f64) -> usize {
        let t = ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0);
        ((t * self.bands as f64) as usize).min(self.bands - 1)
    }

    /// Colour of the band containing `value`.
    pub fn color_for(&self, value: f64) -> Color32 {
        let band = self.band(value);
        viridis((band as f64 + 0.5) / self.bands as f64)
    }

    /// Evenly spaced tick values across the domain, for the colour bar.
    pub fn tick_values(&self) -> Vec<f64> {
        let step = (self.max - self.min) / (self.ticks - 1) as f64;
        (0..self.ticks).map(|i| self.min + i as f64 * step).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale() -> ColorScale {
        ColorScale::new(0.0, 12.0, 500, 7)
    }

    #[test]
    fn ramp_ends_hit_the_outer_anchors() {
        assert_eq!(viridis(0.0), Color32::from_rgb(68, 1, 84));
        assert_eq!(viridis(1.0), Color32::from_rgb(253, 231, 37));
    }

    #[test]
    fn out_of_domain_values_clamp_to_the_end_bands() {
        let s = scale();
        assert_eq!(s.color_for(-3.0), s.color_for(0.0));
        assert_eq!(s.color_for(99.0), s.color_for(12.0));
    }

    #[test]
    fn band_index_is_monotone_in_the_value() {
        let s = scale();
        let mut last = 0;
        for i in 0..=120 {
            let band = s.band(i as f64 * 0.1);
            assert!(band >= last);
            last = band;
        }
        assert_eq!(s.band(0.0), 0);
        assert_eq!(s.band(12.0), 499);
    }

    #[test]
    fn values_within_one_band_share_a_colour() {
        // Band width is 12/500 = 0.024; both values land in band 0.
        let s = scale();
        assert_eq!(s.color_for(0.001), s.color_for(0.02));
    }

    #[test]
    fn seven_ticks_span_the_domain_evenly() {
        let ticks = scale().tick_values();
        assert_eq!(ticks.len(), 7);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(ticks[6], 12.0);
        for pair in ticks.windows(2) {
            assert!((pair[1] - pair[0] - 2.0).abs() < 1e-12);
        }
    }
}
