use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::ValueRange;

// Hue sweep from deep violet (lowest sentiment) to warm yellow (highest).
const HUE_LOW: f32 = 265.0;
const HUE_HIGH: f32 = 55.0;

/// Number of discrete colour buckets used when batching plot points.
pub const BUCKETS: usize = 16;

// ---------------------------------------------------------------------------
// Continuous colour scale for the Sentiment column
// ---------------------------------------------------------------------------

/// Maps a value inside a fixed range onto a continuous colour ramp.
#[derive(Debug, Clone)]
pub struct ColorScale {
    range: ValueRange,
}

impl ColorScale {
    pub fn new(range: ValueRange) -> Self {
        Self { range }
    }

    /// Position of `value` on the scale in `[0, 1]`. A degenerate range
    /// puts everything at the midpoint.
    pub fn fraction(&self, value: f64) -> f32 {
        let span = self.range.span();
        if span.abs() < f64::EPSILON {
            return 0.5;
        }
        (((value - self.range.min) / span).clamp(0.0, 1.0)) as f32
    }

    /// Bucket index in `0..BUCKETS` for `value`.
    pub fn bucket(&self, value: f64) -> usize {
        ((self.fraction(value) * BUCKETS as f32) as usize).min(BUCKETS - 1)
    }

    /// Representative colour of a bucket (its centre).
    pub fn bucket_color(bucket: usize) -> Color32 {
        ramp((bucket as f32 + 0.5) / BUCKETS as f32)
    }
}

/// Colour at position `t` in `[0, 1]` along the ramp.
fn ramp(t: f32) -> Color32 {
    let hue = HUE_LOW + (HUE_HIGH - HUE_LOW) * t;
    let lightness = 0.35 + 0.25 * t;
    let hsl = Hsl::new(hue, 0.75, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_ramp_ends() {
        let scale = ColorScale::new(ValueRange::new(-1.0, 1.0));
        assert_eq!(scale.fraction(-1.0), 0.0);
        assert_eq!(scale.fraction(1.0), 1.0);
        assert_eq!(scale.fraction(0.0), 0.5);
        assert_ne!(ColorScale::bucket_color(0), ColorScale::bucket_color(BUCKETS - 1));
    }

    #[test]
    fn degenerate_range_uses_midpoint() {
        let scale = ColorScale::new(ValueRange::new(0.3, 0.3));
        assert_eq!(scale.fraction(0.3), 0.5);
    }

    #[test]
    fn buckets_stay_in_bounds() {
        let scale = ColorScale::new(ValueRange::new(0.0, 1.0));
        assert_eq!(scale.bucket(0.0), 0);
        assert_eq!(scale.bucket(1.0), BUCKETS - 1);
        assert_eq!(scale.bucket(5.0), BUCKETS - 1);
        assert_eq!(scale.bucket(-5.0), 0);
    }
}
