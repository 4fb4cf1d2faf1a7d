//! Liquid-fill gauge model for the composite score.

use crate::core::format::format_score;
use crate::core::geometry::{
    circumference, clamp_score, liquid_fill_bounds, ring_dash_offset, wave_path, FillBounds,
    GeometryError, PathData, Point, WaveSurface, WAVE_AMPLITUDE, WAVE_PERIOD_SECS,
};

use super::config::GaugeConfig;

/// Samples per wave period when baking keyframes for the SVG animation clock.
const WAVE_SAMPLES: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct GaugeModel {
    pub center: Point,
    pub ring_radius: f64,
    pub inner_radius: f64,
    pub stroke_width: f64,
    pub circumference: f64,
    pub dash_offset: f64,
    /// Clamped score / 100.
    pub fill_fraction: f64,
    pub fill: FillBounds,
    pub surface: WaveSurface,
    /// Unclamped score, one decimal.
    pub label: String,
    pub color: String,
}

impl GaugeModel {
    pub fn build(score: f64, color: &str, config: &GaugeConfig) -> Result<Self, GeometryError> {
        let center = config.center();
        let ring_radius = config.ring_radius()?;
        let inner_radius = config.inner_radius()?;
        let fill_fraction = clamp_score(score) / 100.0;
        let circumference = circumference(ring_radius)?;
        let dash_offset = ring_dash_offset(circumference, fill_fraction)?;
        let fill = liquid_fill_bounds(center.y, inner_radius, fill_fraction)?;

        Ok(Self {
            center,
            ring_radius,
            inner_radius,
            stroke_width: config.stroke_width,
            circumference,
            dash_offset,
            fill_fraction,
            fill,
            surface: WaveSurface {
                center,
                inner_radius,
                level_y: fill.top_y,
                amplitude: WAVE_AMPLITUDE,
                period_secs: WAVE_PERIOD_SECS,
            },
            label: format_score(score),
            color: color.to_string(),
        })
    }

    pub fn wave(&self, t: f64) -> PathData {
        wave_path(t, &self.surface)
    }

    /// Wave sampled over one period, `;`-separated for `<animate values>`.
    /// The first and last samples coincide so the loop is seamless.
    pub fn wave_keyframes(&self) -> String {
        let step = self.surface.period_secs / WAVE_SAMPLES as f64;
        (0..=WAVE_SAMPLES)
            .map(|i| self.wave(i as f64 * step).to_string())
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Rectangle under the wave, padded past the disc bottom.
    pub fn fill_rect(&self) -> (Point, f64, f64) {
        let origin = Point::new(self.center.x - self.inner_radius, self.fill.top_y);
        (origin, self.inner_radius * 2.0, self.fill.height + 10.0)
    }

    /// Specular highlight ellipse: center, rx, ry.
    pub fn highlight(&self) -> (Point, f64, f64) {
        (
            Point::new(
                self.center.x - self.inner_radius * 0.3,
                self.fill.top_y + self.fill.height * 0.3,
            ),
            self.inner_radius * 0.15,
            self.fill.height * 0.2,
        )
    }

    pub fn rotate_transform(&self) -> String {
        format!("rotate(-90 {} {})", self.center.x, self.center.y)
    }
}
