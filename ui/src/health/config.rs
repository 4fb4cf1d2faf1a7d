//! Layout configuration for the health charts.
//!
//! Defaults reproduce the dashboard card; embedders may deserialize their own
//! values and must call [`HealthChartConfig::validate`] before rendering.

use serde::{Deserialize, Serialize};

use crate::core::geometry::{ensure_radius, GeometryError, Point};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// Width and height of the square SVG viewport.
    pub size: f64,
    pub max_radius: f64,
    /// Label distance as a percentage of `max_radius`.
    pub label_reach: f64,
    pub center_disc_radius: f64,
    pub point_radius: f64,
    pub hovered_point_radius: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            size: 280.0,
            max_radius: 90.0,
            label_reach: 135.0,
            center_disc_radius: 28.0,
            point_radius: 6.0,
            hovered_point_radius: 8.0,
        }
    }
}

impl RadarConfig {
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    pub size: f64,
    /// Gap between the viewport edge and the progress ring.
    pub ring_inset: f64,
    /// Gap between the progress ring and the liquid disc.
    pub inner_gap: f64,
    pub stroke_width: f64,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            size: 200.0,
            ring_inset: 20.0,
            inner_gap: 12.0,
            stroke_width: 4.0,
        }
    }
}

impl GaugeConfig {
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    pub fn ring_radius(&self) -> Result<f64, GeometryError> {
        ensure_radius(self.size / 2.0 - self.ring_inset)
    }

    pub fn inner_radius(&self) -> Result<f64, GeometryError> {
        ensure_radius(self.ring_radius()? - self.inner_gap)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonutConfig {
    pub size: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Gap between adjacent slices, in degrees.
    pub padding_degrees: f64,
}

impl Default for DonutConfig {
    fn default() -> Self {
        Self {
            size: 112.0,
            inner_radius: 22.0,
            outer_radius: 42.0,
            padding_degrees: 3.0,
        }
    }
}

impl DonutConfig {
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthChartConfig {
    pub radar: RadarConfig,
    pub gauge: GaugeConfig,
    pub donut: DonutConfig,
}

impl HealthChartConfig {
    pub fn validate(&self) -> Result<(), GeometryError> {
        for size in [self.radar.size, self.gauge.size, self.donut.size] {
            if !(size.is_finite() && size > 0.0) {
                return Err(GeometryError::InvalidSize(size));
            }
        }
        ensure_radius(self.radar.max_radius)?;
        self.gauge.inner_radius()?;
        ensure_radius(self.donut.outer_radius)?;
        let (inner, outer) = (self.donut.inner_radius, self.donut.outer_radius);
        if !(inner.is_finite() && inner >= 0.0 && inner < outer) {
            return Err(GeometryError::InvalidAnnulus { inner, outer });
        }
        Ok(())
    }
}
