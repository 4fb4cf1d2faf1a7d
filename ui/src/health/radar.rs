//! Four-axis radial chart model.

use api::{DimensionKey, Dimensions};

use crate::core::format::format_score;
use crate::core::geometry::{
    clamp_score, closed_polygon_path, ensure_radius, point_on_circle, GeometryError, PathData,
    Point,
};

use super::config::RadarConfig;

/// Grid ring levels, in percent of the max radius.
pub const GRID_LEVELS: [f64; 4] = [25.0, 50.0, 75.0, 100.0];

/// Fixed axis placement: top, right, bottom, left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub key: DimensionKey,
    pub angle: f64,
    pub color: &'static str,
}

pub const AXES: [Axis; 4] = [
    Axis {
        key: DimensionKey::Growth,
        angle: -90.0,
        color: "#22c55e",
    },
    Axis {
        key: DimensionKey::Activity,
        angle: 0.0,
        color: "#f97316",
    },
    Axis {
        key: DimensionKey::Contribution,
        angle: 90.0,
        color: "#3b82f6",
    },
    Axis {
        key: DimensionKey::Code,
        angle: 180.0,
        color: "#a855f7",
    },
];

/// Accent color of a dimension, shared by the radar axes and dimension bars.
pub fn dimension_color(key: DimensionKey) -> &'static str {
    AXES[key.index()].color
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisGeometry {
    pub axis: Axis,
    /// Clamped score.
    pub score: f64,
    pub point: Point,
    /// Outer end of the axis line (100%).
    pub end: Point,
    pub label_at: Point,
    pub anchor: TextAnchor,
}

impl AxisGeometry {
    pub fn score_label(&self) -> String {
        format!("{:.0}", self.score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRing {
    pub radius: f64,
    /// Inner rings are dashed; the outermost is solid.
    pub dashed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarModel {
    pub center: Point,
    pub max_radius: f64,
    pub axes: Vec<AxisGeometry>,
    pub path: PathData,
    pub rings: Vec<GridRing>,
    /// Mean of the four clamped scores.
    pub average: f64,
    pub color: String,
}

impl RadarModel {
    pub fn build(
        dimensions: &Dimensions,
        color: &str,
        config: &RadarConfig,
    ) -> Result<Self, GeometryError> {
        let max_radius = ensure_radius(config.max_radius)?;
        let center = config.center();
        let label_radius = max_radius * config.label_reach / 100.0;

        let axes = AXES
            .iter()
            .map(|axis| {
                let score = clamp_score(dimensions.score(axis.key));
                let anchor = if axis.angle == 0.0 {
                    TextAnchor::Start
                } else if axis.angle == 180.0 {
                    TextAnchor::End
                } else {
                    TextAnchor::Middle
                };
                Ok(AxisGeometry {
                    axis: *axis,
                    score,
                    point: point_on_circle(center, max_radius, axis.angle, score)?,
                    end: point_on_circle(center, max_radius, axis.angle, 100.0)?,
                    label_at: point_on_circle(center, label_radius, axis.angle, 100.0)?,
                    anchor,
                })
            })
            .collect::<Result<Vec<_>, GeometryError>>()?;

        let points: Vec<Point> = axes.iter().map(|a| a.point).collect();
        let average = axes.iter().map(|a| a.score).sum::<f64>() / axes.len() as f64;

        let rings = GRID_LEVELS
            .iter()
            .map(|level| GridRing {
                radius: level / 100.0 * max_radius,
                dashed: *level < 100.0,
            })
            .collect();

        Ok(Self {
            center,
            max_radius,
            path: closed_polygon_path(&points),
            axes,
            rings,
            average,
            color: color.to_string(),
        })
    }

    pub fn center_label(&self) -> String {
        format_score(self.average)
    }

    pub fn axis(&self, index: usize) -> Option<&AxisGeometry> {
        self.axes.get(index)
    }
}
