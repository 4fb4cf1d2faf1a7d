//! Geometry kernel for the health charts.
//!
//! Everything here is pure: scores in `[0, 100]` and angles in degrees go in,
//! points and SVG path data come out. Angles follow the screen convention
//! (0° points along +x, angles grow clockwise because y grows downward).
//!
//! Scores and fractions saturate instead of failing. A non-positive or
//! non-finite radius is a configuration fault and is rejected with
//! [`GeometryError`] so a misconfigured chart never renders degenerate shapes.

use std::f64::consts::PI;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    #[error("circumference must be finite and positive, got {0}")]
    InvalidCircumference(f64),

    #[error("inner radius {inner} must be non-negative and smaller than outer radius {outer}")]
    InvalidAnnulus { inner: f64, outer: f64 },

    #[error("chart size must be finite and positive, got {0}")]
    InvalidSize(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Saturate a score to `[0, 100]`. NaN reads as 0.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Saturate a fraction to `[0, 1]`. NaN reads as 0.
pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

pub fn radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

pub(crate) fn ensure_radius(radius: f64) -> Result<f64, GeometryError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(GeometryError::InvalidRadius(radius))
    }
}

fn polar(center: Point, distance: f64, angle_degrees: f64) -> Point {
    let rad = radians(angle_degrees);
    Point::new(
        center.x + distance * rad.cos(),
        center.y + distance * rad.sin(),
    )
}

/// Point at `radius * value/100` from `center` along `angle_degrees`.
pub fn point_on_circle(
    center: Point,
    radius: f64,
    angle_degrees: f64,
    value_percent: f64,
) -> Result<Point, GeometryError> {
    let radius = ensure_radius(radius)?;
    let distance = radius * clamp_score(value_percent) / 100.0;
    Ok(polar(center, distance, angle_degrees))
}

pub fn circumference(radius: f64) -> Result<f64, GeometryError> {
    Ok(2.0 * PI * ensure_radius(radius)?)
}

/// Stroke dash offset that reveals `fill_fraction` of a ring.
///
/// `0` hides the ring (offset = circumference), `1` shows all of it.
pub fn ring_dash_offset(circumference: f64, fill_fraction: f64) -> Result<f64, GeometryError> {
    if !(circumference.is_finite() && circumference > 0.0) {
        return Err(GeometryError::InvalidCircumference(circumference));
    }
    Ok(circumference * (1.0 - clamp01(fill_fraction)))
}

/// Vertical extent of a liquid fill inside a circle of `inner_radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillBounds {
    pub height: f64,
    pub top_y: f64,
}

/// Fill grows upward from the bottom of the inner circle centred on `center_y`.
pub fn liquid_fill_bounds(
    center_y: f64,
    inner_radius: f64,
    fill_fraction: f64,
) -> Result<FillBounds, GeometryError> {
    let inner_radius = ensure_radius(inner_radius)?;
    let height = 2.0 * inner_radius * clamp01(fill_fraction);
    Ok(FillBounds {
        height,
        top_y: center_y + inner_radius - height,
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo {
        control: Point,
        to: Point,
    },
    ArcTo {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

/// SVG path data. `Display` renders the `d` attribute.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, to: Point) -> Self {
        self.commands.push(PathCommand::MoveTo(to));
        self
    }

    pub fn line_to(mut self, to: Point) -> Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    pub fn quad_to(mut self, control: Point, to: Point) -> Self {
        self.commands.push(PathCommand::QuadTo { control, to });
        self
    }

    pub fn arc_to(mut self, radius: f64, large_arc: bool, sweep: bool, to: Point) -> Self {
        self.commands.push(PathCommand::ArcTo {
            radius,
            large_arc,
            sweep,
            to,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn coord(value: f64) -> String {
    let text = format!("{value:.2}");
    if text == "-0.00" {
        "0.00".to_string()
    } else {
        text
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", coord(p.x), coord(p.y)),
            PathCommand::LineTo(p) => write!(f, "L {} {}", coord(p.x), coord(p.y)),
            PathCommand::QuadTo { control, to } => write!(
                f,
                "Q {} {} {} {}",
                coord(control.x),
                coord(control.y),
                coord(to.x),
                coord(to.y)
            ),
            PathCommand::ArcTo {
                radius,
                large_arc,
                sweep,
                to,
            } => write!(
                f,
                "A {r} {r} 0 {} {} {} {}",
                u8::from(large_arc),
                u8::from(sweep),
                coord(to.x),
                coord(to.y),
                r = coord(radius)
            ),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, command) in self.commands.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

/// Move to the first point, line through the rest in input order, close.
pub fn closed_polygon_path(points: &[Point]) -> PathData {
    let Some((first, rest)) = points.split_first() else {
        return PathData::new();
    };
    rest.iter()
        .fold(PathData::new().move_to(*first), |path, p| path.line_to(*p))
        .close()
}

pub const WAVE_AMPLITUDE: f64 = 4.0;
pub const WAVE_PERIOD_SECS: f64 = 3.0;
/// Horizontal bleed past the inner disc so the clip hides the wave ends.
pub const WAVE_OVERSCAN: f64 = 10.0;

/// Where the liquid surface sits inside the gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSurface {
    pub center: Point,
    pub inner_radius: f64,
    pub level_y: f64,
    pub amplitude: f64,
    pub period_secs: f64,
}

/// Liquid surface at time `t` (seconds). Periodic in `period_secs`.
///
/// Two quadratic segments swing in opposite directions around `level_y`; the
/// shape is closed along the bottom of the disc so it can be filled.
pub fn wave_path(t: f64, surface: &WaveSurface) -> PathData {
    let phase = if surface.period_secs > 0.0 && t.is_finite() {
        (2.0 * PI * t / surface.period_secs).cos()
    } else {
        1.0
    };
    let swing = surface.amplitude * phase;
    let Point { x: cx, y: cy } = surface.center;
    let r = surface.inner_radius;
    let level = surface.level_y;
    let left = cx - r - WAVE_OVERSCAN;
    let right = cx + r + WAVE_OVERSCAN;
    let bottom = cy + r + WAVE_OVERSCAN;

    PathData::new()
        .move_to(Point::new(left, level))
        .quad_to(Point::new(cx - r / 2.0, level - swing), Point::new(cx, level))
        .quad_to(Point::new(cx + r / 2.0, level + swing), Point::new(right, level))
        .line_to(Point::new(right, bottom))
        .line_to(Point::new(left, bottom))
        .close()
}

/// Ring slice between `start_degrees` and `end_degrees`, drawn clockwise.
///
/// A sweep of 360° or more yields a full annulus (two half arcs per edge,
/// render with `fill-rule: evenodd`). An empty or negative sweep yields an
/// empty path. `inner == 0` gives a pie wedge.
pub fn annular_sector_path(
    center: Point,
    inner: f64,
    outer: f64,
    start_degrees: f64,
    end_degrees: f64,
) -> Result<PathData, GeometryError> {
    let outer = ensure_radius(outer)?;
    if !(inner.is_finite() && inner >= 0.0 && inner < outer) {
        return Err(GeometryError::InvalidAnnulus { inner, outer });
    }

    let sweep = end_degrees - start_degrees;
    if !(sweep > 0.0) {
        return Ok(PathData::new());
    }

    if sweep >= 360.0 {
        let outer_start = polar(center, outer, start_degrees);
        let outer_mid = polar(center, outer, start_degrees + 180.0);
        let mut path = PathData::new()
            .move_to(outer_start)
            .arc_to(outer, false, true, outer_mid)
            .arc_to(outer, false, true, outer_start)
            .close();
        if inner > 0.0 {
            let inner_start = polar(center, inner, start_degrees);
            let inner_mid = polar(center, inner, start_degrees + 180.0);
            path = path
                .move_to(inner_start)
                .arc_to(inner, false, false, inner_mid)
                .arc_to(inner, false, false, inner_start)
                .close();
        }
        return Ok(path);
    }

    let large_arc = sweep > 180.0;
    let path = PathData::new()
        .move_to(polar(center, outer, start_degrees))
        .arc_to(outer, large_arc, true, polar(center, outer, end_degrees));

    let path = if inner > 0.0 {
        path.line_to(polar(center, inner, end_degrees)).arc_to(
            inner,
            large_arc,
            false,
            polar(center, inner, start_degrees),
        )
    } else {
        path.line_to(center)
    };

    Ok(path.close())
}
