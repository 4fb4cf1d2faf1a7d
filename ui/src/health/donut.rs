//! Donut geometry for a dimension breakdown.

use crate::core::geometry::{annular_sector_path, GeometryError, PathData, Point};

use super::breakdown::BreakdownItem;
use super::config::DonutConfig;

/// Slices start at the top and run clockwise.
const START_ANGLE: f64 = -90.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    /// Index into the breakdown list this slice was built from.
    pub item: usize,
    pub start: f64,
    pub end: f64,
    pub path: PathData,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutModel {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Empty when the breakdown total is zero; only the track ring is drawn.
    pub slices: Vec<DonutSlice>,
    /// Full ring behind the slices.
    pub track: PathData,
}

impl DonutModel {
    pub fn build(items: &[BreakdownItem], config: &DonutConfig) -> Result<Self, GeometryError> {
        let center = config.center();
        let (inner, outer) = (config.inner_radius, config.outer_radius);
        let track = annular_sector_path(center, inner, outer, START_ANGLE, START_ANGLE + 360.0)?;

        let visible: Vec<(usize, &BreakdownItem)> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.percentage > 0.0 && item.percentage.is_finite())
            .collect();

        // A lone slice is a full ring; gaps only separate neighbours.
        let padding = if visible.len() > 1 {
            config.padding_degrees.max(0.0)
        } else {
            0.0
        };
        let available = (360.0 - padding * visible.len() as f64).max(0.0);

        let mut cursor = START_ANGLE;
        let mut slices = Vec::with_capacity(visible.len());
        for (idx, item) in visible {
            let sweep = available * item.percentage / 100.0;
            let start = cursor;
            let end = start + sweep;
            slices.push(DonutSlice {
                item: idx,
                start,
                end,
                path: annular_sector_path(center, inner, outer, start, end)?,
                color: item.color,
            });
            cursor = end + padding;
        }

        Ok(Self {
            center,
            inner_radius: inner,
            outer_radius: outer,
            slices,
            track,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::breakdown::{BreakdownItem, SubMetric, BREAKDOWN_PALETTE};

    fn item(idx: usize, percentage: f64) -> BreakdownItem {
        BreakdownItem {
            metric: SubMetric::Star,
            raw_value: percentage,
            display_value: String::new(),
            color: BREAKDOWN_PALETTE[idx],
            percentage,
        }
    }

    #[test]
    fn slices_share_the_ring_minus_padding() {
        let model =
            DonutModel::build(&[item(0, 75.0), item(1, 25.0)], &DonutConfig::default()).unwrap();
        assert_eq!(model.slices.len(), 2);
        let first = &model.slices[0];
        let second = &model.slices[1];
        assert_eq!(first.start, -90.0);
        assert!((first.end - first.start - 354.0 * 0.75).abs() < 1e-9);
        assert!((second.start - first.end - 3.0).abs() < 1e-9);
        assert!((second.end + 3.0 - 270.0).abs() < 1e-9);
        assert_eq!(second.color, BREAKDOWN_PALETTE[1]);
    }

    #[test]
    fn zero_total_draws_track_only() {
        let model =
            DonutModel::build(&[item(0, 0.0), item(1, 0.0)], &DonutConfig::default()).unwrap();
        assert!(model.slices.is_empty());
        assert!(!model.track.is_empty());
    }

    #[test]
    fn single_slice_is_a_full_ring() {
        let model =
            DonutModel::build(&[item(0, 0.0), item(1, 100.0)], &DonutConfig::default()).unwrap();
        assert_eq!(model.slices.len(), 1);
        assert_eq!(model.slices[0].item, 1);
        assert_eq!(model.slices[0].end - model.slices[0].start, 360.0);
    }
}
