//! Dimension breakdowns: the two representative sub-metrics of each dimension
//! and their share of the dimension's local total.

use api::{Dimension, DimensionKey};

use crate::core::format::{format_number, format_optional, format_percent};

/// Slice colors, assigned by position within a breakdown.
pub const BREAKDOWN_PALETTE: [&str; 6] = [
    "#22c55e", "#f59e0b", "#3b82f6", "#a855f7", "#ec4899", "#14b8a6",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubMetric {
    Star,
    Fork,
    CommitTrend,
    OpenDigger,
    WeeklyPrs,
    MonthlyPrs,
    Additions,
    Deletions,
}

impl SubMetric {
    /// Raw value; `None` when the field is absent or malformed.
    pub fn read(self, dimension: &Dimension) -> Option<f64> {
        let value = match self {
            SubMetric::Star => dimension.star_score,
            SubMetric::Fork => dimension.fork_score,
            SubMetric::CommitTrend => dimension.commit_trend_score,
            SubMetric::OpenDigger => dimension.opendigger_score,
            SubMetric::WeeklyPrs => dimension.detail_value("pr_avg_last_week"),
            SubMetric::MonthlyPrs => dimension.detail_value("pr_avg_month"),
            SubMetric::Additions => dimension.detail_value("pull_additions"),
            SubMetric::Deletions => dimension.detail_value("pull_deletions"),
        };
        value.filter(|v| v.is_finite())
    }
}

/// The fixed pair of sub-metrics visualized for each dimension, in legend order.
pub fn extraction_rule(key: DimensionKey) -> [SubMetric; 2] {
    match key {
        DimensionKey::Growth => [SubMetric::Star, SubMetric::Fork],
        DimensionKey::Activity => [SubMetric::CommitTrend, SubMetric::OpenDigger],
        DimensionKey::Contribution => [SubMetric::WeeklyPrs, SubMetric::MonthlyPrs],
        DimensionKey::Code => [SubMetric::Additions, SubMetric::Deletions],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownItem {
    pub metric: SubMetric,
    pub raw_value: f64,
    pub display_value: String,
    pub color: &'static str,
    pub percentage: f64,
}

impl BreakdownItem {
    pub fn percentage_label(&self) -> String {
        format_percent(self.percentage)
    }
}

/// Breakdown list for one dimension. Missing fields count as 0; a zero local
/// total yields 0% everywhere. Order follows [`extraction_rule`].
pub fn build_breakdown(key: DimensionKey, dimension: &Dimension) -> Vec<BreakdownItem> {
    let metrics = extraction_rule(key);
    let raw: Vec<f64> = metrics
        .iter()
        .map(|metric| metric.read(dimension).unwrap_or(0.0))
        .collect();
    let local_total: f64 = raw.iter().sum();

    metrics
        .iter()
        .zip(raw)
        .enumerate()
        .map(|(idx, (metric, raw_value))| {
            let percentage = if local_total > 0.0 {
                raw_value / local_total * 100.0
            } else {
                0.0
            };
            BreakdownItem {
                metric: *metric,
                raw_value,
                display_value: format_number(raw_value),
                color: BREAKDOWN_PALETTE[idx % BREAKDOWN_PALETTE.len()],
                percentage,
            }
        })
        .collect()
}

/// One raw `details` entry prepared for the detail grid. The view resolves
/// `key` to a localized label.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub key: String,
    pub value: String,
}

/// Every raw detail of a dimension in key order. Non-numeric values render `"0"`.
pub fn detail_rows(dimension: &Dimension) -> Vec<DetailRow> {
    dimension
        .details
        .keys()
        .map(|key| DetailRow {
            key: key.clone(),
            value: format_optional(dimension.detail_value(key)),
        })
        .collect()
}
