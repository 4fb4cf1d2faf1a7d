//! Health score visualization: pure chart models plus the Dioxus components
//! that render them.
//!
//! The models (`radar`, `liquid`, `donut`, `breakdown`, `grade`) never touch the
//! renderer and are unit tested directly. Interaction state lives in `hover`
//! and `panel`, each owned by the component that needs it.

pub mod breakdown;
pub mod charts;
pub mod config;
pub mod dimensions;
pub mod donut;
pub mod grade;
pub mod hover;
pub mod liquid;
pub mod panel;
pub mod radar;

pub use breakdown::{build_breakdown, detail_rows, BreakdownItem, DetailRow, SubMetric};
pub use charts::{ChartUnavailable, DonutChart, LiquidGauge, RadarChart};
pub use config::{DonutConfig, GaugeConfig, HealthChartConfig, RadarConfig};
pub use dimensions::{DimensionBar, DimensionList};
pub use donut::DonutModel;
pub use grade::{grade_color, Grade, GradeBadge, DEFAULT_GRADE_COLOR};
pub use hover::HoverState;
pub use liquid::GaugeModel;
pub use panel::PanelState;
pub use radar::{dimension_color, RadarModel, AXES};
