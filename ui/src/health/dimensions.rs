use api::{Dimension, DimensionKey, Dimensions};
use dioxus::prelude::*;

use crate::{
    core::{format::format_score, geometry::clamp_score},
    i18n::{detail_label, dimension_label, sub_metric_label},
    t,
};

use super::{
    breakdown::{build_breakdown, detail_rows},
    charts::DonutChart,
    config::DonutConfig,
    panel::PanelState,
    radar::dimension_color,
};

/// Dimension bars with a single expandable breakdown panel.
#[component]
pub fn DimensionList(dimensions: Dimensions, donut: DonutConfig) -> Element {
    let mut panel = use_signal(PanelState::default);
    let expanded = panel().expanded();

    rsx! {
        div { class: "health-dimensions",
            h3 { class: "health-card__section-title", {t!("health-metrics")} }
            for (key, dimension) in dimensions.iter() {
                DimensionBar {
                    key: "{key}",
                    dimension_key: key,
                    dimension: dimension.clone(),
                    expanded: expanded == Some(key),
                    donut,
                    on_toggle: move |_| panel.write().toggle(key),
                }
            }
        }
    }
}

#[component]
pub fn DimensionBar(
    dimension_key: DimensionKey,
    dimension: Dimension,
    expanded: bool,
    donut: DonutConfig,
    on_toggle: EventHandler<()>,
) -> Element {
    let color = dimension_color(dimension_key);
    let name = if dimension.name.trim().is_empty() {
        dimension_label(dimension_key)
    } else {
        dimension.name.clone()
    };
    let width = clamp_score(dimension.score);
    let score = format_score(dimension.score);
    let toggle_label = t!("dimension-toggle");
    let chevron = if expanded { "▾" } else { "▸" };

    rsx! {
        div { class: if expanded { "health-dimension health-dimension--expanded" } else { "health-dimension" },
            button {
                class: "health-dimension__header",
                r#type: "button",
                aria_expanded: if expanded { "true" } else { "false" },
                title: "{toggle_label}",
                onclick: move |_| on_toggle.call(()),
                div { class: "health-dimension__title",
                    span { class: "health-dimension__dot", style: "background: {color}" }
                    span { class: "health-dimension__name", "{name}" }
                    if !dimension.weight.is_empty() {
                        span { class: "health-dimension__weight", "{dimension.weight}" }
                    }
                }
                div { class: "health-dimension__score",
                    span { style: "color: {color}", "{score}" }
                    span { class: "health-dimension__chevron", "{chevron}" }
                }
            }
            div { class: "health-dimension__track",
                div {
                    class: "health-dimension__bar",
                    style: "width: {width}%; background: {color};",
                }
            }
            if expanded {
                DimensionBreakdown { dimension_key, dimension: dimension.clone(), donut }
            }
        }
    }
}

#[component]
fn DimensionBreakdown(dimension_key: DimensionKey, dimension: Dimension, donut: DonutConfig) -> Element {
    let items = build_breakdown(dimension_key, &dimension);
    let rows = detail_rows(&dimension);

    rsx! {
        div { class: "health-breakdown",
            div { class: "health-breakdown__chart",
                DonutChart { items: items.clone(), config: donut }
                ul { class: "health-breakdown__legend",
                    for (idx, item) in items.iter().enumerate() {
                        li { key: "legend-{idx}", class: "health-breakdown__legend-item",
                            span { class: "health-breakdown__swatch", style: "background: {item.color}" }
                            span { class: "health-breakdown__legend-label", {sub_metric_label(item.metric)} }
                            span { class: "health-breakdown__legend-value", "{item.display_value}" }
                            span { class: "health-breakdown__legend-share", "{item.percentage_label()}" }
                        }
                    }
                }
            }
            if !rows.is_empty() {
                h4 { class: "health-breakdown__title", {t!("breakdown-details")} }
                dl { class: "health-breakdown__details",
                    for row in rows.iter() {
                        div { key: "{row.key}", class: "health-breakdown__row",
                            dt { {detail_label(&row.key).unwrap_or_else(|| row.key.clone())} }
                            dd { "{row.value}" }
                        }
                    }
                }
            }
        }
    }
}
