use api::Dimensions;
use dioxus::prelude::*;

use crate::{
    core::format::format_score,
    i18n::{dimension_label, sub_metric_label},
    t,
};

use super::{
    breakdown::BreakdownItem,
    config::{DonutConfig, GaugeConfig, RadarConfig},
    donut::DonutModel,
    hover::HoverState,
    liquid::GaugeModel,
    radar::RadarModel,
};

#[component]
pub fn ChartUnavailable() -> Element {
    rsx! {
        div { class: "health-chart health-chart--unavailable",
            p { class: "health-card__placeholder", {t!("chart-unavailable")} }
        }
    }
}

#[component]
pub fn RadarChart(dimensions: Dimensions, color: String, config: RadarConfig) -> Element {
    let mut hover = use_signal(HoverState::new);

    let model = match RadarModel::build(&dimensions, &color, &config) {
        Ok(model) => model,
        Err(err) => {
            tracing::error!(%err, "radar chart geometry rejected");
            return rsx! { ChartUnavailable {} };
        }
    };

    let size = config.size;
    let center = model.center;
    let hover_state = hover();
    let path = model.path.to_string();
    let center_label = model.center_label();
    let tooltip = hover_state.hovered().and_then(|idx| model.axis(idx)).map(|axis| {
        (
            dimension_label(axis.axis.key),
            format_score(axis.score),
            axis.axis.color,
        )
    });

    rsx! {
        div { class: "health-radar",
            svg {
                class: "health-radar__svg",
                width: size,
                height: size,
                view_box: "0 0 {size} {size}",
                onmouseleave: move |_| hover.write().clear(),
                defs {
                    radialGradient { id: "radarBgGradient", cx: "50%", cy: "50%", r: "50%",
                        stop { offset: "0%", stop_color: "rgba(0,0,0,0.02)" }
                        stop { offset: "100%", stop_color: "rgba(0,0,0,0)" }
                    }
                }

                circle {
                    cx: center.x, cy: center.y, r: model.max_radius + 18.0,
                    fill: "none", stroke: "rgba(0,0,0,0.06)", stroke_width: 1,
                }
                circle {
                    cx: center.x, cy: center.y, r: model.max_radius + 12.0,
                    fill: "url(#radarBgGradient)", stroke: "rgba(0,0,0,0.04)", stroke_width: 1,
                }

                for (idx, ring) in model.rings.iter().enumerate() {
                    circle {
                        key: "ring-{idx}",
                        cx: center.x, cy: center.y, r: ring.radius,
                        fill: "none",
                        stroke: if ring.dashed { "rgba(0,0,0,0.06)" } else { "rgba(0,0,0,0.12)" },
                        stroke_width: 1,
                        stroke_dasharray: if ring.dashed { "3 3" } else { "none" },
                    }
                }

                for axis in model.axes.iter() {
                    line {
                        key: "axis-{axis.axis.key}",
                        x1: center.x, y1: center.y, x2: axis.end.x, y2: axis.end.y,
                        stroke: axis.axis.color, stroke_width: 1, opacity: 0.3,
                    }
                }

                path { class: "health-radar__area", d: "{path}", fill: "{color}", fill_opacity: 0.15, stroke: "none" }
                path {
                    class: "health-radar__outline",
                    d: "{path}",
                    fill: "none",
                    stroke: "{color}",
                    stroke_width: 2.5,
                    stroke_linejoin: "round",
                    style: "filter: drop-shadow(0 0 6px {color}40)",
                }

                for (idx, axis) in model.axes.iter().enumerate() {
                    {
                        let hovered = hover_state.is_hovered(idx);
                        let point_r = if hovered { config.hovered_point_radius } else { config.point_radius };
                        rsx! {
                            g { key: "point-{idx}",
                                circle {
                                    cx: axis.point.x, cy: axis.point.y, r: point_r + 4.0,
                                    fill: axis.axis.color,
                                    opacity: if hovered { 0.3 } else { 0.1 },
                                }
                                circle {
                                    class: "health-radar__point",
                                    cx: axis.point.x, cy: axis.point.y, r: point_r,
                                    fill: if hovered { axis.axis.color } else { "#ffffff" },
                                    stroke: axis.axis.color,
                                    stroke_width: 2,
                                    onmouseenter: move |_| hover.write().enter(idx),
                                    onmouseleave: move |_| hover.write().leave(idx),
                                }
                            }
                        }
                    }
                }

                for (idx, axis) in model.axes.iter().enumerate() {
                    {
                        let hovered = hover_state.is_hovered(idx);
                        let dx = match axis.anchor.as_str() {
                            "start" => 8.0,
                            "end" => -8.0,
                            _ => 0.0,
                        };
                        let label = dimension_label(axis.axis.key);
                        let score = axis.score_label();
                        rsx! {
                            g {
                                key: "label-{idx}",
                                class: "health-radar__label",
                                onmouseenter: move |_| hover.write().enter(idx),
                                onmouseleave: move |_| hover.write().leave(idx),
                                text {
                                    x: axis.label_at.x + dx, y: axis.label_at.y - 8.0,
                                    text_anchor: axis.anchor.as_str(),
                                    fill: if hovered { axis.axis.color } else { "#6b7280" },
                                    class: "health-radar__label-name",
                                    "{label}"
                                }
                                text {
                                    x: axis.label_at.x + dx, y: axis.label_at.y + 12.0,
                                    text_anchor: axis.anchor.as_str(),
                                    fill: if hovered { axis.axis.color } else { "#374151" },
                                    class: "health-radar__label-score",
                                    "{score}"
                                }
                            }
                        }
                    }
                }

                circle {
                    cx: center.x, cy: center.y, r: config.center_disc_radius,
                    fill: "#ffffff", stroke: "{color}", stroke_width: 2,
                    style: "filter: drop-shadow(0 0 8px {color}30)",
                }
                text {
                    class: "health-radar__center",
                    x: center.x, y: center.y + 6.0,
                    text_anchor: "middle",
                    fill: "{color}",
                    "{center_label}"
                }
            }

            if let Some((label, score, axis_color)) = tooltip {
                div { class: "health-tooltip", style: "border-color: {axis_color}50",
                    span { class: "health-tooltip__label", "{label}: " }
                    span { class: "health-tooltip__value", style: "color: {axis_color}", "{score}" }
                }
            }
        }
    }
}

#[component]
pub fn LiquidGauge(score: f64, color: String, config: GaugeConfig) -> Element {
    let model = match GaugeModel::build(score, &color, &config) {
        Ok(model) => model,
        Err(err) => {
            tracing::error!(%err, "liquid gauge geometry rejected");
            return rsx! { ChartUnavailable {} };
        }
    };

    let size = config.size;
    let c = model.center;
    let (rect_at, rect_w, rect_h) = model.fill_rect();
    let (shine_at, shine_rx, shine_ry) = model.highlight();
    let wave = model.wave(0.0).to_string();
    let keyframes = model.wave_keyframes();
    let rotate = model.rotate_transform();
    let caption = t!("health-score-caption");

    rsx! {
        div { class: "health-gauge", style: "width: {size}px; height: {size}px;",
            svg {
                class: "health-gauge__svg",
                width: size,
                height: size,
                view_box: "0 0 {size} {size}",
                defs {
                    linearGradient { id: "liquidGradient", x1: "0%", y1: "100%", x2: "0%", y2: "0%",
                        stop { offset: "0%", stop_color: "{color}", stop_opacity: 0.9 }
                        stop { offset: "50%", stop_color: "{color}", stop_opacity: 0.6 }
                        stop { offset: "100%", stop_color: "{color}", stop_opacity: 0.3 }
                    }
                    clipPath { id: "liquidClip",
                        circle { cx: c.x, cy: c.y, r: model.inner_radius }
                    }
                }

                // decorative rings
                circle {
                    cx: c.x, cy: c.y, r: model.ring_radius + 15.0,
                    fill: "none", stroke: "rgba(0,0,0,0.05)", stroke_width: 1,
                }
                circle {
                    cx: c.x, cy: c.y, r: model.ring_radius + 8.0,
                    fill: "none", stroke: "{color}", stroke_width: 1, opacity: 0.2,
                }

                circle {
                    cx: c.x, cy: c.y, r: model.ring_radius,
                    fill: "none", stroke: "rgba(0,0,0,0.08)", stroke_width: model.stroke_width,
                }
                circle {
                    class: "health-gauge__progress",
                    cx: c.x, cy: c.y, r: model.ring_radius,
                    fill: "none",
                    stroke: "{color}",
                    stroke_width: model.stroke_width,
                    stroke_linecap: "round",
                    stroke_dasharray: model.circumference,
                    stroke_dashoffset: model.dash_offset,
                    transform: "{rotate}",
                    style: "filter: drop-shadow(0 0 6px {color}60)",
                }

                circle {
                    cx: c.x, cy: c.y, r: model.inner_radius,
                    fill: "#f8fafc", stroke: "rgba(0,0,0,0.06)", stroke_width: 1,
                }

                g { clip_path: "url(#liquidClip)",
                    rect {
                        class: "health-gauge__fill",
                        x: rect_at.x, y: rect_at.y, width: rect_w, height: rect_h,
                        fill: "url(#liquidGradient)",
                    }
                    path { class: "health-gauge__wave", d: "{wave}", fill: "{color}", opacity: 0.4,
                        animate {
                            "attributeName": "d",
                            "dur": "{model.surface.period_secs}s",
                            "repeatCount": "indefinite",
                            "values": "{keyframes}",
                        }
                    }
                    ellipse {
                        cx: shine_at.x, cy: shine_at.y, rx: shine_rx, ry: shine_ry,
                        fill: "rgba(255,255,255,0.1)",
                    }
                }

                circle { cx: c.x, cy: c.y, r: 4, fill: "{color}", opacity: 0.5 }
            }

            div { class: "health-gauge__label",
                span { class: "health-gauge__score", style: "color: {color}", "{model.label}" }
                span { class: "health-gauge__caption", "{caption}" }
            }
        }
    }
}

#[component]
pub fn DonutChart(items: Vec<BreakdownItem>, config: DonutConfig) -> Element {
    let mut hover = use_signal(HoverState::new);

    let model = match DonutModel::build(&items, &config) {
        Ok(model) => model,
        Err(err) => {
            tracing::error!(%err, "donut geometry rejected");
            return rsx! { ChartUnavailable {} };
        }
    };

    let size = config.size;
    let track = model.track.to_string();
    let tooltip = hover().hovered().and_then(|idx| items.get(idx)).map(|item| {
        (
            sub_metric_label(item.metric),
            item.display_value.clone(),
            item.percentage_label(),
            item.color,
        )
    });
    let value_caption = t!("breakdown-value");
    let share_caption = t!("breakdown-share");

    rsx! {
        div { class: "health-donut",
            svg {
                class: "health-donut__svg",
                width: size,
                height: size,
                view_box: "0 0 {size} {size}",
                onmouseleave: move |_| hover.write().clear(),
                path { d: "{track}", fill: "#e5e7eb", fill_rule: "evenodd" }
                for slice in model.slices.iter() {
                    {
                        let idx = slice.item;
                        let d = slice.path.to_string();
                        rsx! {
                            path {
                                key: "slice-{idx}",
                                class: "health-donut__slice",
                                d: "{d}",
                                fill: slice.color,
                                fill_rule: "evenodd",
                                stroke: "#ffffff",
                                stroke_width: 2,
                                onmouseenter: move |_| hover.write().enter(idx),
                                onmouseleave: move |_| hover.write().leave(idx),
                            }
                        }
                    }
                }
            }
            if let Some((label, value, share, color)) = tooltip {
                div { class: "health-tooltip health-tooltip--donut",
                    p { class: "health-tooltip__title", "{label}" }
                    p {
                        span { class: "health-tooltip__label", "{value_caption} " }
                        span { class: "health-tooltip__value", "{value}" }
                    }
                    p {
                        span { class: "health-tooltip__label", "{share_caption} " }
                        span { class: "health-tooltip__value", style: "color: {color}", "{share}" }
                    }
                }
            }
        }
    }
}
