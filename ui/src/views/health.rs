use api::{DimensionKey, FetchError, HealthSource, MetricsPayload, SharedSource};
use dioxus::prelude::*;

use crate::{
    core::format::format_timestamp,
    health::{
        dimension_color, ChartUnavailable, DimensionList, GradeBadge, HealthChartConfig,
        LiquidGauge, RadarChart,
    },
    i18n::{self, dimension_label},
    t,
};

/// What the health card can show.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HealthState {
    #[default]
    Loading,
    NoData,
    Ready(MetricsPayload),
}

impl HealthState {
    /// Collapse a fetch outcome into a display state. Failures never reach the
    /// charts; they are logged and shown as "no data".
    pub fn from_fetch(result: Result<MetricsPayload, FetchError>) -> Self {
        match result {
            Ok(payload) => HealthState::Ready(payload),
            Err(err) => {
                tracing::warn!(%err, "health payload unavailable");
                HealthState::NoData
            }
        }
    }

    pub fn payload(&self) -> Option<&MetricsPayload> {
        match self {
            HealthState::Ready(payload) => Some(payload),
            _ => None,
        }
    }
}

#[component]
pub fn ProjectHealth(state: HealthState, #[props(default)] config: HealthChartConfig) -> Element {
    // Re-render when the platform's language signal changes.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|c| c()).unwrap_or_default();

    let body = match (&state, config.validate()) {
        (HealthState::Loading, _) => rsx! {
            div { class: "health-card__placeholder health-card__placeholder--loading",
                {t!("health-loading")}
            }
        },
        (HealthState::NoData, _) => rsx! {
            div { class: "health-card__placeholder", {t!("health-no-data")} }
        },
        (HealthState::Ready(_), Err(err)) => {
            tracing::error!(%err, "health chart configuration rejected");
            rsx! { ChartUnavailable {} }
        }
        (HealthState::Ready(payload), Ok(())) => rsx! {
            HealthReport { payload: payload.clone(), config }
        },
    };

    rsx! {
        section { class: "health-card",
            div { style: "display:none", "{_lang_marker}" }
            header { class: "health-card__header",
                div { class: "health-card__heading",
                    h2 { class: "health-card__title", {t!("health-title")} }
                    if let Some(payload) = state.payload() {
                        span { class: "health-card__project", "{payload.display_name()}" }
                    } else {
                        span { class: "health-card__subtitle", {t!("health-subtitle")} }
                    }
                }
                div { class: "health-card__actions",
                    LanguageSwitcher {}
                    if let Some(payload) = state.payload() {
                        GradeBadgeView { payload: payload.clone() }
                    }
                }
            }
            {body}
        }
    }
}

/// Routed page: loads `project` from the source in context (the bundled demo
/// fixtures when the platform provides none) and renders its card.
#[component]
pub fn HealthPage(project: String) -> Element {
    let source = try_use_context::<SharedSource>().unwrap_or_default();
    let state = HealthState::from_fetch(source.load(&project));

    rsx! {
        section { class: "page page-health",
            ProjectHealth { state }
        }
    }
}

#[component]
fn HealthReport(payload: MetricsPayload, config: HealthChartConfig) -> Element {
    let badge = GradeBadge::resolve(&payload);
    let calculated = payload
        .calculated_at
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(format_timestamp)
        .filter(|when| !when.is_empty());

    rsx! {
        div { class: "health-card__charts",
            div { class: "health-card__panel health-card__panel--gauge",
                LiquidGauge { score: payload.final_score, color: badge.color.clone(), config: config.gauge }
            }
            div { class: "health-card__panel health-card__panel--radar",
                h3 { class: "health-card__section-title", {t!("health-dimension-map")} }
                RadarChart {
                    dimensions: payload.dimensions.clone(),
                    color: badge.color.clone(),
                    config: config.radar,
                }
            }
        }

        if !payload.dimensions.is_empty() {
            DimensionList { dimensions: payload.dimensions.clone(), donut: config.donut }
        }

        footer { class: "health-card__footer",
            div { class: "health-card__weights",
                span { class: "health-card__weights-title", {t!("health-weights")} }
                for (key, dimension) in payload.dimensions.iter() {
                    span { key: "{key}", class: "health-card__weight",
                        span { class: "health-dimension__dot", style: "background: {dimension_color(key)}" }
                        "{dimension_label(key)} {weight_label(&payload, key, &dimension.weight)}"
                    }
                }
            }
            if let Some(when) = calculated {
                span { class: "health-card__timestamp", {t!("health-calculated-at", when = when)} }
            }
        }
    }
}

#[component]
fn GradeBadgeView(payload: MetricsPayload) -> Element {
    let badge = GradeBadge::resolve(&payload);
    let label = badge.display_label();
    let caption = t!("health-grade-caption");

    rsx! {
        div {
            class: "{badge_class(&badge)}",
            style: "border-color: {badge.color}40; background: {badge.color}15;",
            span { class: "health-grade__letter", style: "color: {badge.color}", "{badge.letter}" }
            div { class: "health-grade__text",
                span { class: "health-grade__label", style: "color: {badge.color}", "{label}" }
                span { class: "health-grade__caption", "{caption}" }
            }
        }
    }
}

/// The dimension's own weight text, else the composite weight as a percentage.
fn weight_label(payload: &MetricsPayload, key: DimensionKey, supplied: &str) -> String {
    match supplied.trim() {
        "" => match payload.weights.as_ref().map_or(0.0, |w| w.get(key)) {
            w if w > 0.0 => format!("{:.0}%", w * 100.0),
            _ => String::new(),
        },
        text => text.to_string(),
    }
}

fn badge_class(badge: &GradeBadge) -> String {
    let mut class = String::from("health-grade");
    if badge.mismatch {
        class.push_str(" health-grade--mismatch");
    }
    if badge.off_band {
        class.push_str(" health-grade--off-band");
    }
    class
}

#[component]
fn LanguageSwitcher() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Seeded from the platform signal so a remount keeps the active selection.
    let mut current_lang = use_signal(|| {
        lang_code
            .map(|code| code())
            .unwrap_or_else(|| "en-US".to_string())
    });
    let langs = use_signal(i18n::available_languages);

    if langs().len() < 2 {
        return rsx! {};
    }

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    rsx! {
        div { class: "health-card__locale",
            label { class: "visually-hidden", r#for: "health-locale", {t!("health-language-label")} }
            select {
                id: "health-locale",
                value: "{current_lang()}",
                oninput: on_change,
                for code in langs().iter() {
                    option { key: "{code}", value: "{code}", "{code}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{FixtureSource, DEMO_PROJECT};

    struct Unreachable;

    impl HealthSource for Unreachable {
        fn load(&self, _project: &str) -> Result<MetricsPayload, FetchError> {
            Err(FetchError::Transport("scoring service timed out".into()))
        }
    }

    #[test]
    fn fetch_failure_is_no_data() {
        let state = HealthState::from_fetch(FixtureSource::demo().load("missing"));
        assert_eq!(state, HealthState::NoData);
        assert!(state.payload().is_none());
    }

    #[test]
    fn fetch_success_is_ready() {
        let state = HealthState::from_fetch(FixtureSource::demo().load(DEMO_PROJECT));
        let payload = state.payload().expect("demo payload");
        assert_eq!(payload.display_name(), "vuejs/core");
    }

    #[test]
    fn any_source_can_back_the_page() {
        let shared = SharedSource::new(Unreachable);
        assert_eq!(
            HealthState::from_fetch(shared.load(DEMO_PROJECT)),
            HealthState::NoData
        );

        let fallback = SharedSource::default();
        assert!(HealthState::from_fetch(fallback.load(DEMO_PROJECT))
            .payload()
            .is_some());
    }

    #[test]
    fn weights_fall_back_to_composite_fractions() {
        let payload = MetricsPayload::from_value(serde_json::json!({
            "weights": { "growth": 0.2, "activity": 0.4 }
        }))
        .unwrap();
        assert_eq!(weight_label(&payload, DimensionKey::Growth, " 25% "), "25%");
        assert_eq!(weight_label(&payload, DimensionKey::Activity, ""), "40%");
        assert_eq!(weight_label(&payload, DimensionKey::Code, ""), "");
    }

    #[test]
    fn badge_class_carries_both_flags() {
        let payload = MetricsPayload::from_value(serde_json::json!({
            "grade": "A", "grade_color": "#22c55e", "final_score": 55
        }))
        .unwrap();
        let badge = GradeBadge::resolve(&payload);
        assert_eq!(
            badge_class(&badge),
            "health-grade health-grade--mismatch health-grade--off-band"
        );
    }

    #[test]
    fn default_state_is_loading() {
        assert_eq!(HealthState::default(), HealthState::Loading);
    }

    #[test]
    fn malformed_payload_is_no_data() {
        let source = FixtureSource::new().with_payload("broken", "{ not json");
        assert_eq!(
            HealthState::from_fetch(source.load("broken")),
            HealthState::NoData
        );
    }
}
