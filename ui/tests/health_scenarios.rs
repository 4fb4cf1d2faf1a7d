//! End-to-end checks from payload JSON to chart models.

use api::{
    DimensionKey, FixtureSource, HealthSource, MetricsPayload, DEMO_PROJECT, FAILED_PROJECT,
    UPSTREAM_PROJECT,
};
use serde_json::json;
use ui::core::geometry::Point;
use ui::health::{
    build_breakdown, grade_color, DonutConfig, DonutModel, GaugeConfig, GaugeModel, GradeBadge,
    RadarConfig, RadarModel, DEFAULT_GRADE_COLOR,
};
use ui::views::HealthState;

fn payload(value: serde_json::Value) -> MetricsPayload {
    MetricsPayload::from_value(value).expect("payload decodes")
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn radar_positions_follow_scores() {
    let payload = payload(json!({
        "grade": "C",
        "dimensions": {
            "growth": { "score": 80 },
            "activity": { "score": 60 },
            "contribution": { "score": 40 },
            "code": { "score": 20 }
        }
    }));
    let config = RadarConfig::default();
    let model = RadarModel::build(&payload.dimensions, "#22c55e", &config).unwrap();
    let c = model.center;
    let r = config.max_radius;

    assert_eq!(model.center_label(), "50.0");

    let expected = [
        Point::new(c.x, c.y - 0.8 * r),
        Point::new(c.x + 0.6 * r, c.y),
        Point::new(c.x, c.y + 0.4 * r),
        Point::new(c.x - 0.2 * r, c.y),
    ];
    for (axis, want) in model.axes.iter().zip(expected) {
        assert!(
            axis.point.distance(want) < 1e-9,
            "{} at {:?}, expected {:?}",
            axis.axis.key,
            axis.point,
            want
        );
    }
    assert!(model.path.to_string().starts_with('M'));
    assert!(model.path.to_string().ends_with('Z'));
}

#[test]
fn growth_breakdown_splits_star_and_fork() {
    let payload = payload(json!({
        "dimensions": {
            "growth": { "score": 55, "star_score": 30, "fork_score": 10 }
        }
    }));
    let growth = payload.dimensions.growth.as_ref().unwrap();
    let items = build_breakdown(DimensionKey::Growth, growth);

    let shares: Vec<f64> = items.iter().map(|i| i.percentage).collect();
    assert_eq!(shares, [75.0, 25.0]);
    assert_eq!(items[0].percentage_label(), "75.0%");

    let donut = DonutModel::build(&items, &DonutConfig::default()).unwrap();
    assert_eq!(donut.slices.len(), 2);
}

#[test]
fn gauge_fill_and_ring_match_score() {
    let config = GaugeConfig::default();
    let model = GaugeModel::build(37.2, "#22c55e", &config).unwrap();
    let inner = config.inner_radius().unwrap();

    assert_eq!(model.label, "37.2");
    assert!(close(model.fill.height, 2.0 * inner * 0.372));
    assert!(close(model.dash_offset, model.circumference * 0.628));
    assert!(close(model.fill.top_y, model.center.y + inner - model.fill.height));
}

#[test]
fn empty_code_breakdown_is_zero_not_nan() {
    let payload = payload(json!({
        "dimensions": {
            "code": {
                "score": 12,
                "details": { "pull_additions": 0, "pull_deletions": 0 }
            }
        }
    }));
    let code = payload.dimensions.code.as_ref().unwrap();
    let items = build_breakdown(DimensionKey::Code, code);

    assert_eq!(items.len(), 2);
    for item in &items {
        assert_eq!(item.percentage, 0.0);
        assert!(!item.percentage.is_nan());
    }
    let donut = DonutModel::build(&items, &DonutConfig::default()).unwrap();
    assert!(donut.slices.is_empty());
}

#[test]
fn unknown_grade_uses_default_color() {
    assert_eq!(grade_color("X"), DEFAULT_GRADE_COLOR);

    let badge = GradeBadge::resolve(&payload(json!({ "grade": "X", "final_score": 12 })));
    assert_eq!(badge.color, DEFAULT_GRADE_COLOR);
    assert!(!badge.mismatch);
}

#[test]
fn demo_fixture_renders_every_model() {
    let state = HealthState::from_fetch(FixtureSource::demo().load(DEMO_PROJECT));
    let payload = state.payload().expect("demo payload is ready");
    let badge = GradeBadge::resolve(payload);

    let radar = RadarModel::build(&payload.dimensions, &badge.color, &RadarConfig::default());
    assert!(radar.is_ok());
    let gauge = GaugeModel::build(payload.final_score, &badge.color, &GaugeConfig::default());
    assert!(gauge.is_ok());

    for (key, dimension) in payload.dimensions.iter() {
        let items = build_breakdown(key, dimension);
        let total: f64 = items.iter().map(|i| i.percentage).sum();
        assert!(close(total, 100.0) || total == 0.0, "{key} shares sum to {total}");
        assert!(DonutModel::build(&items, &DonutConfig::default()).is_ok());
    }
}

#[test]
fn missing_project_is_no_data() {
    let state = HealthState::from_fetch(FixtureSource::demo().load("nobody/nothing"));
    assert_eq!(state, HealthState::NoData);
}

#[test]
fn failed_scoring_record_still_renders() {
    let state = HealthState::from_fetch(FixtureSource::demo().load(FAILED_PROJECT));
    let payload = state.payload().expect("failed record is still a card");
    assert!(payload.dimensions.is_empty());

    let badge = GradeBadge::resolve(payload);
    assert_eq!(badge.grade, None);
    assert_eq!(badge.display_label(), "无数据");

    let radar = RadarModel::build(&payload.dimensions, &badge.color, &RadarConfig::default())
        .expect("radar over no dimensions");
    assert_eq!(radar.center_label(), "0.0");
}

#[test]
fn null_and_absent_text_fields_do_not_blank_the_card() {
    let raw = r#"{
        "project": null,
        "repo_name": "vuejs/core",
        "final_score": 64.5,
        "grade": "B",
        "grade_label": null,
        "grade_color": 7,
        "dimensions": {
            "growth": { "name": null, "weight": null, "score": 40 },
            "code": null
        }
    }"#;
    let source = FixtureSource::new().with_payload("sparse", raw);
    let state = HealthState::from_fetch(source.load("sparse"));
    let payload = state.payload().expect("sparse payload is ready");

    assert_eq!(payload.project, "");
    assert_eq!(payload.display_name(), "vuejs/core");
    let growth = payload.dimensions.growth.as_ref().expect("growth survives");
    assert_eq!(growth.name, "");
    assert_eq!(growth.weight, "");
    assert!(payload.dimensions.code.is_none());

    let badge = GradeBadge::resolve(payload);
    assert_eq!(badge.label, None);
    assert_eq!(badge.color, grade_color("B"));
    assert!(!badge.mismatch);
    assert!(!badge.off_band);
}

#[test]
fn dimensions_null_payload_is_ready_not_no_data() {
    let source = FixtureSource::new().with_payload(
        "unscored",
        r#"{ "project": "x/y", "final_score": 0, "grade": "N/A", "dimensions": null }"#,
    );
    let state = HealthState::from_fetch(source.load("unscored"));
    assert_ne!(state, HealthState::NoData);
    assert!(state.payload().is_some_and(|p| p.dimensions.is_empty()));
}

#[test]
fn upstream_palette_is_rendered_and_flagged() {
    let state = HealthState::from_fetch(FixtureSource::demo().load(UPSTREAM_PROJECT));
    let payload = state.payload().expect("upstream payload is ready");
    let badge = GradeBadge::resolve(payload);

    assert_eq!(badge.color, "#22c55e");
    assert_ne!(badge.color, grade_color(&payload.grade));
    assert!(badge.mismatch);
    assert_eq!(badge.display_label(), "优秀");

    let gauge = GaugeModel::build(payload.final_score, &badge.color, &GaugeConfig::default());
    assert!(gauge.is_ok());
}
