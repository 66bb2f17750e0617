use census_scatter::api::{ChartSnapshot, ScatterChart};
use census_scatter::core::{Axis, Margins, PaddingPolicy, Viewport, XMetric, YMetric};
use census_scatter::interaction::{AxisSelection, LabelClass};
use census_scatter::render::{Easing, NullRenderer};
use census_scatter::{ChartConfig, ScatterError};

#[test]
fn config_json_round_trip() {
    let config = ChartConfig::new(Viewport::new(800, 450), Margins::new(10.0, 20.0, 80.0, 90.0))
        .with_selection(AxisSelection::new(XMetric::Age, YMetric::Smokes))
        .with_padding(
            PaddingPolicy::additive_x_default(),
            PaddingPolicy::additive_y_default(),
        )
        .with_transition(750.0, Easing::Linear)
        .with_mount_selector("#chart");

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn config_json_fills_defaults() {
    let parsed = ChartConfig::from_json_str(r#"{ "selection": { "x": "income", "y": "obesity" } }"#)
        .expect("parse");

    assert_eq!(parsed.selection, AxisSelection::new(XMetric::Income, YMetric::Obesity));
    assert_eq!(parsed.viewport, Viewport::default());
    assert_eq!(parsed.x_padding, PaddingPolicy::multiplicative_x_default());
    assert_eq!(parsed.transition_ms, 1000.0);
    assert_eq!(parsed.mount_selector, "#scatter");
}

#[test]
fn padding_policy_is_tagged_in_json() {
    let parsed = ChartConfig::from_json_str(
        r#"{ "x_padding": { "kind": "additive", "low": 0.0, "high": 1.0 } }"#,
    )
    .expect("parse");
    assert_eq!(parsed.x_padding, PaddingPolicy::additive_x_default());
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = ChartConfig::default().with_transition(-5.0, Easing::Linear);
    let err = ScatterChart::new(NullRenderer::default(), config)
        .err()
        .expect("negative duration must fail");
    assert!(matches!(err, ScatterError::InvalidInput(_)));

    let config = ChartConfig::new(Viewport::new(120, 80), Margins::default());
    let err = ScatterChart::new(NullRenderer::default(), config)
        .err()
        .expect("margins must fail");
    assert!(matches!(err, ScatterError::InvalidMargins { .. }));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = ChartConfig::from_json_str("{ not json").expect_err("must fail");
    assert!(matches!(err, ScatterError::Serialization(_)));
}

#[test]
fn snapshot_reports_selection_and_label_classes() {
    let mut chart =
        ScatterChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");
    assert!(chart.load("tests/fixtures/states.csv"));
    chart.click_label(Axis::Y, "obesity").expect("click");

    let snapshot = chart.snapshot();
    assert_eq!(snapshot.points.len(), 3);
    assert_eq!(snapshot.points[0].abbr, "AL");
    assert!(snapshot.animating);
    assert_eq!(
        snapshot.selection,
        AxisSelection::new(XMetric::Poverty, YMetric::Obesity)
    );

    let keys: Vec<&str> = snapshot.label_classes.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        ["poverty", "age", "income", "healthcare", "smokes", "obesity"]
    );
    assert_eq!(snapshot.label_classes["obesity"], LabelClass::Active);
    assert_eq!(snapshot.label_classes["healthcare"], LabelClass::Inactive);
}

#[test]
fn snapshot_json_parses_back() {
    let mut chart =
        ScatterChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");
    assert!(chart.load("tests/fixtures/states.csv"));

    let json = chart.snapshot_json_pretty().expect("snapshot json");
    assert!(json.contains("\"label_classes\""));
    let parsed = ChartSnapshot::from_json_str(&json).expect("parse");

    assert_eq!(parsed.selection, chart.selection());
    assert_eq!(parsed.label_classes, chart.snapshot().label_classes);
    assert_eq!(parsed.points.len(), 3);
    assert!(!parsed.animating);
}

#[test]
fn empty_chart_snapshot_has_no_domains() {
    let chart =
        ScatterChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");
    let snapshot = chart.snapshot();

    assert!(snapshot.points.is_empty());
    assert_eq!(snapshot.x_domain, None);
    assert_eq!(snapshot.label_classes.len(), 6);
}
