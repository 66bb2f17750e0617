use approx::assert_relative_eq;
use census_scatter::api::ScatterChart;
use census_scatter::core::{Axis, AxisChoice, Dataset, Metric, Record, XMetric, YMetric};
use census_scatter::interaction::{AxisSelection, ClickOutcome, LabelClass};
use census_scatter::render::NullRenderer;
use census_scatter::{ChartConfig, ScatterError};

fn record(abbr: &str, poverty: f64, age: f64, healthcare: f64) -> Record {
    Record {
        state: format!("State {abbr}"),
        abbr: abbr.to_owned(),
        poverty,
        healthcare,
        age,
        income: 50_000.0,
        smokes: 18.0,
        obesity: 28.0,
    }
}

fn chart_with(records: Vec<Record>) -> ScatterChart<NullRenderer> {
    let mut chart =
        ScatterChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");
    chart
        .set_dataset(Dataset::new(records).expect("dataset"))
        .expect("layout");
    chart
}

fn two_states() -> ScatterChart<NullRenderer> {
    // Poverty and age rank the two states in opposite orders.
    chart_with(vec![
        record("AA", 10.0, 40.0, 12.0),
        record("BB", 20.0, 30.0, 8.0),
    ])
}

#[test]
fn default_selection_is_poverty_against_healthcare() {
    let chart = two_states();

    assert_eq!(
        chart.selection(),
        AxisSelection::new(XMetric::Poverty, YMetric::Healthcare)
    );
    assert_eq!(
        chart.label_class(Axis::X, "poverty").expect("class"),
        LabelClass::Active
    );
    assert_eq!(
        chart.label_class(Axis::X, "age").expect("class"),
        LabelClass::Inactive
    );
    assert_eq!(
        chart.label_class(Axis::Y, "healthcare").expect("class"),
        LabelClass::Active
    );
}

#[test]
fn exactly_one_active_label_per_group() {
    let mut chart = two_states();
    chart.click_label(Axis::Y, "obesity").expect("click");

    for axis in [Axis::X, Axis::Y] {
        let active = chart
            .axis_labels(axis)
            .iter()
            .filter(|label| label.class == LabelClass::Active)
            .count();
        assert_eq!(active, 1, "axis {axis}");
    }
}

#[test]
fn points_are_ordered_by_the_selected_metric() {
    let chart = two_states();
    let positions = chart.point_positions();

    assert!(positions[0].0 < positions[1].0);
    // Higher healthcare value sits higher on screen.
    assert!(positions[0].1 < positions[1].1);
}

#[test]
fn clicking_age_swaps_classes_and_reorders_points() {
    let mut chart = two_states();

    let outcome = chart.click_label(Axis::X, "age").expect("click");
    assert!(outcome.is_changed());
    assert_eq!(chart.selection().metric(Axis::X), Metric::Age);
    assert_eq!(
        chart.label_class(Axis::X, "age").expect("class"),
        LabelClass::Active
    );
    assert_eq!(
        chart.label_class(Axis::X, "poverty").expect("class"),
        LabelClass::Inactive
    );

    chart.finish_animations();
    let positions = chart.point_positions();
    assert!(positions[0].0 > positions[1].0);

    let scale = chart.scale(Axis::X).expect("x scale");
    assert_relative_eq!(scale.domain().0, 30.0 * 0.92);
    assert_relative_eq!(scale.domain().1, 40.0 * 1.05);
}

#[test]
fn clicking_the_active_label_changes_nothing() {
    let mut chart = two_states();
    let before = chart.snapshot();

    let outcome = chart.click_label(Axis::X, "poverty").expect("click");
    assert_eq!(outcome, ClickOutcome::Unchanged);
    assert!(!chart.is_animating());
    assert_eq!(chart.snapshot(), before);
}

#[test]
fn x_click_leaves_y_untouched() {
    let mut chart = two_states();
    let y_before: Vec<f64> = chart.point_positions().iter().map(|p| p.1).collect();
    let y_scale = chart.scale(Axis::Y);

    chart.click_label(Axis::X, "income").expect("click");
    chart.step(400.0).expect("step");

    let y_now: Vec<f64> = chart.point_positions().iter().map(|p| p.1).collect();
    assert_eq!(y_now, y_before);
    assert_eq!(chart.scale(Axis::Y), y_scale);
    assert_eq!(chart.selection().metric(Axis::Y), Metric::Healthcare);
}

#[test]
fn round_trip_selection_restores_positions() {
    let mut chart = two_states();
    let before = chart.point_positions();
    let x_scale = chart.scale(Axis::X);

    chart.click_label(Axis::X, "age").expect("age");
    chart.finish_animations();
    chart.click_label(Axis::X, "poverty").expect("poverty");
    chart.finish_animations();

    assert_eq!(chart.point_positions(), before);
    assert_eq!(chart.scale(Axis::X), x_scale);
}

#[test]
fn unknown_field_is_rejected_without_side_effects() {
    let mut chart = two_states();
    let before = chart.snapshot();

    let err = chart.click_label(Axis::X, "height").expect_err("unknown field");
    assert!(matches!(err, ScatterError::InvalidField(_)));

    // A y metric is not a valid x label.
    let err = chart.click_label(Axis::X, "obesity").expect_err("wrong axis");
    assert!(matches!(err, ScatterError::InvalidField(_)));

    assert_eq!(chart.snapshot(), before);
}

#[test]
fn typed_selection_matches_string_click() {
    let mut by_name = two_states();
    let mut typed = two_states();

    by_name.click_label(Axis::Y, "smokes").expect("click");
    typed
        .select(AxisChoice::Y(YMetric::Smokes))
        .expect("select");
    by_name.finish_animations();
    typed.finish_animations();

    assert_eq!(by_name.point_positions(), typed.point_positions());
}

#[test]
fn click_before_load_is_not_initialized() {
    let mut chart =
        ScatterChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");

    let err = chart.click_label(Axis::X, "age").expect_err("no data");
    assert!(matches!(err, ScatterError::NotInitialized));
    assert_eq!(chart.selection(), AxisSelection::default());
}

#[test]
fn configured_selection_is_used_at_load() {
    let config = ChartConfig::default()
        .with_selection(AxisSelection::new(XMetric::Income, YMetric::Obesity));
    let mut chart = ScatterChart::new(NullRenderer::default(), config).expect("chart init");
    chart
        .set_dataset(
            Dataset::new(vec![record("AA", 10.0, 40.0, 12.0)]).expect("dataset"),
        )
        .expect("layout");

    assert_eq!(
        chart.label_class(Axis::X, "income").expect("class"),
        LabelClass::Active
    );
    assert_eq!(
        chart.label_class(Axis::Y, "obesity").expect("class"),
        LabelClass::Active
    );
}
