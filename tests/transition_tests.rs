use approx::assert_relative_eq;
use census_scatter::api::ScatterChart;
use census_scatter::core::{Axis, Dataset, Record};
use census_scatter::render::{Easing, NullRenderer};
use census_scatter::{ChartConfig, ScatterError};

fn record(abbr: &str, poverty: f64, age: f64, income: f64) -> Record {
    Record {
        state: format!("State {abbr}"),
        abbr: abbr.to_owned(),
        poverty,
        healthcare: 10.0,
        age,
        income,
        smokes: 18.0,
        obesity: 28.0,
    }
}

fn chart(easing: Easing) -> ScatterChart<NullRenderer> {
    let config = ChartConfig::default().with_transition(1000.0, easing);
    let mut chart = ScatterChart::new(NullRenderer::default(), config).expect("chart init");
    chart
        .set_dataset(
            Dataset::new(vec![
                record("AA", 10.0, 40.0, 40_000.0),
                record("BB", 20.0, 30.0, 70_000.0),
                record("CC", 15.0, 35.0, 55_000.0),
            ])
            .expect("dataset"),
        )
        .expect("layout");
    chart
}

fn xs(chart: &ScatterChart<NullRenderer>) -> Vec<f64> {
    chart.point_positions().iter().map(|p| p.0).collect()
}

#[test]
fn points_move_gradually_and_settle_at_target() {
    let mut chart = chart(Easing::Linear);
    let start = xs(&chart);

    chart.click_label(Axis::X, "age").expect("click");
    assert!(chart.is_animating());
    assert_eq!(xs(&chart), start);

    let target: Vec<f64> = {
        let scale = chart.scale(Axis::X).expect("target scale");
        [40.0, 30.0, 35.0].map(|age| scale.map(age)).to_vec()
    };

    chart.step(500.0).expect("step");
    for ((now, from), to) in xs(&chart).into_iter().zip(&start).zip(&target) {
        assert_relative_eq!(now, (from + to) / 2.0, epsilon = 1e-9);
    }

    chart.step(500.0).expect("step");
    assert!(!chart.is_animating());
    assert_eq!(xs(&chart), target);
}

#[test]
fn cubic_easing_lags_at_the_start() {
    let mut chart = chart(Easing::CubicInOut);
    let start = xs(&chart);
    chart.click_label(Axis::X, "age").expect("click");
    let scale = chart.scale(Axis::X).expect("target scale");
    let target = scale.map(40.0);

    chart.step(250.0).expect("step");
    let moved = (xs(&chart)[0] - start[0]) / (target - start[0]);
    assert_relative_eq!(moved, 0.0625, epsilon = 1e-9);
}

#[test]
fn displayed_axis_interpolates_between_domains() {
    let mut chart = chart(Easing::Linear);
    let from = chart.displayed_scale(Axis::X).expect("scale").domain();

    chart.click_label(Axis::X, "age").expect("click");
    let to = chart.scale(Axis::X).expect("scale").domain();
    chart.step(500.0).expect("step");

    let mid = chart.displayed_scale(Axis::X).expect("scale").domain();
    assert_relative_eq!(mid.0, (from.0 + to.0) / 2.0, epsilon = 1e-9);
    assert_relative_eq!(mid.1, (from.1 + to.1) / 2.0, epsilon = 1e-9);
}

#[test]
fn mid_flight_click_restarts_from_drawn_positions() {
    let mut chart = chart(Easing::Linear);
    chart.click_label(Axis::X, "age").expect("age");
    chart.step(300.0).expect("step");
    let drawn = xs(&chart);

    chart.click_label(Axis::X, "income").expect("income");
    assert_eq!(xs(&chart), drawn);

    let income_scale = chart.scale(Axis::X).expect("income scale");
    chart.step(1000.0).expect("step");
    assert!(!chart.is_animating());
    assert_eq!(
        xs(&chart),
        [40_000.0, 70_000.0, 55_000.0].map(|v| income_scale.map(v)).to_vec()
    );
}

#[test]
fn superseded_request_never_commits() {
    let mut chart = chart(Easing::Linear);
    chart.click_label(Axis::X, "age").expect("age");
    let age_scale = chart.scale(Axis::X).expect("age scale");
    chart.step(100.0).expect("step");
    chart.click_label(Axis::X, "income").expect("income");
    let income_scale = chart.scale(Axis::X).expect("income scale");

    // Past the end of the first transition but not the second.
    chart.step(950.0).expect("step");
    assert!(chart.is_animating());
    assert_ne!(chart.displayed_scale(Axis::X), Some(age_scale));

    chart.finish_animations();
    assert_eq!(chart.scale(Axis::X), Some(income_scale));
    assert_eq!(chart.displayed_scale(Axis::X), Some(income_scale));
}

#[test]
fn axes_animate_independently() {
    let mut chart = chart(Easing::Linear);
    chart.click_label(Axis::X, "age").expect("x");
    chart.step(600.0).expect("step");
    chart.click_label(Axis::Y, "smokes").expect("y");

    chart.step(400.0).expect("step");
    let snapshot = chart.snapshot();
    assert!(snapshot.animating, "y transition still running");

    chart.step(600.0).expect("step");
    assert!(!chart.is_animating());
}

#[test]
fn zero_duration_transition_lands_on_next_step() {
    let config = ChartConfig::default().with_transition(0.0, Easing::CubicInOut);
    let mut chart = ScatterChart::new(NullRenderer::default(), config).expect("chart init");
    chart
        .set_dataset(Dataset::new(vec![record("AA", 10.0, 40.0, 40_000.0)]).expect("dataset"))
        .expect("layout");

    chart.click_label(Axis::X, "age").expect("click");
    chart.step(0.0).expect("step");
    assert!(!chart.is_animating());
}

#[test]
fn invalid_step_is_rejected() {
    let mut chart = chart(Easing::Linear);

    assert!(matches!(
        chart.step(-1.0),
        Err(ScatterError::InvalidInput(_))
    ));
    assert!(chart.step(f64::NAN).is_err());
    assert_eq!(chart.clock_ms(), 0.0);
}
