use approx::assert_relative_eq;
use census_scatter::ScatterError;
use census_scatter::core::{Dataset, Metric, PaddingPolicy, Record, build_scale, metric_extent};

fn record(abbr: &str, poverty: f64, healthcare: f64) -> Record {
    Record {
        state: format!("State {abbr}"),
        abbr: abbr.to_owned(),
        poverty,
        healthcare,
        age: 38.0,
        income: 50_000.0,
        smokes: 18.0,
        obesity: 28.0,
    }
}

#[test]
fn multiplicative_padding_widens_each_end() {
    let dataset =
        Dataset::new(vec![record("AA", 10.0, 5.0), record("BB", 20.0, 15.0)]).expect("dataset");

    let x = build_scale(
        &dataset,
        Metric::Poverty,
        (0.0, 820.0),
        PaddingPolicy::multiplicative_x_default(),
    )
    .expect("x scale");
    let y = build_scale(
        &dataset,
        Metric::Healthcare,
        (380.0, 0.0),
        PaddingPolicy::multiplicative_y_default(),
    )
    .expect("y scale");

    assert_relative_eq!(x.domain().0, 9.2);
    assert_relative_eq!(x.domain().1, 21.0);
    assert_relative_eq!(y.domain().0, 4.0);
    assert_relative_eq!(y.domain().1, 18.0);
    assert_eq!(y.range(), (380.0, 0.0));
}

#[test]
fn additive_padding_shifts_each_end() {
    let dataset =
        Dataset::new(vec![record("AA", 10.0, 5.0), record("BB", 20.0, 15.0)]).expect("dataset");

    let x = build_scale(
        &dataset,
        Metric::Poverty,
        (0.0, 820.0),
        PaddingPolicy::additive_x_default(),
    )
    .expect("x scale");
    let y = build_scale(
        &dataset,
        Metric::Healthcare,
        (380.0, 0.0),
        PaddingPolicy::additive_y_default(),
    )
    .expect("y scale");

    assert_eq!(x.domain(), (10.0, 21.0));
    assert_eq!(y.domain(), (5.0, 17.0));
}

#[test]
fn smaller_value_maps_left_of_larger_value() {
    let dataset =
        Dataset::new(vec![record("AA", 10.0, 5.0), record("BB", 20.0, 15.0)]).expect("dataset");
    let x = build_scale(
        &dataset,
        Metric::Poverty,
        (0.0, 820.0),
        PaddingPolicy::multiplicative_x_default(),
    )
    .expect("x scale");

    assert!(x.map(10.0) < x.map(20.0));
}

#[test]
fn empty_dataset_is_rejected() {
    let err = build_scale(
        &Dataset::default(),
        Metric::Poverty,
        (0.0, 820.0),
        PaddingPolicy::multiplicative_x_default(),
    )
    .expect_err("empty dataset must fail");

    assert!(matches!(err, ScatterError::InvalidInput(_)));
}

#[test]
fn flat_extent_is_widened() {
    let dataset =
        Dataset::new(vec![record("AA", 12.0, 0.0), record("BB", 12.0, 0.0)]).expect("dataset");

    let x = build_scale(&dataset, Metric::Poverty, (0.0, 820.0), PaddingPolicy::none())
        .expect("x scale");
    assert_eq!(x.domain(), (11.5, 12.5));
    assert_relative_eq!(x.map(12.0), 410.0);

    // Zero scaled by any factor stays zero.
    let y = build_scale(
        &dataset,
        Metric::Healthcare,
        (380.0, 0.0),
        PaddingPolicy::multiplicative_y_default(),
    )
    .expect("y scale");
    assert_eq!(y.domain(), (-0.5, 0.5));
}

#[test]
fn invalid_padding_is_rejected() {
    let dataset = Dataset::new(vec![record("AA", 10.0, 5.0)]).expect("dataset");
    let padding = PaddingPolicy::Multiplicative {
        low: f64::NAN,
        high: 1.0,
    };

    assert!(build_scale(&dataset, Metric::Poverty, (0.0, 820.0), padding).is_err());
}

#[test]
fn extent_reports_min_and_max() {
    let dataset = Dataset::new(vec![
        record("AA", 14.0, 5.0),
        record("BB", 9.5, 15.0),
        record("CC", 21.25, 10.0),
    ])
    .expect("dataset");

    assert_eq!(
        metric_extent(&dataset, Metric::Poverty).expect("extent"),
        (9.5, 21.25)
    );
}

#[test]
fn negative_or_non_finite_values_are_rejected() {
    assert!(Dataset::new(vec![record("AA", -1.0, 5.0)]).is_err());
    assert!(Dataset::new(vec![record("AA", f64::NAN, 5.0)]).is_err());
}
