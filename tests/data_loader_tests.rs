use census_scatter::api::ScatterChart;
use census_scatter::core::Metric;
use census_scatter::data::{DEFAULT_DATA_PATH, load_dataset, load_dataset_from_reader};
use census_scatter::render::NullRenderer;
use census_scatter::{ChartConfig, ScatterError};

const FIXTURE: &str = "tests/fixtures/states.csv";

#[test]
fn loads_records_and_ignores_extra_columns() {
    let dataset = load_dataset(FIXTURE).expect("load fixture");

    assert_eq!(dataset.len(), 3);
    let alabama = dataset.get(0).expect("first record");
    assert_eq!(alabama.state, "Alabama");
    assert_eq!(alabama.abbr, "AL");
    assert_eq!(alabama.value(Metric::Poverty), 19.3);
    assert_eq!(alabama.value(Metric::Income), 42_830.0);
    assert_eq!(alabama.value(Metric::Smokes), 21.1);
}

#[test]
fn record_order_follows_the_file() {
    let dataset = load_dataset(FIXTURE).expect("load fixture");
    let abbrs: Vec<&str> = dataset
        .records()
        .iter()
        .map(|record| record.abbr.as_str())
        .collect();

    assert_eq!(abbrs, ["AL", "CO", "FL"]);
}

#[test]
fn reader_source_trims_whitespace() {
    let csv = "state, abbr, poverty, healthcare, age, income, smokes, obesity\n\
               Texas, TX, 17.2, 22.1, 34.3, 53207, 15.2, 31.9\n";
    let dataset = load_dataset_from_reader(csv.as_bytes()).expect("parse");

    let texas = dataset.get(0).expect("record");
    assert_eq!(texas.abbr, "TX");
    assert_eq!(texas.healthcare, 22.1);
}

#[test]
fn missing_column_is_reported_by_name() {
    let err = load_dataset("tests/fixtures/missing_column.csv").expect_err("must fail");
    match err {
        ScatterError::InvalidInput(message) => assert!(message.contains("smokes")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_numeric_metric_fails_the_load() {
    let err = load_dataset("tests/fixtures/non_numeric.csv").expect_err("must fail");
    assert!(matches!(err, ScatterError::DataLoad { .. }));
}

#[test]
fn missing_file_is_a_data_load_error() {
    let err = load_dataset("tests/fixtures/does_not_exist.csv").expect_err("must fail");
    assert!(matches!(err, ScatterError::DataLoad { .. }));
    assert!(err.to_string().contains("does_not_exist.csv"));
}

#[test]
fn unreachable_data_leaves_chart_uninitialized() {
    let mut chart =
        ScatterChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");

    assert!(!chart.load("tests/fixtures/does_not_exist.csv"));
    assert!(!chart.is_initialized());
    assert!(chart.point_positions().is_empty());

    let frame = chart.build_render_frame().expect("frame");
    assert!(frame.is_empty());
}

#[test]
fn failed_reload_keeps_previous_layout() {
    let mut chart =
        ScatterChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");
    assert!(chart.load(FIXTURE));
    let before = chart.point_positions();

    assert!(!chart.load("tests/fixtures/non_numeric.csv"));
    assert!(chart.is_initialized());
    assert_eq!(chart.point_positions(), before);
}

#[test]
fn bundled_dataset_loads_from_default_path() {
    let mut chart =
        ScatterChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");

    assert_eq!(chart.config().data_path, DEFAULT_DATA_PATH);
    assert!(chart.load_configured());
    assert!(chart.dataset().is_some_and(|dataset| dataset.len() > 10));
}
