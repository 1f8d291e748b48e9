use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use flightgraph::processing::velocity;
use flightgraph::{
    DisplayMode, GraphConfig, GraphState, RawSample, Series, TimeRange, UnitSystem, Velocity,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2012, 5, 19, 16, 30, 0).unwrap()
}

fn straight_descent() -> Vec<RawSample> {
    [100.0, 90.0, 80.0, 70.0, 60.0]
        .iter()
        .enumerate()
        .map(|(i, &alt)| RawSample::new(t0() + TimeDelta::seconds(i as i64), 45.0, 7.0, alt))
        .collect()
}

#[test]
fn derived_descent_shows_ten_meters_per_second() {
    init_tracing();
    let mut samples = straight_descent();
    velocity::fill_missing(&mut samples);

    let raw = Series::build(&samples, DisplayMode::VerticalSpeed, UnitSystem::Metric, 0).unwrap();
    for v in &raw.y()[1..] {
        assert!((v - 36.0).abs() < 1e-9);
    }

    let smoothed =
        Series::build(&samples, DisplayMode::VerticalSpeed, UnitSystem::Metric, 3).unwrap();
    assert_eq!(smoothed.y()[0], raw.y()[0]);
    assert_eq!(smoothed.y()[4], raw.y()[4]);
    assert_eq!(smoothed.x(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn logged_descent_is_flat_after_smoothing() {
    let samples: Vec<RawSample> = straight_descent()
        .into_iter()
        .map(|s| s.with_velocity(Velocity::new(0.0, 0.0, 10.0)))
        .collect();
    let series = Series::build(&samples, DisplayMode::VerticalSpeed, UnitSystem::Metric, 3).unwrap();
    assert!(series.y().iter().all(|v| (v - 36.0).abs() < 1e-9));
}

#[test]
fn one_second_north_step() {
    let mut samples = vec![
        RawSample::new(t0(), 45.0, 7.0, 3000.0),
        RawSample::new(t0() + TimeDelta::seconds(1), 45.0001, 7.0, 2950.0),
    ];
    velocity::fill_missing(&mut samples);
    let v = samples[1].velocity.unwrap();
    assert!((v.north - 11.1).abs() < 0.05);
    assert!(v.east.abs() < 1e-9);
    assert!((v.down - 50.0).abs() < 1e-9);
}

#[test]
fn graph_session() {
    init_tracing();
    let config = GraphConfig::from_json(r#"{ "min_selection_rows": 1 }"#).unwrap();
    let mut graph = GraphState::new(config);
    graph.set_pixel_rect(egui::Rect::from_min_size(
        egui::pos2(5.0, 0.0),
        egui::vec2(400.0, 200.0),
    ));
    graph.set_source(straight_descent()).unwrap();
    graph.set_mode(DisplayMode::Altitude).unwrap();

    // Altitude is 0.1 km at the start; hover at the left edge reads it.
    let readout = graph.hover(egui::pos2(5.0, 100.0)).unwrap();
    assert_eq!(readout.label, "100m");

    graph.set_zoom(1.0, f64::MIN, 3.0, f64::MAX);
    let window = graph.viewport().bounds();
    let rows = TimeRange::from_time_window(graph.series(), window.min_x, window.max_x);
    assert_eq!(rows, TimeRange::Rows { min: 1, max: 3 });
    assert_eq!(
        TimeRange::from_rows(1, 3, graph.samples().len(), graph.config.min_selection_rows),
        rows
    );

    graph.set_units(UnitSystem::Imperial).unwrap();
    assert_eq!((graph.viewport().min_x, graph.viewport().max_x), (1.0, 3.0));
    assert_eq!(graph.mode().unit_caption(graph.units()), Some("ft (x1000)"));
}
