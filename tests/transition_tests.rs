use approx::assert_relative_eq;
use scatter_rs::animation::Easing;
use scatter_rs::api::{EntranceMode, ScatterChart, ScatterChartConfig};
use scatter_rs::core::{Axis, Field, Point};
use scatter_rs::render::NullRenderer;

const AL_AK: &str = "\
state,abbr,poverty,age,income,healthcare,obesity,smokes
Alabama,AL,18,38,43000,12,33,21
Alaska,AK,11,33,70000,15,29,22
";

fn linear_chart(entrance: EntranceMode) -> ScatterChart<NullRenderer> {
    let config = ScatterChartConfig::default()
        .with_easing(Easing::Linear)
        .with_entrance(entrance)
        .with_entrance_seed(42);
    ScatterChart::from_csv_str(NullRenderer::default(), AL_AK, config).expect("chart init")
}

#[test]
fn first_axis_render_is_immediate() {
    let chart = linear_chart(EntranceMode::InPlace);
    assert!(!chart.axis_layer(Axis::X).is_animating());
    assert!(!chart.axis_layer(Axis::Y).is_animating());
    assert!(!chart.is_animating());
}

#[test]
fn scatter_entrance_starts_on_plot_corners_and_lands_on_targets() {
    let mut chart = linear_chart(EntranceMode::Scatter);
    let targets = chart.marker_targets();
    for origin in chart.marker_positions() {
        assert!(origin.x == 0.0 || origin.x == 840.0);
        assert!(origin.y == 0.0 || origin.y == 680.0);
    }
    assert!(chart.tick(500.0).expect("tick"));
    assert!(!chart.tick(1_000.0).expect("tick"));
    assert_eq!(chart.marker_positions(), targets);
}

#[test]
fn seeded_entrance_is_deterministic() {
    let a = linear_chart(EntranceMode::Scatter);
    let b = linear_chart(EntranceMode::Scatter);
    assert_eq!(a.marker_positions(), b.marker_positions());
}

#[test]
fn axis_domain_interpolates_during_transition() {
    let mut chart = linear_chart(EntranceMode::InPlace);
    chart.on_label_click(Field::Age).expect("click");
    chart.tick(500.0).expect("tick");

    let drawn = chart
        .axis_layer(Axis::X)
        .scale_at(chart.now_ms())
        .expect("scale")
        .expect("active");
    assert_relative_eq!(drawn.domain().0, (10.45 + 31.35) / 2.0, epsilon = 1e-9);
    assert_relative_eq!(drawn.domain().1, (18.9 + 39.9) / 2.0, epsilon = 1e-9);
    // Labels flip immediately, only the axis geometry animates.
    assert_eq!(chart.axis_layer(Axis::X).field(), Some(Field::Age));
}

#[test]
fn retarget_mid_flight_starts_from_current_position() {
    let mut chart = linear_chart(EntranceMode::InPlace);
    chart.on_label_click(Field::Age).expect("click");
    chart.tick(400.0).expect("tick");
    let mid_flight = chart.marker_positions();

    chart.on_label_click(Field::Income).expect("click");
    assert_eq!(chart.marker_positions(), mid_flight);

    let income = chart.scale(Axis::X).expect("x scale");
    chart.tick(900.0).expect("tick");
    let halfway = chart.marker_positions();
    let expected = Point::new(
        (mid_flight[0].x + income.map(43000.0)) / 2.0,
        mid_flight[0].y,
    );
    assert_relative_eq!(halfway[0].x, expected.x, epsilon = 1e-9);
    assert_relative_eq!(halfway[0].y, expected.y, epsilon = 1e-9);

    assert!(!chart.tick(1_400.0).expect("tick"));
    assert_eq!(chart.marker_positions()[0].x, income.map(43000.0));
}

#[test]
fn clock_never_runs_backwards() {
    let mut chart = linear_chart(EntranceMode::Scatter);
    chart.tick(300.0).expect("tick");
    let positions = chart.marker_positions();
    chart.tick(100.0).expect("tick");
    assert_eq!(chart.now_ms(), 300.0);
    assert_eq!(chart.marker_positions(), positions);
    assert!(chart.tick(f64::NAN).is_err());
}
