use scatter_rs::api::{
    ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EntranceMode, LabelStatus, ScatterChart,
    ScatterChartConfig,
};
use scatter_rs::core::{Axis, Field};
use scatter_rs::render::NullRenderer;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/data.csv");

fn chart() -> ScatterChart<NullRenderer> {
    let config = ScatterChartConfig::default()
        .with_entrance(EntranceMode::Scatter)
        .with_entrance_seed(7);
    ScatterChart::from_csv_path(NullRenderer::default(), FIXTURE, config).expect("init")
}

#[test]
fn snapshot_reports_axes_labels_and_markers() {
    let mut chart = chart();
    chart.on_label_click(Field::Obesity).expect("click");
    chart.tick(250.0).expect("tick");

    let snapshot = chart.snapshot().expect("snapshot");
    assert_eq!(snapshot.now_ms, 250.0);
    assert_eq!(snapshot.axes.len(), 2);
    let y = &snapshot.axes[1];
    assert_eq!(y.axis, Axis::Y);
    assert_eq!(y.field, Field::Obesity);
    assert_ne!(y.domain, y.drawn_domain);
    assert_eq!(
        y.labels.iter().map(|(field, status)| (*field, *status)).collect::<Vec<_>>(),
        vec![
            (Field::Healthcare, LabelStatus::Inactive),
            (Field::Smokes, LabelStatus::Inactive),
            (Field::Obesity, LabelStatus::Active),
        ]
    );
    assert_eq!(snapshot.markers.len(), 12);
    assert_eq!(snapshot.markers[0].abbr, "AL");
}

#[test]
fn snapshot_json_contract_round_trips() {
    let mut chart = chart();
    chart.on_label_click(Field::Age).expect("click");
    chart.tick(600.0).expect("tick");
    let snapshot = chart.snapshot().expect("snapshot");

    let contract = chart.snapshot_json_contract_v1_pretty().expect("contract json");
    assert!(contract.contains(&format!(
        "\"schema_version\": {ENGINE_SNAPSHOT_JSON_SCHEMA_V1}"
    )));
    let parsed = EngineSnapshot::from_json_compat_str(&contract).expect("parse contract");
    assert_eq!(parsed, snapshot);

    let bare = chart.snapshot_json_pretty().expect("bare json");
    let parsed = EngineSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed, snapshot);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let snapshot = chart().snapshot().expect("snapshot");
    let contract = snapshot.to_json_contract_v1_pretty().expect("json");
    let bumped = contract.replacen("\"schema_version\": 1", "\"schema_version\": 2", 1);
    assert!(EngineSnapshot::from_json_compat_str(&bumped).is_err());
}

#[test]
fn config_json_round_trips_and_validates() {
    let config = ScatterChartConfig::default()
        .with_transition_duration_ms(250.0)
        .with_min_domain_span(Some(1.0))
        .with_entrance_seed(11);
    let json = config.to_json_pretty().expect("serialize");
    let restored = ScatterChartConfig::from_json_str(&json).expect("deserialize");
    assert_eq!(restored, config);

    let partial = ScatterChartConfig::from_json_str(r#"{ "tick_count": 5 }"#).expect("defaults");
    assert_eq!(partial.tick_count, 5);
    assert_eq!(partial.transition_duration_ms, 1_000.0);

    assert!(ScatterChartConfig::from_json_str(r#"{ "transition_duration_ms": -1.0 }"#).is_err());
    assert!(ScatterChartConfig::from_json_str(r#"{ "tick_count": 0 }"#).is_err());
    assert!(ScatterChartConfig::from_json_str(r#"{ "tick_count": 1000 }"#).is_ok());
    assert!(ScatterChartConfig::from_json_str(r#"{ "tick_count": 1001 }"#).is_err());
    assert!(
        ScatterChartConfig::from_json_str(r#"{ "tick_count": 100000000000 }"#).is_err()
    );
}
