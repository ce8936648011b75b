use std::cell::RefCell;
use std::rc::Rc;

use scatter_rs::api::{EntranceMode, ScatterChart, ScatterChartConfig, SelectionOutcome};
use scatter_rs::core::{Axis, Field};
use scatter_rs::extensions::{ChartPlugin, PluginContext, PluginEvent};
use scatter_rs::render::NullRenderer;

const AL_AK: &str = "\
state,abbr,poverty,age,income,healthcare,obesity,smokes
Alabama,AL,18,38,43000,12,33,21
Alaska,AK,11,33,70000,15,29,22
";

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ChartPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: PluginEvent, context: PluginContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn event_kind(event: &PluginEvent) -> &'static str {
    match event {
        PluginEvent::SelectionChanged { .. } => "selection",
        PluginEvent::AxisRendered { .. } => "axis",
        PluginEvent::MarkersRepositioned { .. } => "markers",
        PluginEvent::TooltipShown { .. } => "tooltip_shown",
        PluginEvent::TooltipHidden => "tooltip_hidden",
        PluginEvent::Rendered => "rendered",
    }
}

fn chart_with_recorder() -> (
    ScatterChart<NullRenderer>,
    Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>,
) {
    let config = ScatterChartConfig::default().with_entrance(EntranceMode::InPlace);
    let mut chart =
        ScatterChart::from_csv_str(NullRenderer::default(), AL_AK, config).expect("chart init");
    let events = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");
    (chart, events)
}

#[test]
fn selection_change_runs_axis_before_markers() {
    let (mut chart, events) = chart_with_recorder();

    chart.on_label_click(Field::Age).expect("click");

    let recorded = events.borrow();
    let kinds: Vec<&str> = recorded.iter().map(|(event, _)| event_kind(event)).collect();
    assert_eq!(kinds, vec!["selection", "axis", "markers"]);
    assert_eq!(
        recorded[0].0,
        PluginEvent::SelectionChanged {
            axis: Axis::X,
            from: Field::Poverty,
            to: Field::Age,
        }
    );
    assert_eq!(
        recorded[1].0,
        PluginEvent::AxisRendered {
            axis: Axis::X,
            field: Field::Age,
            animated: true,
        }
    );
    // The markers already see the new X domain.
    let (_, context) = recorded[2];
    assert_eq!(context.selection.x, Field::Age);
    let (start, _) = context.x_domain.expect("x domain");
    assert!((start - 31.35).abs() < 1e-9);
}

#[test]
fn clicking_the_active_label_is_a_no_op() {
    let (mut chart, events) = chart_with_recorder();
    let before = chart.snapshot().expect("snapshot");

    let outcome = chart.on_label_click(Field::Poverty).expect("click");
    assert_eq!(outcome, SelectionOutcome::Unchanged);
    let outcome = chart.on_label_click(Field::Healthcare).expect("click");
    assert_eq!(outcome, SelectionOutcome::Unchanged);

    assert!(events.borrow().is_empty());
    assert_eq!(chart.snapshot().expect("snapshot"), before);
    assert!(!chart.is_animating());
}

#[test]
fn duplicate_plugin_ids_are_rejected() {
    let (mut chart, events) = chart_with_recorder();
    assert!(
        chart
            .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
            .is_err()
    );
    assert_eq!(chart.plugin_count(), 1);
    assert!(chart.unregister_plugin("recorder"));
    assert!(!chart.has_plugin("recorder"));

    chart.on_label_click(Field::Income).expect("click");
    assert!(events.borrow().is_empty());
}

#[test]
fn render_emits_rendered_event() {
    let (mut chart, events) = chart_with_recorder();
    chart.render().expect("render");
    let recorded = events.borrow();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, PluginEvent::Rendered);
    assert_eq!(recorded[0].1.records_len, 2);
}
