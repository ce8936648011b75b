use std::cell::RefCell;
use std::rc::Rc;

use scatter_rs::api::{EntranceMode, ScatterChart, ScatterChartConfig, SelectionOutcome, label_slots};
use scatter_rs::core::{Axis, Field};
use scatter_rs::extensions::{ChartPlugin, PluginContext, PluginEvent};
use scatter_rs::render::{NullRenderer, TextRole};

const AL_AK: &str = "\
state,abbr,poverty,age,income,healthcare,obesity,smokes
Alabama,AL,18,38,43000,12,33,21
Alaska,AK,11,33,70000,15,29,22
";

struct TooltipLog(Rc<RefCell<Vec<PluginEvent>>>);

impl ChartPlugin for TooltipLog {
    fn id(&self) -> &str {
        "tooltip-log"
    }

    fn on_event(&mut self, event: PluginEvent, _context: PluginContext) {
        if matches!(
            event,
            PluginEvent::TooltipShown { .. } | PluginEvent::TooltipHidden
        ) {
            self.0.borrow_mut().push(event);
        }
    }
}

fn chart() -> ScatterChart<NullRenderer> {
    let config = ScatterChartConfig::default().with_entrance(EntranceMode::InPlace);
    ScatterChart::from_csv_str(NullRenderer::default(), AL_AK, config).expect("chart init")
}

#[test]
fn hovering_a_marker_shows_name_then_x_then_y() {
    let mut chart = chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_plugin(Box::new(TooltipLog(events.clone())))
        .expect("register");

    let marker = chart
        .geometry()
        .plot_to_canvas(chart.marker_positions()[1]);
    chart.pointer_move(marker.x + 3.0, marker.y - 2.0).expect("move");
    assert_eq!(chart.hover_state().hovered_marker, Some(1));

    let tooltip = chart.tooltip().expect("tooltip");
    assert_eq!(
        tooltip.lines.as_slice(),
        ["Alaska", "Poverty: 11%", "Healthcare: 15%"]
    );

    chart.render().expect("render");
    let frame = chart.renderer().last_frame().expect("frame");
    assert_eq!(frame.overlay_rects.len(), 1);
    assert!(frame.texts.iter().all(|text| text.role != TextRole::Tooltip));
    let tooltip_texts: Vec<&str> = frame
        .overlay_texts
        .iter()
        .filter(|text| text.role == TextRole::Tooltip)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(tooltip_texts, vec!["Alaska", "Poverty: 11%", "Healthcare: 15%"]);

    chart.pointer_leave();
    assert!(chart.tooltip().is_none());
    chart.render().expect("render");
    let frame = chart.renderer().last_frame().expect("frame");
    assert!(frame.overlay_rects.is_empty());
    assert!(frame.overlay_texts.is_empty());

    assert_eq!(
        events.borrow().as_slice(),
        [PluginEvent::TooltipShown { index: 1 }, PluginEvent::TooltipHidden]
    );
}

#[test]
fn tooltip_follows_the_selection() {
    let mut chart = chart();
    chart.on_label_click(Field::Income).expect("click");
    chart.on_label_click(Field::Smokes).expect("click");
    chart.tick(1_000.0).expect("tick");

    let marker = chart
        .geometry()
        .plot_to_canvas(chart.marker_positions()[0]);
    chart.pointer_move(marker.x, marker.y).expect("move");
    let tooltip = chart.tooltip().expect("tooltip");
    assert_eq!(
        tooltip.lines.as_slice(),
        ["Alabama", "Income: 43000", "Smokes: 21%"]
    );
}

#[test]
fn pointer_away_from_markers_hovers_nothing() {
    let mut chart = chart();
    chart.pointer_move(5.0, 5.0).expect("move");
    assert_eq!(chart.hover_state().hovered_marker, None);
    assert!(chart.pointer_move(f64::INFINITY, 0.0).is_err());
}

#[test]
fn clicking_label_text_switches_the_axis() {
    let mut chart = chart();
    let geometry = chart.geometry();
    let style = chart.render_style();

    let age_slot = label_slots(Axis::X, geometry, &style)
        .into_iter()
        .find(|slot| slot.field == Field::Age)
        .expect("age slot");
    let click = geometry.plot_to_canvas(age_slot.anchor);
    let outcome = chart.pointer_click(click.x, click.y - 4.0).expect("click");
    assert_eq!(
        outcome,
        SelectionOutcome::Changed {
            axis: Axis::X,
            from: Field::Poverty,
            to: Field::Age,
        }
    );

    let obese_slot = label_slots(Axis::Y, geometry, &style)
        .into_iter()
        .find(|slot| slot.field == Field::Obesity)
        .expect("obesity slot");
    let click = geometry.plot_to_canvas(obese_slot.anchor);
    let outcome = chart.pointer_click(click.x - 4.0, click.y).expect("click");
    assert!(outcome.is_changed());
    assert_eq!(chart.selection().y, Field::Obesity);

    let outcome = chart.pointer_click(500.0, 300.0).expect("click");
    assert_eq!(outcome, SelectionOutcome::Unchanged);
    assert_eq!(chart.hover_state().cursor.map(|cursor| cursor.x), Some(500.0));
}
