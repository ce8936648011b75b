use proptest::prelude::*;
use scatter_rs::api::{EntranceMode, ScatterChart, ScatterChartConfig};
use scatter_rs::core::{Axis, Field, Record, Table};
use scatter_rs::render::NullRenderer;

fn table_strategy() -> impl Strategy<Value = Table> {
    prop::collection::vec(prop::array::uniform6(0.1f64..100_000.0), 1..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, values)| {
                Record::new(format!("S{index}"), format!("State {index}"), values)
                    .expect("valid record")
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn axis_domains_are_padded_extents(table in table_strategy(), pick in 0usize..3) {
        let config = ScatterChartConfig::default().with_entrance(EntranceMode::InPlace);
        let mut chart = ScatterChart::new(NullRenderer::default(), table, config).expect("chart");
        let x_field = Axis::X.choices()[pick];
        let y_field = Axis::Y.choices()[pick];
        chart.on_label_click(x_field).expect("x click");
        chart.on_label_click(y_field).expect("y click");

        for (axis, field, (low, high)) in [
            (Axis::X, x_field, (0.95, 1.05)),
            (Axis::Y, y_field, (0.8, 1.05)),
        ] {
            let (min, max) = chart.table().extent(field).expect("extent");
            let domain = chart.scale(axis).expect("scale").domain();
            prop_assert_eq!(domain, (min * low, max * high));
        }
        prop_assert_eq!(chart.selection().x, x_field);
        prop_assert_eq!(chart.selection().y, y_field);
    }

    #[test]
    fn rendered_frames_always_validate(table in table_strategy(), elapsed in 0.0f64..1_500.0) {
        let config = ScatterChartConfig::default().with_entrance_seed(3);
        let mut chart = ScatterChart::new(NullRenderer::default(), table, config).expect("chart");
        chart.on_label_click(Field::Income).expect("click");
        chart.tick(elapsed).expect("tick");
        chart.pointer_move(300.0, 300.0).expect("move");
        chart.render().expect("render");
        let frame = chart.renderer().last_frame().expect("frame");
        prop_assert_eq!(frame.circles.len(), chart.table().len());
    }
}
