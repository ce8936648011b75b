use std::sync::Arc;

use rand::rngs::StdRng;

use crate::core::{Selection, Table};
use crate::extensions::ChartPlugin;
use crate::interaction::InteractionState;

use super::{AxisLayer, MarkerLayer, ScatterChartConfig};

/// Internal engine core state used by the public facade (`ScatterChart`).
pub(super) struct EngineCore {
    pub(super) table: Arc<Table>,
    pub(super) config: ScatterChartConfig,
    pub(super) selection: Selection,
    pub(super) x_axis: AxisLayer,
    pub(super) y_axis: AxisLayer,
    pub(super) markers: MarkerLayer,
    pub(super) interaction: InteractionState,
    /// Engine clock in milliseconds, advanced by `tick`.
    pub(super) now_ms: f64,
    pub(super) rng: StdRng,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
}
