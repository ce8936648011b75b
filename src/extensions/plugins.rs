use serde::{Deserialize, Serialize};

use crate::core::{Axis, Field, Selection};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub selection: Selection,
    pub x_domain: Option<(f64, f64)>,
    pub y_domain: Option<(f64, f64)>,
    pub records_len: usize,
    pub hovered_marker: Option<usize>,
    pub now_ms: f64,
}

/// Event stream exposed to plugins, in the order the engine performs the work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    SelectionChanged { axis: Axis, from: Field, to: Field },
    AxisRendered { axis: Axis, field: Field, animated: bool },
    MarkersRepositioned { count: usize, entrance: bool },
    TooltipShown { index: usize },
    TooltipHidden,
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins can observe events and read engine context without mutating chart
/// state directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
