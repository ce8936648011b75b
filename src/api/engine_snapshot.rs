use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Axis, Field, Point, Selection};
use crate::interaction::HoverState;

use super::LabelStatus;

/// Serializable state of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub axis: Axis,
    pub field: Field,
    /// Domain the axis is heading to.
    pub domain: (f64, f64),
    /// Domain as drawn at the snapshot clock.
    pub drawn_domain: (f64, f64),
    pub labels: IndexMap<Field, LabelStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSnapshot {
    pub abbr: String,
    pub position: Point,
    pub target: Point,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub now_ms: f64,
    pub selection: Selection,
    pub axes: Vec<AxisSnapshot>,
    pub markers: Vec<MarkerSnapshot>,
    pub hover: HoverState,
}
