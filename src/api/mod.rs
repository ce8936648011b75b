mod axis_render_frame_builder;
mod axis_renderer;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod label_selector;
mod marker_layer;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod render_style;
mod selection_controller;
mod snapshot_controller;
mod tooltip;
mod validation;

pub use axis_renderer::{AxisLayer, AxisRenderState, LabelStatus};
pub use engine::ScatterChart;
pub use engine_config::{EntranceMode, ScatterChartConfig};
pub use engine_snapshot::{AxisSnapshot, EngineSnapshot, MarkerSnapshot};
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use label_selector::{LabelSlot, label_at, label_slots};
pub use marker_layer::{MarkerLayer, marker_targets, scatter_origin};
pub use render_style::RenderStyle;
pub use selection_controller::SelectionOutcome;
pub use tooltip::{TOOLTIP_FORMATTERS, Tooltip, TooltipFormatter, tooltip_line};

pub use crate::extensions::PluginEvent;
