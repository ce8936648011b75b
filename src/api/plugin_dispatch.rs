use crate::core::Axis;
use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{PluginEvent, ScatterChart};

impl<R: Renderer> ScatterChart<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            selection: self.core.selection,
            x_domain: self.scale(Axis::X).map(|scale| scale.domain()),
            y_domain: self.scale(Axis::Y).map(|scale| scale.domain()),
            records_len: self.core.table.len(),
            hovered_marker: self.core.interaction.hovered_marker(),
            now_ms: self.core.now_ms,
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        let context = self.plugin_context();
        for plugin in &mut self.core.plugins {
            plugin.on_event(event, context);
        }
    }
}
