use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Axis, Field, Selection, build_axis_scale};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::label_selector::label_at;
use super::{PluginEvent, ScatterChart};

/// Result of a label click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// The field was already selected, or the click hit no label.
    Unchanged,
    Changed { axis: Axis, from: Field, to: Field },
}

impl SelectionOutcome {
    #[must_use]
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

impl<R: Renderer> ScatterChart<R> {
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.core.selection
    }

    /// Selects `field` on its axis.
    ///
    /// Re-selecting the active field is a no-op. Otherwise the axis is
    /// re-rendered against its new scale before the markers move, so markers
    /// always target the scales the axes display.
    pub fn on_label_click(&mut self, field: Field) -> ChartResult<SelectionOutcome> {
        let axis = field.axis();
        if self.core.selection.get(axis) == field {
            return Ok(SelectionOutcome::Unchanged);
        }

        // Fail before touching state if the new field cannot be scaled.
        build_axis_scale(
            &self.core.table,
            field,
            self.core.config.scale_spec(axis),
            self.core.config.geometry,
        )?;

        let from = self.core.selection.replace(field);
        debug!(axis = %axis, from = %from, to = %field, "selection changed");
        self.emit_plugin_event(PluginEvent::SelectionChanged {
            axis,
            from,
            to: field,
        });
        self.render_axis(axis)?;
        self.reposition_markers()?;
        Ok(SelectionOutcome::Changed {
            axis,
            from,
            to: field,
        })
    }

    /// Like [`Self::on_label_click`], taking a raw column name such as `"age"`.
    pub fn on_label_click_name(&mut self, name: &str) -> ChartResult<SelectionOutcome> {
        let field: Field = name.parse()?;
        self.on_label_click(field)
    }

    /// Routes a canvas-space click to the axis label under it, if any.
    pub fn pointer_click(&mut self, x: f64, y: f64) -> ChartResult<SelectionOutcome> {
        self.core.interaction.on_pointer_click(x, y);
        let geometry = self.core.config.geometry;
        let point = geometry.canvas_to_plot(x, y);
        match label_at(point, geometry, &self.core.config.style) {
            Some(field) => self.on_label_click(field),
            None => Ok(SelectionOutcome::Unchanged),
        }
    }
}
