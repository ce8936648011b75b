use tracing::{trace, warn};

use crate::error::{ChartError, ChartResult};
use crate::interaction::HoverState;
use crate::render::Renderer;

use super::ScatterChart;

impl<R: Renderer> ScatterChart<R> {
    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.core.interaction.hover()
    }

    /// Tracks the pointer in canvas pixels and updates the hovered marker.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "pointer coordinates must be finite".to_owned(),
            ));
        }
        self.core.interaction.on_pointer_move(x, y);
        let point = self.core.config.geometry.canvas_to_plot(x, y);
        let hovered = self.core.markers.hit_test(
            point,
            self.core.config.style.marker_radius_px,
            self.core.now_ms,
        );
        self.update_hovered_marker(hovered);
        Ok(())
    }

    /// Pointer left the canvas: hides the tooltip.
    pub fn pointer_leave(&mut self) {
        self.update_hovered_marker(None);
        self.core.interaction.on_pointer_leave();
    }

    /// Advances the engine clock to `now_ms` and settles finished transitions.
    ///
    /// Returns `true` while any axis or marker is still animating. Time never
    /// runs backwards: an earlier timestamp is ignored.
    pub fn tick(&mut self, now_ms: f64) -> ChartResult<bool> {
        if !now_ms.is_finite() {
            return Err(ChartError::InvalidData(
                "clock timestamp must be finite".to_owned(),
            ));
        }
        if now_ms < self.core.now_ms {
            warn!(
                now_ms,
                current_ms = self.core.now_ms,
                "ignoring clock tick that goes backwards"
            );
        } else {
            self.core.now_ms = now_ms;
        }

        let now_ms = self.core.now_ms;
        let x_animating = self.core.x_axis.settle(now_ms);
        let y_animating = self.core.y_axis.settle(now_ms);
        let markers_animating = self.core.markers.settle(now_ms);
        let animating = x_animating || y_animating || markers_animating;
        trace!(now_ms, animating, "clock advanced");
        Ok(animating)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.core.x_axis.is_animating()
            || self.core.y_axis.is_animating()
            || self.core.markers.is_animating()
    }
}
