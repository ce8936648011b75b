use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::animation::{Easing, Transition};
use crate::core::{Axis, Field, LinearScale, build_axis_scale};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{PluginEvent, ScatterChart};

/// Style flag of one clickable axis label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisRenderState {
    /// Nothing drawn yet.
    Uninitialized,
    /// Axis drawn; `scale` is the target, `domain` animates toward it.
    Active {
        field: Field,
        scale: LinearScale,
        domain: Transition<(f64, f64)>,
    },
}

/// Axis line, ticks and label states for one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayer {
    axis: Axis,
    state: AxisRenderState,
    labels: IndexMap<Field, LabelStatus>,
}

impl AxisLayer {
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            state: AxisRenderState::Uninitialized,
            labels: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn state(&self) -> AxisRenderState {
        self.state
    }

    #[must_use]
    pub fn field(&self) -> Option<Field> {
        match self.state {
            AxisRenderState::Uninitialized => None,
            AxisRenderState::Active { field, .. } => Some(field),
        }
    }

    /// Target scale; markers position against this one.
    #[must_use]
    pub fn scale(&self) -> Option<LinearScale> {
        match self.state {
            AxisRenderState::Uninitialized => None,
            AxisRenderState::Active { scale, .. } => Some(scale),
        }
    }

    /// Scale as drawn at `now_ms`, with the domain mid-transition.
    pub fn scale_at(&self, now_ms: f64) -> ChartResult<Option<LinearScale>> {
        match self.state {
            AxisRenderState::Uninitialized => Ok(None),
            AxisRenderState::Active { scale, domain, .. } => {
                scale.with_domain(domain.value_at(now_ms)).map(Some)
            }
        }
    }

    #[must_use]
    pub fn labels(&self) -> &IndexMap<Field, LabelStatus> {
        &self.labels
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.state, AxisRenderState::Active { domain, .. } if domain.is_animating())
    }

    /// Draws the axis at `scale`. The first call draws immediately; later
    /// calls animate from the current domain. Returns `true` when animated.
    pub fn render(
        &mut self,
        field: Field,
        scale: LinearScale,
        now_ms: f64,
        duration_ms: f64,
        easing: Easing,
    ) -> bool {
        let animated = match &mut self.state {
            AxisRenderState::Uninitialized => {
                self.state = AxisRenderState::Active {
                    field,
                    scale,
                    domain: Transition::idle(scale.domain(), easing),
                };
                false
            }
            AxisRenderState::Active {
                field: current_field,
                scale: current_scale,
                domain,
            } => {
                *current_field = field;
                *current_scale = scale;
                domain.retarget(scale.domain(), now_ms, duration_ms);
                domain.is_animating()
            }
        };
        self.refresh_labels(field);
        animated
    }

    /// Settles a finished domain transition. Returns `true` while animating.
    pub fn settle(&mut self, now_ms: f64) -> bool {
        match &mut self.state {
            AxisRenderState::Uninitialized => false,
            AxisRenderState::Active { domain, .. } => domain.settle(now_ms),
        }
    }

    fn refresh_labels(&mut self, active: Field) {
        self.labels = self
            .axis
            .choices()
            .iter()
            .map(|&field| {
                let status = if field == active {
                    LabelStatus::Active
                } else {
                    LabelStatus::Inactive
                };
                (field, status)
            })
            .collect();
    }
}

impl<R: Renderer> ScatterChart<R> {
    /// Rebuilds the scale for the selected field of `axis` and renders that axis.
    pub(super) fn render_axis(&mut self, axis: Axis) -> ChartResult<()> {
        let field = self.core.selection.get(axis);
        let scale = build_axis_scale(
            &self.core.table,
            field,
            self.core.config.scale_spec(axis),
            self.core.config.geometry,
        )?;
        let now_ms = self.core.now_ms;
        let duration_ms = self.core.config.transition_duration_ms;
        let easing = self.core.config.easing;
        let animated = self
            .axis_layer_mut(axis)
            .render(field, scale, now_ms, duration_ms, easing);
        debug!(
            axis = %axis,
            field = %field,
            domain_start = scale.domain().0,
            domain_end = scale.domain().1,
            animated,
            "axis rendered"
        );
        self.emit_plugin_event(PluginEvent::AxisRendered {
            axis,
            field,
            animated,
        });
        Ok(())
    }

    pub(super) fn axis_layer_mut(&mut self, axis: Axis) -> &mut AxisLayer {
        match axis {
            Axis::X => &mut self.core.x_axis,
            Axis::Y => &mut self.core.y_axis,
        }
    }

    #[must_use]
    pub fn axis_layer(&self, axis: Axis) -> &AxisLayer {
        match axis {
            Axis::X => &self.core.x_axis,
            Axis::Y => &self.core.y_axis,
        }
    }

    /// Target scale of `axis`, `None` before the first render.
    #[must_use]
    pub fn scale(&self, axis: Axis) -> Option<LinearScale> {
        self.axis_layer(axis).scale()
    }
}
