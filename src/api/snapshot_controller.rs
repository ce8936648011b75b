use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{AxisSnapshot, EngineSnapshot, MarkerSnapshot, ScatterChart};

impl<R: Renderer> ScatterChart<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    pub fn snapshot(&self) -> ChartResult<EngineSnapshot> {
        let now_ms = self.core.now_ms;
        let mut axes = Vec::with_capacity(2);
        for layer in [&self.core.x_axis, &self.core.y_axis] {
            let (Some(field), Some(scale), Some(drawn)) =
                (layer.field(), layer.scale(), layer.scale_at(now_ms)?)
            else {
                continue;
            };
            axes.push(AxisSnapshot {
                axis: layer.axis(),
                field,
                domain: scale.domain(),
                drawn_domain: drawn.domain(),
                labels: layer.labels().clone(),
            });
        }

        let markers = self
            .core
            .table
            .records()
            .iter()
            .zip(self.core.markers.positions_at(now_ms))
            .zip(self.core.markers.targets())
            .map(|((record, position), target)| MarkerSnapshot {
                abbr: record.abbr.clone(),
                position,
                target,
            })
            .collect();

        Ok(EngineSnapshot {
            now_ms,
            selection: self.core.selection,
            axes,
            markers,
            hover: self.core.interaction.hover(),
        })
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
