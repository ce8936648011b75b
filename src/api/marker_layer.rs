use ordered_float::OrderedFloat;
use rand::Rng;
use tracing::debug;

use crate::animation::{Easing, Transition};
use crate::core::{Axis, LinearScale, PlotGeometry, Point, Selection, Table};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{EntranceMode, PluginEvent, ScatterChart};

/// One animated marker per record, in plot coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkerLayer {
    markers: Vec<Transition<Point>>,
}

impl MarkerLayer {
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    #[must_use]
    pub fn position_at(&self, index: usize, now_ms: f64) -> Option<Point> {
        self.markers.get(index).map(|marker| marker.value_at(now_ms))
    }

    #[must_use]
    pub fn positions_at(&self, now_ms: f64) -> Vec<Point> {
        self.markers
            .iter()
            .map(|marker| marker.value_at(now_ms))
            .collect()
    }

    #[must_use]
    pub fn targets(&self) -> Vec<Point> {
        self.markers.iter().map(Transition::target).collect()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.markers.iter().any(Transition::is_animating)
    }

    /// First draw: each marker starts at its origin and animates to its target.
    pub fn enter(
        &mut self,
        origins: &[Point],
        targets: &[Point],
        now_ms: f64,
        duration_ms: f64,
        easing: Easing,
    ) {
        self.markers = origins
            .iter()
            .zip(targets)
            .map(|(&origin, &target)| {
                let mut marker = Transition::idle(origin, easing);
                marker.retarget(target, now_ms, duration_ms);
                marker
            })
            .collect();
    }

    /// Moves every marker from where it is now toward its new target.
    pub fn retarget(&mut self, targets: &[Point], now_ms: f64, duration_ms: f64) {
        for (marker, &target) in self.markers.iter_mut().zip(targets) {
            marker.retarget(target, now_ms, duration_ms);
        }
    }

    /// Returns `true` while any marker is still moving.
    pub fn settle(&mut self, now_ms: f64) -> bool {
        self.markers
            .iter_mut()
            .fold(false, |animating, marker| marker.settle(now_ms) | animating)
    }

    /// Nearest marker whose circle contains `point` (plot coordinates).
    #[must_use]
    pub fn hit_test(&self, point: Point, radius: f64, now_ms: f64) -> Option<usize> {
        self.markers
            .iter()
            .enumerate()
            .map(|(index, marker)| (index, marker.value_at(now_ms).distance_to(point)))
            .filter(|(_, distance)| *distance <= radius)
            .min_by_key(|(_, distance)| OrderedFloat(*distance))
            .map(|(index, _)| index)
    }
}

/// Target position of every record under the given scales.
#[must_use]
pub fn marker_targets(
    table: &Table,
    selection: Selection,
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> Vec<Point> {
    table
        .records()
        .iter()
        .map(|record| {
            Point::new(
                x_scale.map(record.value(selection.x)),
                y_scale.map(record.value(selection.y)),
            )
        })
        .collect()
}

/// Scatter-in origin: each coordinate is `0` or the full plot extent, with
/// equal probability.
pub fn scatter_origin(rng: &mut impl Rng, geometry: PlotGeometry) -> Point {
    let x = if rng.gen_bool(0.5) {
        geometry.plot_width()
    } else {
        0.0
    };
    let y = if rng.gen_bool(0.5) {
        geometry.plot_height()
    } else {
        0.0
    };
    Point::new(x, y)
}

impl<R: Renderer> ScatterChart<R> {
    fn current_marker_targets(&self) -> ChartResult<Vec<Point>> {
        let (Some(x_scale), Some(y_scale)) = (self.scale(Axis::X), self.scale(Axis::Y)) else {
            return Err(ChartError::InvalidData(
                "markers require both axes to be rendered".to_owned(),
            ));
        };
        Ok(marker_targets(
            &self.core.table,
            self.core.selection,
            x_scale,
            y_scale,
        ))
    }

    /// Draws markers for the first time, with the configured entrance.
    pub(super) fn enter_markers(&mut self) -> ChartResult<()> {
        let targets = self.current_marker_targets()?;
        let geometry = self.core.config.geometry;
        let origins: Vec<Point> = match self.core.config.entrance {
            EntranceMode::Scatter => targets
                .iter()
                .map(|_| scatter_origin(&mut self.core.rng, geometry))
                .collect(),
            EntranceMode::InPlace => targets.clone(),
        };
        let duration_ms = match self.core.config.entrance {
            EntranceMode::Scatter => self.core.config.transition_duration_ms,
            EntranceMode::InPlace => 0.0,
        };
        self.core.markers.enter(
            &origins,
            &targets,
            self.core.now_ms,
            duration_ms,
            self.core.config.easing,
        );
        debug!(count = targets.len(), entrance = ?self.core.config.entrance, "markers entered");
        self.emit_plugin_event(PluginEvent::MarkersRepositioned {
            count: targets.len(),
            entrance: true,
        });
        Ok(())
    }

    /// Animates every marker toward its position under the current scales.
    pub(super) fn reposition_markers(&mut self) -> ChartResult<()> {
        let targets = self.current_marker_targets()?;
        self.core.markers.retarget(
            &targets,
            self.core.now_ms,
            self.core.config.transition_duration_ms,
        );
        debug!(count = targets.len(), "markers repositioned");
        self.emit_plugin_event(PluginEvent::MarkersRepositioned {
            count: targets.len(),
            entrance: false,
        });
        Ok(())
    }

    #[must_use]
    pub fn marker_layer(&self) -> &MarkerLayer {
        &self.core.markers
    }

    /// Marker positions as currently drawn, in plot coordinates.
    #[must_use]
    pub fn marker_positions(&self) -> Vec<Point> {
        self.core.markers.positions_at(self.core.now_ms)
    }

    /// Positions markers are heading to, in plot coordinates.
    #[must_use]
    pub fn marker_targets(&self) -> Vec<Point> {
        self.core.markers.targets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scatter_origins_sit_on_plot_corners() {
        let geometry = PlotGeometry::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let origin = scatter_origin(&mut rng, geometry);
            assert!(origin.x == 0.0 || origin.x == 840.0);
            assert!(origin.y == 0.0 || origin.y == 680.0);
        }
    }

    #[test]
    fn hit_test_prefers_nearest_marker_within_radius() {
        let mut layer = MarkerLayer::default();
        let points = [Point::new(10.0, 10.0), Point::new(25.0, 10.0)];
        layer.enter(&points, &points, 0.0, 0.0, Easing::Linear);
        assert_eq!(layer.hit_test(Point::new(16.0, 10.0), 12.0, 0.0), Some(0));
        assert_eq!(layer.hit_test(Point::new(19.0, 10.0), 12.0, 0.0), Some(1));
        assert_eq!(layer.hit_test(Point::new(100.0, 100.0), 12.0, 0.0), None);
    }

    #[test]
    fn enter_then_settle() {
        let mut layer = MarkerLayer::default();
        layer.enter(
            &[Point::new(0.0, 0.0)],
            &[Point::new(100.0, 50.0)],
            0.0,
            1_000.0,
            Easing::Linear,
        );
        assert_eq!(layer.position_at(0, 500.0), Some(Point::new(50.0, 25.0)));
        assert!(layer.settle(999.0));
        assert!(!layer.settle(1_000.0));
        assert_eq!(layer.positions_at(0.0), vec![Point::new(100.0, 50.0)]);
    }
}
