use std::sync::Arc;

use crate::core::{PlotGeometry, Table};
use crate::render::Renderer;

use super::{ScatterChart, ScatterChartConfig};

impl<R: Renderer> ScatterChart<R> {
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.core.table
    }

    /// Shared handle to the dataset, for hosts that build several charts over it.
    #[must_use]
    pub fn shared_table(&self) -> Arc<Table> {
        Arc::clone(&self.core.table)
    }

    #[must_use]
    pub fn config(&self) -> &ScatterChartConfig {
        &self.core.config
    }

    #[must_use]
    pub fn geometry(&self) -> PlotGeometry {
        self.core.config.geometry
    }

    /// Engine clock in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.core.now_ms
    }
}
