use std::path::Path;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::core::{Axis, Selection, Table};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionState;
use crate::loader::{DatasetLoader, DatasetLoaderConfig};
use crate::render::Renderer;

use super::{AxisLayer, MarkerLayer, ScatterChart, ScatterChartConfig, engine_core::EngineCore};

impl<R: Renderer> ScatterChart<R> {
    /// Creates a chart over `table` and performs the initial draw: X axis,
    /// then Y axis, then the marker entrance.
    pub fn new(
        renderer: R,
        table: impl Into<Arc<Table>>,
        config: ScatterChartConfig,
    ) -> ChartResult<Self> {
        config.validate()?;
        let table = table.into();
        if table.is_empty() {
            return Err(ChartError::DataLoad("dataset contains no rows".to_owned()));
        }

        let rng = match config.entrance_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut engine = Self {
            renderer,
            core: EngineCore {
                table,
                config,
                selection: Selection::default(),
                x_axis: AxisLayer::new(Axis::X),
                y_axis: AxisLayer::new(Axis::Y),
                markers: MarkerLayer::default(),
                interaction: InteractionState::default(),
                now_ms: 0.0,
                rng,
                plugins: Vec::new(),
            },
        };

        engine.render_axis(Axis::X)?;
        engine.render_axis(Axis::Y)?;
        engine.enter_markers()?;
        info!(
            records = engine.core.table.len(),
            x = %engine.core.selection.x,
            y = %engine.core.selection.y,
            "scatter chart initialized"
        );
        Ok(engine)
    }

    /// Loads the dataset from a CSV file with the default column layout.
    pub fn from_csv_path(
        renderer: R,
        path: impl AsRef<Path>,
        config: ScatterChartConfig,
    ) -> ChartResult<Self> {
        Self::from_csv_path_with_loader(renderer, path, DatasetLoaderConfig::default(), config)
    }

    pub fn from_csv_path_with_loader(
        renderer: R,
        path: impl AsRef<Path>,
        loader: DatasetLoaderConfig,
        config: ScatterChartConfig,
    ) -> ChartResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading dataset");
        let table = DatasetLoader::new(loader).load_path(path)?;
        Self::new(renderer, table, config)
    }

    /// Loads the dataset from in-memory CSV text.
    pub fn from_csv_str(renderer: R, input: &str, config: ScatterChartConfig) -> ChartResult<Self> {
        let table = DatasetLoader::new(DatasetLoaderConfig::default()).load_str(input)?;
        Self::new(renderer, table, config)
    }
}
