use serde::{Deserialize, Serialize};

use crate::animation::{DEFAULT_TRANSITION_MS, Easing};
use crate::core::{Axis, AxisScaleSpec, DomainPadding, MAX_TICK_COUNT, PlotGeometry};
use crate::error::{ChartError, ChartResult};

use super::RenderStyle;
use super::validation::validate_render_style;

/// How markers appear on the first draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntranceMode {
    /// Each marker flies in from `x ∈ {0, width}`, `y ∈ {0, height}`.
    #[default]
    Scatter,
    /// Markers are placed at their positions without animation.
    InPlace,
}

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartConfig {
    #[serde(default)]
    pub geometry: PlotGeometry,
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default = "DomainPadding::x_default")]
    pub x_padding: DomainPadding,
    #[serde(default = "DomainPadding::y_default")]
    pub y_padding: DomainPadding,
    /// Off by default: flat fields produce a collapsed axis.
    #[serde(default)]
    pub min_domain_span: Option<f64>,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default)]
    pub entrance: EntranceMode,
    /// Fixed seed for the scatter-in origins; random when `None`.
    #[serde(default)]
    pub entrance_seed: Option<u64>,
    #[serde(default)]
    pub style: RenderStyle,
}

impl Default for ScatterChartConfig {
    fn default() -> Self {
        Self::new(PlotGeometry::default())
    }
}

impl ScatterChartConfig {
    #[must_use]
    pub fn new(geometry: PlotGeometry) -> Self {
        Self {
            geometry,
            transition_duration_ms: default_transition_duration_ms(),
            easing: Easing::default(),
            x_padding: DomainPadding::x_default(),
            y_padding: DomainPadding::y_default(),
            min_domain_span: None,
            tick_count: default_tick_count(),
            entrance: EntranceMode::default(),
            entrance_seed: None,
            style: RenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_transition_duration_ms(mut self, duration_ms: f64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, axis: Axis, padding: DomainPadding) -> Self {
        match axis {
            Axis::X => self.x_padding = padding,
            Axis::Y => self.y_padding = padding,
        }
        self
    }

    #[must_use]
    pub fn with_min_domain_span(mut self, span: Option<f64>) -> Self {
        self.min_domain_span = span;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_entrance(mut self, entrance: EntranceMode) -> Self {
        self.entrance = entrance;
        self
    }

    #[must_use]
    pub fn with_entrance_seed(mut self, seed: u64) -> Self {
        self.entrance_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn padding(&self, axis: Axis) -> DomainPadding {
        match axis {
            Axis::X => self.x_padding,
            Axis::Y => self.y_padding,
        }
    }

    #[must_use]
    pub fn scale_spec(&self, axis: Axis) -> AxisScaleSpec {
        AxisScaleSpec {
            axis,
            padding: self.padding(axis),
            min_domain_span: self.min_domain_span,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.geometry.validate()?;
        self.x_padding.validate()?;
        self.y_padding.validate()?;
        if !self.transition_duration_ms.is_finite() || self.transition_duration_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "transition duration must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(span) = self.min_domain_span {
            if !span.is_finite() || span <= 0.0 {
                return Err(ChartError::InvalidData(
                    "minimum domain span must be finite and > 0".to_owned(),
                ));
            }
        }
        if self.tick_count == 0 || self.tick_count > MAX_TICK_COUNT {
            return Err(ChartError::InvalidData(format!(
                "tick count must be in 1..={MAX_TICK_COUNT}, got {}",
                self.tick_count
            )));
        }
        validate_render_style(self.style)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_transition_duration_ms() -> f64 {
    DEFAULT_TRANSITION_MS
}

fn default_tick_count() -> usize {
    10
}
