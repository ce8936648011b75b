use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plot area for axes and axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    #[must_use]
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20, 20, 100, 100)
    }
}

/// Canvas size plus margins; the plot area is whatever remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotGeometry {
    pub canvas: Viewport,
    pub margins: Margins,
}

impl Default for PlotGeometry {
    fn default() -> Self {
        Self {
            canvas: Viewport::new(960, 800),
            margins: Margins::default(),
        }
    }
}

impl PlotGeometry {
    #[must_use]
    pub fn new(canvas: Viewport, margins: Margins) -> Self {
        Self { canvas, margins }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.canvas.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }
        let horizontal = u64::from(self.margins.left) + u64::from(self.margins.right);
        let vertical = u64::from(self.margins.top) + u64::from(self.margins.bottom);
        if horizontal >= u64::from(self.canvas.width) || vertical >= u64::from(self.canvas.height)
        {
            return Err(ChartError::InvalidData(
                "plot margins must leave a non-empty plot area".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        f64::from(self.canvas.width) - f64::from(self.margins.left) - f64::from(self.margins.right)
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        f64::from(self.canvas.height) - f64::from(self.margins.top) - f64::from(self.margins.bottom)
    }

    /// Converts a canvas-space point into plot-space (origin at the plot's top-left).
    #[must_use]
    pub fn canvas_to_plot(self, x: f64, y: f64) -> Point {
        Point::new(
            x - f64::from(self.margins.left),
            y - f64::from(self.margins.top),
        )
    }

    #[must_use]
    pub fn plot_to_canvas(self, point: Point) -> Point {
        Point::new(
            point.x + f64::from(self.margins.left),
            point.y + f64::from(self.margins.top),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
