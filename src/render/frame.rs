use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass, in canvas pixels.
///
/// Backends draw lines, then circles, then texts. The overlay (tooltip box
/// and its lines) is painted last, above every marker label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub overlay_rects: Vec<RectPrimitive>,
    pub overlay_texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
            overlay_rects: Vec::new(),
            overlay_texts: Vec::new(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for rect in &self.overlay_rects {
            rect.validate()?;
        }
        for text in self.texts.iter().chain(&self.overlay_texts) {
            text.validate()?;
        }

        Ok(())
    }
}
