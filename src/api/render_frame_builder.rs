use crate::core::{Axis, Point};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive, TextRole,
};

use super::ScatterChart;
use super::axis_render_frame_builder::AxisRenderContext;

impl<R: Renderer> ScatterChart<R> {
    /// Materializes the scene at the current clock in canvas coordinates.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let geometry = self.core.config.geometry;
        let style = self.core.config.style;
        let now_ms = self.core.now_ms;
        let mut frame = RenderFrame::new(geometry.canvas);

        let axis_context = AxisRenderContext {
            geometry,
            style,
            tick_count: self.core.config.tick_count,
        };
        for axis in Axis::BOTH {
            let layer = self.axis_layer(axis);
            if let Some(scale) = layer.scale_at(now_ms)? {
                axis_context.push_axis(&mut frame, axis, scale);
            }
            axis_context.push_labels(&mut frame, layer);
        }

        let label_dy = style.marker_radius_px * 5.0 / 12.0;
        for (record, position) in self
            .core
            .table
            .records()
            .iter()
            .zip(self.core.markers.positions_at(now_ms))
        {
            let center = geometry.plot_to_canvas(position);
            frame.circles.push(
                CirclePrimitive::new(
                    center.x,
                    center.y,
                    style.marker_radius_px,
                    style.marker_fill_color,
                )
                .with_stroke(style.marker_stroke_width, style.marker_stroke_color),
            );
            frame.texts.push(
                TextPrimitive::new(
                    record.abbr.as_str(),
                    center.x,
                    center.y + label_dy,
                    style.marker_label_font_size_px,
                    style.marker_label_color,
                    TextHAlign::Center,
                )
                .with_role(TextRole::MarkerLabel),
            );
        }

        if let Some(tooltip) = self.tooltip() {
            let origin = geometry.plot_to_canvas(tooltip.origin);
            frame.overlay_rects.push(
                RectPrimitive::new(
                    origin.x,
                    origin.y,
                    tooltip.width,
                    tooltip.height,
                    style.tooltip_background_color,
                )
                .with_corner_radius(style.tooltip_corner_radius_px),
            );
            let center_x = origin.x + tooltip.width / 2.0;
            for (index, line) in tooltip.lines.iter().enumerate() {
                let baseline = Point::new(
                    center_x,
                    origin.y
                        + style.tooltip_padding_px
                        + index as f64 * style.tooltip_line_height_px
                        + style.tooltip_font_size_px,
                );
                frame.overlay_texts.push(
                    TextPrimitive::new(
                        line.as_str(),
                        baseline.x,
                        baseline.y,
                        style.tooltip_font_size_px,
                        style.tooltip_text_color,
                        TextHAlign::Center,
                    )
                    .with_role(TextRole::Tooltip),
                );
            }
        }

        frame.validate()?;
        Ok(frame)
    }
}
