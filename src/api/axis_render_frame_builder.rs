use crate::core::{Axis, LinearScale, PlotGeometry, Point, format_tick};
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive, TextRole};

use super::label_selector::label_slots;
use super::{AxisLayer, LabelStatus, RenderStyle};

/// Everything needed to draw one axis, in canvas coordinates.
#[derive(Debug, Clone, Copy)]
pub(super) struct AxisRenderContext {
    pub geometry: PlotGeometry,
    pub style: RenderStyle,
    pub tick_count: usize,
}

impl AxisRenderContext {
    fn canvas(&self, x: f64, y: f64) -> Point {
        self.geometry.plot_to_canvas(Point::new(x, y))
    }

    /// Domain line, ticks and tick labels for `scale`.
    pub(super) fn push_axis(&self, frame: &mut RenderFrame, axis: Axis, scale: LinearScale) {
        let style = self.style;
        let width = self.geometry.plot_width();
        let height = self.geometry.plot_height();

        let (start, end) = match axis {
            Axis::X => (self.canvas(0.0, height), self.canvas(width, height)),
            Axis::Y => (self.canvas(0.0, 0.0), self.canvas(0.0, height)),
        };
        frame.lines.push(LinePrimitive::new(
            start.x,
            start.y,
            end.x,
            end.y,
            style.axis_line_width,
            style.axis_color,
        ));

        let step = scale.tick_step(self.tick_count);
        for value in scale.ticks(self.tick_count) {
            let text = match step {
                Some(step) => format_tick(value, step),
                None => value.to_string(),
            };
            let position = scale.map(value);
            match axis {
                Axis::X => {
                    let base = self.canvas(position, height);
                    frame.lines.push(LinePrimitive::new(
                        base.x,
                        base.y,
                        base.x,
                        base.y + style.tick_size_px,
                        style.axis_line_width,
                        style.axis_color,
                    ));
                    frame.texts.push(TextPrimitive::new(
                        text,
                        base.x,
                        base.y
                            + style.tick_size_px
                            + style.tick_padding_px
                            + style.tick_font_size_px * 0.71,
                        style.tick_font_size_px,
                        style.tick_label_color,
                        TextHAlign::Center,
                    ));
                }
                Axis::Y => {
                    let base = self.canvas(0.0, position);
                    frame.lines.push(LinePrimitive::new(
                        base.x - style.tick_size_px,
                        base.y,
                        base.x,
                        base.y,
                        style.axis_line_width,
                        style.axis_color,
                    ));
                    frame.texts.push(TextPrimitive::new(
                        text,
                        base.x - style.tick_size_px - style.tick_padding_px,
                        base.y + style.tick_font_size_px * 0.32,
                        style.tick_font_size_px,
                        style.tick_label_color,
                        TextHAlign::Right,
                    ));
                }
            }
        }
    }

    /// Clickable axis labels, styled by their active/inactive state.
    pub(super) fn push_labels(&self, frame: &mut RenderFrame, layer: &AxisLayer) {
        let style = self.style;
        for slot in label_slots(layer.axis(), self.geometry, &style) {
            let Some(&status) = layer.labels().get(&slot.field) else {
                continue;
            };
            let (role, color) = match status {
                LabelStatus::Active => (TextRole::AxisLabelActive, style.active_label_color),
                LabelStatus::Inactive => (TextRole::AxisLabelInactive, style.inactive_label_color),
            };
            let anchor = self.geometry.plot_to_canvas(slot.anchor);
            frame.texts.push(
                TextPrimitive::new(
                    slot.field.axis_label(),
                    anchor.x,
                    anchor.y,
                    style.axis_label_font_size_px,
                    color,
                    TextHAlign::Center,
                )
                .with_role(role)
                .with_rotation_deg(slot.rotation_deg),
            );
        }
    }
}
