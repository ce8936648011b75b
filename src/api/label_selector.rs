use serde::{Deserialize, Serialize};

use crate::core::{Axis, Field, PlotGeometry, Point};

use super::RenderStyle;

/// Placement of one clickable axis label, in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelSlot {
    pub field: Field,
    pub axis: Axis,
    /// Text anchor (horizontal center, baseline).
    pub anchor: Point,
    pub rotation_deg: f64,
    pub hit_left: f64,
    pub hit_top: f64,
    pub hit_width: f64,
    pub hit_height: f64,
}

impl LabelSlot {
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.hit_left
            && point.x <= self.hit_left + self.hit_width
            && point.y >= self.hit_top
            && point.y <= self.hit_top + self.hit_height
    }
}

/// Lays out the labels of `axis`, one per field, stacked away from the plot.
///
/// X labels sit centered under the plot. Y labels are rotated -90° and stack
/// leftwards from the plot's left edge.
#[must_use]
pub fn label_slots(axis: Axis, geometry: PlotGeometry, style: &RenderStyle) -> Vec<LabelSlot> {
    let width = geometry.plot_width();
    let height = geometry.plot_height();
    let font = style.axis_label_font_size_px;

    axis.choices()
        .iter()
        .enumerate()
        .map(|(index, &field)| {
            let step = style.axis_label_spacing_px * (index + 1) as f64;
            let text_len = field.axis_label().chars().count() as f64 * style.label_char_width_px;
            match axis {
                Axis::X => {
                    let anchor = Point::new(width / 2.0, height + style.axis_label_offset_px + step);
                    LabelSlot {
                        field,
                        axis,
                        anchor,
                        rotation_deg: 0.0,
                        hit_left: anchor.x - text_len / 2.0,
                        hit_top: anchor.y - font,
                        hit_width: text_len,
                        hit_height: font,
                    }
                }
                Axis::Y => {
                    let anchor = Point::new(-(step + font), height / 2.0);
                    LabelSlot {
                        field,
                        axis,
                        anchor,
                        rotation_deg: -90.0,
                        hit_left: anchor.x - font,
                        hit_top: anchor.y - text_len / 2.0,
                        hit_width: font,
                        hit_height: text_len,
                    }
                }
            }
        })
        .collect()
}

/// Field whose label contains `point` (plot coordinates), if any.
#[must_use]
pub fn label_at(point: Point, geometry: PlotGeometry, style: &RenderStyle) -> Option<Field> {
    Axis::BOTH
        .into_iter()
        .flat_map(|axis| label_slots(axis, geometry, style))
        .find(|slot| slot.contains(point))
        .map(|slot| slot.field)
}
