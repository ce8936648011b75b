use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Visual parameters for axes, labels, markers and tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub axis_color: Color,
    pub axis_line_width: f64,
    pub tick_size_px: f64,
    pub tick_padding_px: f64,
    pub tick_font_size_px: f64,
    pub tick_label_color: Color,
    pub axis_label_font_size_px: f64,
    /// Vertical distance between stacked axis labels.
    pub axis_label_spacing_px: f64,
    /// Gap between the plot edge and the first X label row.
    pub axis_label_offset_px: f64,
    /// Width estimate per character, used for label hit boxes.
    pub label_char_width_px: f64,
    pub active_label_color: Color,
    pub inactive_label_color: Color,
    pub marker_radius_px: f64,
    pub marker_fill_color: Color,
    pub marker_stroke_color: Color,
    pub marker_stroke_width: f64,
    pub marker_label_font_size_px: f64,
    pub marker_label_color: Color,
    pub tooltip_font_size_px: f64,
    pub tooltip_line_height_px: f64,
    pub tooltip_padding_px: f64,
    /// `(dy, dx)` applied to the tooltip's above-the-marker anchor.
    pub tooltip_offset_px: (f64, f64),
    pub tooltip_background_color: Color,
    pub tooltip_text_color: Color,
    pub tooltip_corner_radius_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            axis_color: Color::rgb(0.0, 0.0, 0.0),
            axis_line_width: 1.0,
            tick_size_px: 6.0,
            tick_padding_px: 3.0,
            tick_font_size_px: 10.0,
            tick_label_color: Color::rgb(0.0, 0.0, 0.0),
            axis_label_font_size_px: 16.0,
            axis_label_spacing_px: 20.0,
            axis_label_offset_px: 20.0,
            label_char_width_px: 8.0,
            active_label_color: Color::rgb(0.0, 0.0, 0.0),
            inactive_label_color: Color::rgb(0.667, 0.667, 0.667),
            marker_radius_px: 12.0,
            marker_fill_color: Color::rgb(0.537, 0.741, 0.827),
            marker_stroke_color: Color::rgb(0.890, 0.890, 0.890),
            marker_stroke_width: 1.0,
            marker_label_font_size_px: 10.0,
            marker_label_color: Color::rgb(1.0, 1.0, 1.0),
            tooltip_font_size_px: 12.0,
            tooltip_line_height_px: 16.0,
            tooltip_padding_px: 8.0,
            tooltip_offset_px: (80.0, -60.0),
            tooltip_background_color: Color::rgba(0.0, 0.0, 0.0, 0.8),
            tooltip_text_color: Color::rgb(1.0, 1.0, 1.0),
            tooltip_corner_radius_px: 4.0,
        }
    }
}
