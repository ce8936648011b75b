use crate::error::{ChartError, ChartResult};

use super::RenderStyle;

pub(super) fn validate_render_style(style: RenderStyle) -> ChartResult<()> {
    for (name, value) in [
        ("axis_line_width", style.axis_line_width),
        ("tick_font_size_px", style.tick_font_size_px),
        ("axis_label_font_size_px", style.axis_label_font_size_px),
        ("axis_label_spacing_px", style.axis_label_spacing_px),
        ("label_char_width_px", style.label_char_width_px),
        ("marker_radius_px", style.marker_radius_px),
        ("marker_label_font_size_px", style.marker_label_font_size_px),
        ("tooltip_font_size_px", style.tooltip_font_size_px),
        ("tooltip_line_height_px", style.tooltip_line_height_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }
    for (name, value) in [
        ("tick_size_px", style.tick_size_px),
        ("tick_padding_px", style.tick_padding_px),
        ("axis_label_offset_px", style.axis_label_offset_px),
        ("marker_stroke_width", style.marker_stroke_width),
        ("tooltip_padding_px", style.tooltip_padding_px),
        ("tooltip_corner_radius_px", style.tooltip_corner_radius_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and >= 0"
            )));
        }
    }
    if !style.tooltip_offset_px.0.is_finite() || !style.tooltip_offset_px.1.is_finite() {
        return Err(ChartError::InvalidData(
            "render style `tooltip_offset_px` must be finite".to_owned(),
        ));
    }
    for color in [
        style.axis_color,
        style.tick_label_color,
        style.active_label_color,
        style.inactive_label_color,
        style.marker_fill_color,
        style.marker_stroke_color,
        style.marker_label_color,
        style.tooltip_background_color,
        style.tooltip_text_color,
    ] {
        color.validate()?;
    }
    Ok(())
}
