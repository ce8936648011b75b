use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Field, Point, Record, Selection};
use crate::render::Renderer;

use super::{PluginEvent, RenderStyle, ScatterChart};

/// Formats one tooltip line from a field value and its record.
pub type TooltipFormatter = fn(f64, &Record) -> String;

/// Per-field tooltip line formatters, indexed by [`Field::index`].
pub static TOOLTIP_FORMATTERS: [TooltipFormatter; 6] = [
    format_poverty,
    format_age,
    format_income,
    format_healthcare,
    format_obesity,
    format_smokes,
];

fn labelled(field: Field, value: f64) -> String {
    let suffix = if field.is_percentage() { "%" } else { "" };
    format!("{}: {value}{suffix}", field.tooltip_label())
}

fn format_poverty(value: f64, _: &Record) -> String {
    labelled(Field::Poverty, value)
}

fn format_age(value: f64, _: &Record) -> String {
    labelled(Field::Age, value)
}

fn format_income(value: f64, _: &Record) -> String {
    labelled(Field::Income, value)
}

fn format_healthcare(value: f64, _: &Record) -> String {
    labelled(Field::Healthcare, value)
}

fn format_obesity(value: f64, _: &Record) -> String {
    labelled(Field::Obesity, value)
}

fn format_smokes(value: f64, _: &Record) -> String {
    labelled(Field::Smokes, value)
}

#[must_use]
pub fn tooltip_line(field: Field, record: &Record) -> String {
    TOOLTIP_FORMATTERS[field.index()](record.value(field), record)
}

/// Hover tooltip for one marker: name line, X line, Y line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub index: usize,
    pub lines: SmallVec<[String; 3]>,
    /// Top-left corner of the box, in plot coordinates.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Tooltip {
    /// Lays the tooltip out above the marker at `marker`, shifted by the
    /// configured offset.
    #[must_use]
    pub fn build(
        index: usize,
        record: &Record,
        selection: Selection,
        marker: Point,
        style: &RenderStyle,
    ) -> Self {
        let lines: SmallVec<[String; 3]> = SmallVec::from_buf([
            record.name.clone(),
            tooltip_line(selection.x, record),
            tooltip_line(selection.y, record),
        ]);
        let widest = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as f64;
        let width = widest * style.tooltip_font_size_px * 0.6 + 2.0 * style.tooltip_padding_px;
        let height =
            lines.len() as f64 * style.tooltip_line_height_px + 2.0 * style.tooltip_padding_px;
        let (dy, dx) = style.tooltip_offset_px;
        let origin = Point::new(
            marker.x - width / 2.0 + dx,
            marker.y - style.marker_radius_px - height + dy,
        );
        Self {
            index,
            lines,
            origin,
            width,
            height,
        }
    }
}

impl<R: Renderer> ScatterChart<R> {
    /// Tooltip for the hovered marker at its current position.
    #[must_use]
    pub fn tooltip(&self) -> Option<Tooltip> {
        let index = self.core.interaction.hovered_marker()?;
        let record = self.core.table.get(index)?;
        let marker = self.core.markers.position_at(index, self.core.now_ms)?;
        Some(Tooltip::build(
            index,
            record,
            self.core.selection,
            marker,
            &self.core.config.style,
        ))
    }

    pub(super) fn update_hovered_marker(&mut self, marker: Option<usize>) {
        if !self.core.interaction.set_hovered_marker(marker) {
            return;
        }
        trace!(marker = ?marker, "hovered marker changed");
        match marker {
            Some(index) => self.emit_plugin_event(PluginEvent::TooltipShown { index }),
            None => self.emit_plugin_event(PluginEvent::TooltipHidden),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alabama() -> Record {
        Record::new("AL", "Alabama", [18.0, 38.6, 42830.0, 12.0, 33.5, 21.1]).expect("record")
    }

    #[test]
    fn lines_follow_field_order_and_percent_rules() {
        let record = alabama();
        let lines: Vec<String> = Field::ALL
            .iter()
            .map(|&field| tooltip_line(field, &record))
            .collect();
        assert_eq!(
            lines,
            vec![
                "Poverty: 18%",
                "Age: 38.6",
                "Income: 42830",
                "Healthcare: 12%",
                "Obese: 33.5%",
                "Smokes: 21.1%",
            ]
        );
    }

    #[test]
    fn tooltip_lists_name_then_x_then_y() {
        let tooltip = Tooltip::build(
            0,
            &alabama(),
            Selection::new(Field::Income, Field::Smokes),
            Point::new(100.0, 200.0),
            &RenderStyle::default(),
        );
        assert_eq!(
            tooltip.lines.as_slice(),
            ["Alabama", "Income: 42830", "Smokes: 21.1%"]
        );
        assert_eq!(tooltip.height, 3.0 * 16.0 + 16.0);
        assert_eq!(tooltip.origin.y, 200.0 - 12.0 - tooltip.height + 80.0);
    }
}
