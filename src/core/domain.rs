use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::field::{Axis, Field};
use crate::core::scale::LinearScale;
use crate::core::table::Table;
use crate::core::types::PlotGeometry;
use crate::error::{ChartError, ChartResult};

/// Multiplicative headroom applied to a field's extent.
///
/// The domain becomes `[min * low_factor, max * high_factor]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainPadding {
    pub low_factor: f64,
    pub high_factor: f64,
}

impl DomainPadding {
    #[must_use]
    pub const fn new(low_factor: f64, high_factor: f64) -> Self {
        Self {
            low_factor,
            high_factor,
        }
    }

    /// Tight padding on both ends.
    #[must_use]
    pub const fn x_default() -> Self {
        Self::new(0.95, 1.05)
    }

    /// Looser padding below, tight above.
    #[must_use]
    pub const fn y_default() -> Self {
        Self::new(0.8, 1.05)
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("low_factor", self.low_factor),
            ("high_factor", self.high_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "domain padding `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn apply(self, min: f64, max: f64) -> (f64, f64) {
        (min * self.low_factor, max * self.high_factor)
    }
}

/// Inputs shared by every scale build for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScaleSpec {
    pub axis: Axis,
    pub padding: DomainPadding,
    /// When set, zero-width domains are widened symmetrically to this span.
    pub min_domain_span: Option<f64>,
}

/// Pixel range an axis maps onto: `[0, width]` for X, `[height, 0]` for Y.
#[must_use]
pub fn axis_range(axis: Axis, geometry: PlotGeometry) -> (f64, f64) {
    match axis {
        Axis::X => (0.0, geometry.plot_width()),
        Axis::Y => (geometry.plot_height(), 0.0),
    }
}

/// Padded data domain of `field`. An empty table yields `(0, 0)`.
#[must_use]
pub fn padded_domain(table: &Table, field: Field, padding: DomainPadding) -> (f64, f64) {
    let (min, max) = table.extent(field).unwrap_or((0.0, 0.0));
    padding.apply(min, max)
}

/// Builds the scale for `field` on `spec.axis`.
pub fn build_axis_scale(
    table: &Table,
    field: Field,
    spec: AxisScaleSpec,
    geometry: PlotGeometry,
) -> ChartResult<LinearScale> {
    let (mut start, mut end) = padded_domain(table, field, spec.padding);
    if start == end {
        debug!(
            axis = %spec.axis,
            field = %field,
            value = start,
            rows = table.len(),
            "zero-width domain"
        );
        if let Some(span) = spec.min_domain_span.filter(|span| *span > 0.0) {
            start -= span / 2.0;
            end += span / 2.0;
        }
    }
    LinearScale::new((start, end), axis_range(spec.axis, geometry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::Record;
    use approx::assert_relative_eq;

    fn two_rows() -> Table {
        Table::new(vec![
            Record::new("AL", "Alabama", [18.0, 38.0, 43_000.0, 12.0, 33.0, 21.0]).expect("AL"),
            Record::new("AK", "Alaska", [11.0, 33.0, 70_000.0, 15.0, 29.0, 22.0]).expect("AK"),
        ])
    }

    #[test]
    fn x_and_y_use_their_own_padding_and_range() {
        let table = two_rows();
        let geometry = PlotGeometry::default();
        let x = build_axis_scale(
            &table,
            Field::Poverty,
            AxisScaleSpec {
                axis: Axis::X,
                padding: DomainPadding::x_default(),
                min_domain_span: None,
            },
            geometry,
        )
        .expect("x scale");
        let (x0, x1) = x.domain();
        assert_relative_eq!(x0, 10.45, epsilon = 1e-9);
        assert_relative_eq!(x1, 18.9, epsilon = 1e-9);
        assert_eq!(x.range(), (0.0, 840.0));

        let y = build_axis_scale(
            &table,
            Field::Healthcare,
            AxisScaleSpec {
                axis: Axis::Y,
                padding: DomainPadding::y_default(),
                min_domain_span: None,
            },
            geometry,
        )
        .expect("y scale");
        let (y0, y1) = y.domain();
        assert_relative_eq!(y0, 9.6, epsilon = 1e-9);
        assert_relative_eq!(y1, 15.75, epsilon = 1e-9);
        assert_eq!(y.range(), (680.0, 0.0));
    }

    #[test]
    fn empty_table_degenerates_without_error() {
        let spec = AxisScaleSpec {
            axis: Axis::X,
            padding: DomainPadding::x_default(),
            min_domain_span: None,
        };
        let scale = build_axis_scale(&Table::default(), Field::Age, spec, PlotGeometry::default())
            .expect("degenerate scale");
        assert!(scale.is_degenerate());
    }

    #[test]
    fn min_domain_span_widens_flat_fields() {
        let table = Table::new(vec![
            Record::new("A", "A", [0.0, 40.0, 1.0, 1.0, 1.0, 1.0]).expect("A"),
            Record::new("B", "B", [0.0, 40.0, 2.0, 1.0, 1.0, 1.0]).expect("B"),
        ]);
        let spec = AxisScaleSpec {
            axis: Axis::X,
            padding: DomainPadding::new(1.0, 1.0),
            min_domain_span: Some(2.0),
        };
        let scale = build_axis_scale(&table, Field::Age, spec, PlotGeometry::default())
            .expect("widened scale");
        assert_eq!(scale.domain(), (39.0, 41.0));
    }

    #[test]
    fn padding_must_be_positive() {
        assert!(DomainPadding::new(0.0, 1.0).validate().is_err());
        assert!(DomainPadding::new(0.9, f64::NAN).validate().is_err());
        assert!(DomainPadding::y_default().validate().is_ok());
    }
}
