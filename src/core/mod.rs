pub mod domain;
pub mod field;
pub mod scale;
pub mod selection;
pub mod table;
pub mod types;

pub use domain::{AxisScaleSpec, DomainPadding, axis_range, build_axis_scale, padded_domain};
pub use field::{Axis, Field, X_CHOICES, Y_CHOICES};
pub use scale::{LinearScale, MAX_TICK_COUNT, format_tick};
pub use selection::Selection;
pub use table::{Record, Table};
pub use types::{Margins, PlotGeometry, Point, Viewport};
