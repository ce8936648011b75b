//! scatter-rs: interactive scatter-plot engine.
//!
//! A dataset of records with six numeric fields is plotted against one
//! selectable X field and one selectable Y field. Clicking an axis label
//! switches that axis; the axis and every marker animate to the new scale.
//! Drawing goes through the backend-agnostic [`render::RenderFrame`].

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod loader;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ScatterChart, ScatterChartConfig};
pub use error::{ChartError, ChartResult};
