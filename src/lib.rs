//! line-chart-rs: data model for time-series line charts.
//!
//! The `core` module holds the pure pieces (series partitioning, y-axis
//! tick-factor search, axis domain derivation, axis labels, legend layout).
//! `api::LineChart` ties them to one chart instance and turns them into a
//! backend-agnostic `render::RenderFrame`.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{DrawOptions, LineChart, LineChartConfig};
pub use error::{ChartError, ChartResult};
