//! smoke-chart: banded min/max range ("smoke") chart rendering.
//!
//! This crate computes pixel layout for a smoke chart — per-interval
//! lower/upper value boxes with a gradient fill, a trend line, axis
//! legends, and horizontal gridlines — and emits backend-agnostic draw
//! primitives that a `Renderer` turns into an image.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{SmokeChart, SmokeChartConfig};
pub use error::{ChartError, ChartResult};
