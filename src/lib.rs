//! sparkline-rs: word-sized line and bar charts.
//!
//! A [`Sparkline`] turns a numeric series and a [`SparklineConfig`] into a
//! renderer-agnostic [`render::RenderFrame`]: scaled data geometry plus
//! optional percentile and value-line overlays in a fixed z-order. Any
//! [`render::Renderer`] can draw the frame.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Sparkline, SparklineConfig, SparklineEngine};
pub use error::{SparklineError, SparklineResult};
