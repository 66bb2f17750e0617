//! census-scatter: interactive scatter-plot engine for U.S. state survey data.
//!
//! The chart plots one of poverty, age or income against one of
//! lacks-healthcare, smokes or obesity. Clicking an axis label swaps the
//! metric on that axis and animates the axis and every point to the new
//! scale. The engine is headless: it produces backend-agnostic render frames
//! and hands them to a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ScatterChart};
pub use error::{ScatterError, ScatterResult};
