//! plot-rs: embeddable 2D plotting surface.
//!
//! A [`Plot`] maps a data-space [`PlotArea`](core::PlotArea) onto a pixel
//! canvas, paints typed series through an abstract
//! [`DrawingSurface`](render::DrawingSurface), and re-maps the view on drag and
//! wheel input. Coordinate math runs on an interchangeable
//! [`NumericBackend`](core::NumericBackend): IEEE doubles, or arbitrary-precision
//! decimals that keep deep zooms exact.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{Plot, PlotConfig};
pub use error::{PlotError, PlotResult};
