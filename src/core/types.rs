use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Pixel dimensions of the host canvas.
///
/// The transform layer only reads this value; resizing means handing a new
/// `Canvas` to the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> PlotResult<Self> {
        if !self.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Whether `point` lies inside the canvas bounding box (edges included).
    #[must_use]
    pub fn contains(self, point: ScreenPoint) -> bool {
        point.x.is_finite()
            && point.y.is_finite()
            && (0.0..=f64::from(self.width)).contains(&point.x)
            && (0.0..=f64::from(self.height)).contains(&point.y)
    }
}

/// A point stored in a series, in backend units.
///
/// Whether the coordinates are data-space or screen-space is decided by the
/// owning series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint<V = f64> {
    pub x: V,
    pub y: V,
}

impl<V> DataPoint<V> {
    #[must_use]
    pub fn new(x: V, y: V) -> Self {
        Self { x, y }
    }
}

/// Pixel position on the canvas, origin top-left, Y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset_from(self, origin: Self) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}
