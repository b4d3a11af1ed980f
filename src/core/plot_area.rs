use std::cmp::Ordering;

use crate::core::numeric::NumericBackend;
use crate::error::{Axis, PlotError, PlotResult};

/// Visible data-space rectangle.
///
/// A `PlotArea` is never mutated: every view change builds a new one through
/// [`PlotArea::new`], which derives width/height and rejects non-positive spans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea<V> {
    left: V,
    bottom: V,
    right: V,
    top: V,
    width: V,
    height: V,
}

impl<V: Copy> PlotArea<V> {
    pub fn new<B>(backend: &B, left: V, bottom: V, right: V, top: V) -> PlotResult<Self>
    where
        B: NumericBackend<Value = V>,
    {
        let width = backend.sub(right, left)?;
        let height = backend.sub(top, bottom)?;
        if backend.compare(width, backend.zero())? != Ordering::Greater {
            return Err(PlotError::DegenerateView { axis: Axis::X });
        }
        if backend.compare(height, backend.zero())? != Ordering::Greater {
            return Err(PlotError::DegenerateView { axis: Axis::Y });
        }
        Ok(Self {
            left,
            bottom,
            right,
            top,
            width,
            height,
        })
    }

    /// Builds an area from native bounds, converting each through `backend`.
    pub fn from_native<B>(
        backend: &B,
        left: f64,
        bottom: f64,
        right: f64,
        top: f64,
    ) -> PlotResult<Self>
    where
        B: NumericBackend<Value = V>,
    {
        Self::new(
            backend,
            backend.from_native(left)?,
            backend.from_native(bottom)?,
            backend.from_native(right)?,
            backend.from_native(top)?,
        )
    }

    /// Returns a new area shifted by `(dx, dy)` data units.
    pub fn translated<B>(&self, backend: &B, dx: V, dy: V) -> PlotResult<Self>
    where
        B: NumericBackend<Value = V>,
    {
        Self::new(
            backend,
            backend.add(self.left, dx)?,
            backend.add(self.bottom, dy)?,
            backend.add(self.right, dx)?,
            backend.add(self.top, dy)?,
        )
    }

    #[must_use]
    pub fn left(&self) -> V {
        self.left
    }

    #[must_use]
    pub fn bottom(&self) -> V {
        self.bottom
    }

    #[must_use]
    pub fn right(&self) -> V {
        self.right
    }

    #[must_use]
    pub fn top(&self) -> V {
        self.top
    }

    #[must_use]
    pub fn width(&self) -> V {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> V {
        self.height
    }
}
