use serde::{Deserialize, Serialize};

use crate::core::numeric::{DivisionPrecision, MAX_DECIMAL_SCALE, NumericBackend};
use crate::core::plot_area::PlotArea;
use crate::core::types::{Canvas, DataPoint, ScreenPoint};
use crate::error::{PlotError, PlotResult};

/// Scale management for backends that track fractional digits.
///
/// Ignored entirely by the float backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrecisionConfig {
    /// Extra fractional digits given to screen-to-data coefficients beyond the
    /// plot area's own scale.
    pub coefficient_guard_digits: u32,
    /// Fixed scale of the reciprocal data-to-screen coefficients.
    pub inverse_coefficient_scale: u32,
    /// Fractional digits kept on pixel coordinates before conversion to `f64`.
    pub screen_scale: u32,
    /// Spans above this many data units are rounded to whole units on zoom.
    pub coarse_span_threshold: u32,
    /// Starting magnitude of the digit search performed on zoom.
    pub rescale_base: u32,
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self {
            coefficient_guard_digits: 4,
            inverse_coefficient_scale: 4,
            screen_scale: 8,
            coarse_span_threshold: 10_000,
            rescale_base: 1_000,
        }
    }
}

impl PrecisionConfig {
    pub fn validate(self) -> PlotResult<Self> {
        if self.coefficient_guard_digits > MAX_DECIMAL_SCALE
            || self.inverse_coefficient_scale > MAX_DECIMAL_SCALE
            || self.screen_scale > MAX_DECIMAL_SCALE
        {
            return Err(PlotError::InvalidData(format!(
                "coefficient scales must be <= {MAX_DECIMAL_SCALE}"
            )));
        }
        if self.coarse_span_threshold == 0 || self.rescale_base == 0 {
            return Err(PlotError::InvalidData(
                "rescale threshold and base must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Coefficients mapping between data space and screen space for one
/// `(PlotArea, Canvas)` pair.
///
/// A transform is never patched: whenever the area or the canvas changes a new
/// one is derived, so the forward and inverse maps stay paired.
///
/// The point maps divide by the exact span and canvas size and round only the
/// result. The rounded coefficients are kept for callers that want them but
/// never feed back into a conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform<V> {
    area: PlotArea<V>,
    canvas: Canvas,
    canvas_width: V,
    canvas_height: V,
    plot_precision_x: DivisionPrecision,
    plot_precision_y: DivisionPrecision,
    screen_precision: DivisionPrecision,
    screen_to_plot_x: V,
    screen_to_plot_y: V,
    plot_to_screen_x: V,
    plot_to_screen_y: V,
}

impl<V: Copy> ViewTransform<V> {
    pub fn derive<B>(
        backend: &B,
        area: PlotArea<V>,
        canvas: Canvas,
        precision: PrecisionConfig,
    ) -> PlotResult<Self>
    where
        B: NumericBackend<Value = V>,
    {
        let canvas = canvas.validate()?;
        let canvas_width = backend.from_native(f64::from(canvas.width))?;
        let canvas_height = backend.from_native(f64::from(canvas.height))?;

        let forward_precision = |span: V| {
            let area_scale = backend.scale(span).unwrap_or(0);
            DivisionPrecision::half_up(
                (area_scale + precision.coefficient_guard_digits).min(MAX_DECIMAL_SCALE),
            )
        };
        let inverse_precision = DivisionPrecision::half_up(precision.inverse_coefficient_scale);

        let plot_precision_x = forward_precision(area.width());
        let plot_precision_y = forward_precision(area.height());

        let screen_to_plot_x = backend.div(area.width(), canvas_width, Some(plot_precision_x))?;
        let screen_to_plot_y = backend.div(area.height(), canvas_height, Some(plot_precision_y))?;
        let plot_to_screen_x =
            backend.div(backend.one(), screen_to_plot_x, Some(inverse_precision))?;
        let plot_to_screen_y =
            backend.div(backend.one(), screen_to_plot_y, Some(inverse_precision))?;

        if !backend.is_positive(plot_to_screen_x)? || !backend.is_positive(plot_to_screen_y)? {
            return Err(PlotError::Arithmetic(format!(
                "data-to-screen coefficient underflows at scale {}",
                precision.inverse_coefficient_scale
            )));
        }

        Ok(Self {
            area,
            canvas,
            canvas_width,
            canvas_height,
            plot_precision_x,
            plot_precision_y,
            screen_precision: DivisionPrecision::half_up(precision.screen_scale),
            screen_to_plot_x,
            screen_to_plot_y,
            plot_to_screen_x,
            plot_to_screen_y,
        })
    }

    /// Maps a data-space point to canvas pixels. Y is inverted.
    pub fn to_screen_coords<B>(&self, backend: &B, point: DataPoint<V>) -> PlotResult<ScreenPoint>
    where
        B: NumericBackend<Value = V>,
    {
        let (x, y) = self.scale_to_screen(
            backend,
            backend.sub(point.x, self.area.left())?,
            backend.sub(point.y, self.area.bottom())?,
        )?;
        let y = backend.sub(self.canvas_height, y)?;
        Ok(ScreenPoint::new(backend.to_native(x)?, backend.to_native(y)?))
    }

    /// Maps canvas pixels back to data space.
    pub fn to_plot_coords<B>(&self, backend: &B, point: ScreenPoint) -> PlotResult<DataPoint<V>>
    where
        B: NumericBackend<Value = V>,
    {
        let screen_x = backend.from_native(point.x)?;
        let screen_y = backend.sub(self.canvas_height, backend.from_native(point.y)?)?;
        let x = backend.div(
            backend.mul(screen_x, self.area.width())?,
            self.canvas_width,
            Some(self.plot_precision_x),
        )?;
        let y = backend.div(
            backend.mul(screen_y, self.area.height())?,
            self.canvas_height,
            Some(self.plot_precision_y),
        )?;
        Ok(DataPoint::new(
            backend.add(self.area.left(), x)?,
            backend.add(self.area.bottom(), y)?,
        ))
    }

    /// Scales a data-space extent to pixels without flipping Y.
    pub fn data_extent_to_screen<B>(
        &self,
        backend: &B,
        width: V,
        height: V,
    ) -> PlotResult<(f64, f64)>
    where
        B: NumericBackend<Value = V>,
    {
        let (x, y) = self.scale_to_screen(backend, width, height)?;
        Ok((backend.to_native(x)?, backend.to_native(y)?))
    }

    fn scale_to_screen<B>(&self, backend: &B, width: V, height: V) -> PlotResult<(V, V)>
    where
        B: NumericBackend<Value = V>,
    {
        let x = backend.div(
            backend.mul(width, self.canvas_width)?,
            self.area.width(),
            Some(self.screen_precision),
        )?;
        let y = backend.div(
            backend.mul(height, self.canvas_height)?,
            self.area.height(),
            Some(self.screen_precision),
        )?;
        Ok((x, y))
    }

    #[must_use]
    pub fn area(&self) -> PlotArea<V> {
        self.area
    }

    #[must_use]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    #[must_use]
    pub fn screen_to_plot_coefficients(&self) -> (V, V) {
        (self.screen_to_plot_x, self.screen_to_plot_y)
    }

    #[must_use]
    pub fn plot_to_screen_coefficients(&self) -> (V, V) {
        (self.plot_to_screen_x, self.plot_to_screen_y)
    }
}
