//! Pure pan/zoom math producing new plot areas.
//!
//! Nothing here mutates state; the plot facade commits the returned area only
//! after its transform has been derived successfully.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::numeric::{DivisionPrecision, MAX_DECIMAL_SCALE, NumericBackend, RoundingMode};
use crate::core::plot_area::PlotArea;
use crate::core::transform::PrecisionConfig;
use crate::core::types::{Canvas, ScreenPoint};
use crate::error::{Axis, PlotError, PlotResult};

/// Wheel-zoom tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Raw wheel delta reported for one notch.
    pub wheel_step_units: f64,
    /// Fraction of the span each edge moves per notch, before cursor weighting.
    pub zoom_step_ratio: f64,
    /// Upper bound on the per-event step; must stay below 0.5 so spans remain positive.
    pub max_zoom_step_ratio: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            wheel_step_units: 120.0,
            zoom_step_ratio: 0.1,
            max_zoom_step_ratio: 0.25,
        }
    }
}

impl NavigationConfig {
    pub fn validate(self) -> PlotResult<Self> {
        if !self.wheel_step_units.is_finite() || self.wheel_step_units <= 0.0 {
            return Err(PlotError::InvalidData(
                "wheel step units must be finite and > 0".to_owned(),
            ));
        }
        if !self.zoom_step_ratio.is_finite() || self.zoom_step_ratio <= 0.0 {
            return Err(PlotError::InvalidData(
                "zoom step ratio must be finite and > 0".to_owned(),
            ));
        }
        if !self.max_zoom_step_ratio.is_finite()
            || self.max_zoom_step_ratio <= 0.0
            || self.max_zoom_step_ratio >= 0.5
        {
            return Err(PlotError::InvalidData(
                "max zoom step ratio must be in (0, 0.5)".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Converts a raw wheel delta into a signed zoom step.
///
/// Positive steps zoom in. Returns `None` for a zero delta.
pub fn resolve_zoom_step(wheel_delta: f64, config: NavigationConfig) -> PlotResult<Option<f64>> {
    if !wheel_delta.is_finite() {
        return Err(PlotError::InvalidData(
            "wheel delta must be finite".to_owned(),
        ));
    }
    if wheel_delta == 0.0 {
        return Ok(None);
    }
    let step = wheel_delta / config.wheel_step_units * config.zoom_step_ratio;
    Ok(Some(step.clamp(
        -config.max_zoom_step_ratio,
        config.max_zoom_step_ratio,
    )))
}

/// Number of fractional digits worth keeping for a span.
///
/// Spans above the coarse threshold keep none. Otherwise this is the smallest
/// `i` with `base / 10^i < span`.
pub fn span_digits<B: NumericBackend>(
    backend: &B,
    span: B::Value,
    axis: Axis,
    precision: PrecisionConfig,
) -> PlotResult<u32> {
    if !backend.is_positive(span)? {
        return Err(PlotError::DegenerateView { axis });
    }
    let threshold = backend.from_native(f64::from(precision.coarse_span_threshold))?;
    if backend.compare(span, threshold)? == Ordering::Greater {
        return Ok(0);
    }

    let ten = backend.from_native(10.0)?;
    let mut magnitude = backend.from_native(f64::from(precision.rescale_base))?;
    let mut digits = 0;
    while backend.compare(magnitude, span)? != Ordering::Less {
        if digits == MAX_DECIMAL_SCALE {
            return Err(PlotError::Precision(format!(
                "{axis} span {span} needs more than {MAX_DECIMAL_SCALE} fractional digits"
            )));
        }
        digits += 1;
        magnitude = backend.div(magnitude, ten, Some(DivisionPrecision::half_up(digits)))?;
    }
    Ok(digits)
}

/// Rounds a pair of bounds to the precision their span warrants.
///
/// Backends without a scale concept return the bounds unchanged.
pub fn rescale_bounds<B: NumericBackend>(
    backend: &B,
    low: B::Value,
    high: B::Value,
    axis: Axis,
    precision: PrecisionConfig,
) -> PlotResult<(B::Value, B::Value)> {
    if !B::TRACKS_SCALE {
        return Ok((low, high));
    }
    let digits = span_digits(backend, backend.sub(high, low)?, axis, precision)?;
    Ok((
        backend.set_scale(low, digits, RoundingMode::HalfUp)?,
        backend.set_scale(high, digits, RoundingMode::HalfUp)?,
    ))
}

/// Translates `origin` so the content follows a pointer displaced by
/// `(dx, dy)` pixels on `canvas`.
///
/// Each shift is `delta * span / canvas_size`, rounded half-up to the digits
/// the span warrants. The rounding depends only on the span's value, which a
/// translation keeps, and is symmetric around zero, so opposite drags cancel
/// exactly.
pub fn pan_area<B: NumericBackend>(
    backend: &B,
    origin: &PlotArea<B::Value>,
    canvas: Canvas,
    dx: f64,
    dy: f64,
    precision: PrecisionConfig,
) -> PlotResult<PlotArea<B::Value>> {
    let canvas = canvas.validate()?;
    let shift_x = pan_shift(backend, dx, origin.width(), canvas.width, Axis::X, precision)?;
    let shift_y = pan_shift(backend, dy, origin.height(), canvas.height, Axis::Y, precision)?;
    // Screen Y grows downward.
    origin.translated(backend, backend.neg(shift_x)?, shift_y)
}

fn pan_shift<B: NumericBackend>(
    backend: &B,
    delta_px: f64,
    span: B::Value,
    canvas_px: u32,
    axis: Axis,
    precision: PrecisionConfig,
) -> PlotResult<B::Value> {
    let rounding = if B::TRACKS_SCALE {
        Some(DivisionPrecision::half_up(span_digits(backend, span, axis, precision)?))
    } else {
        None
    };
    backend.div(
        backend.mul(backend.from_native(delta_px)?, span)?,
        backend.from_native(f64::from(canvas_px))?,
        rounding,
    )
}

/// Zooms `area` by `step` around the canvas pixel `cursor`.
///
/// Each edge moves by `step * span` weighted by its distance to the cursor, so
/// the data point under the cursor keeps its screen position and the span is
/// scaled by `1 - 2 * step`.
pub fn zoom_area<B: NumericBackend>(
    backend: &B,
    area: &PlotArea<B::Value>,
    canvas: Canvas,
    cursor: ScreenPoint,
    step: f64,
    precision: PrecisionConfig,
) -> PlotResult<PlotArea<B::Value>> {
    let canvas = canvas.validate()?;
    if !step.is_finite() || step.abs() >= 0.5 {
        return Err(PlotError::InvalidData(
            "zoom step must be finite and in (-0.5, 0.5)".to_owned(),
        ));
    }
    let width_px = f64::from(canvas.width);
    let height_px = f64::from(canvas.height);
    let x_offset = ((2.0 * cursor.x - width_px) / width_px).clamp(-1.0, 1.0);
    let y_offset = ((2.0 * cursor.y - height_px) / height_px).clamp(-1.0, 1.0);

    let edge = |bound: B::Value, span: B::Value, coefficient: f64| -> PlotResult<B::Value> {
        backend.add(bound, backend.mul(span, backend.from_native(coefficient)?)?)
    };
    let left = edge(area.left(), area.width(), step * (x_offset + 1.0))?;
    let right = edge(area.right(), area.width(), -step * (1.0 - x_offset))?;
    let bottom = edge(area.bottom(), area.height(), step * (1.0 - y_offset))?;
    let top = edge(area.top(), area.height(), -step * (y_offset + 1.0))?;

    let (left, right) = rescale_bounds(backend, left, right, Axis::X, precision)?;
    let (bottom, top) = rescale_bounds(backend, bottom, top, Axis::Y, precision)?;
    PlotArea::new(backend, left, bottom, right, top)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{NavigationConfig, pan_area, resolve_zoom_step, zoom_area};
    use crate::core::numeric::{DecimalBackend, FloatBackend, NumericBackend};
    use crate::core::plot_area::PlotArea;
    use crate::core::transform::PrecisionConfig;
    use crate::core::types::{Canvas, ScreenPoint};

    #[test]
    fn zero_wheel_delta_yields_no_step() {
        let step = resolve_zoom_step(0.0, NavigationConfig::default()).expect("step");
        assert!(step.is_none());
    }

    #[test]
    fn one_notch_maps_to_configured_ratio() {
        let step = resolve_zoom_step(120.0, NavigationConfig::default())
            .expect("step")
            .expect("some");
        assert_relative_eq!(step, 0.1);
        let step = resolve_zoom_step(-240.0, NavigationConfig::default())
            .expect("step")
            .expect("some");
        assert_relative_eq!(step, -0.2);
    }

    #[test]
    fn large_wheel_delta_is_clamped() {
        let step = resolve_zoom_step(12_000.0, NavigationConfig::default())
            .expect("step")
            .expect("some");
        assert_relative_eq!(step, 0.25);
    }

    #[test]
    fn non_finite_wheel_delta_is_rejected() {
        assert!(resolve_zoom_step(f64::NAN, NavigationConfig::default()).is_err());
    }

    #[test]
    fn zoom_at_center_shrinks_symmetrically() {
        let area = PlotArea::new(&FloatBackend, 0.0, 0.0, 100.0, 50.0).expect("area");
        let zoomed = zoom_area(
            &FloatBackend,
            &area,
            Canvas::new(200, 100),
            ScreenPoint::new(100.0, 50.0),
            0.1,
            PrecisionConfig::default(),
        )
        .expect("zoom");
        assert_relative_eq!(zoomed.left(), 10.0, epsilon = 1e-9);
        assert_relative_eq!(zoomed.right(), 90.0, epsilon = 1e-9);
        assert_relative_eq!(zoomed.bottom(), 5.0, epsilon = 1e-9);
        assert_relative_eq!(zoomed.top(), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn zoom_at_left_edge_pins_left_bound() {
        let area = PlotArea::new(&FloatBackend, 0.0, 0.0, 100.0, 100.0).expect("area");
        let zoomed = zoom_area(
            &FloatBackend,
            &area,
            Canvas::new(100, 100),
            ScreenPoint::new(0.0, 100.0),
            0.1,
            PrecisionConfig::default(),
        )
        .expect("zoom");
        assert_relative_eq!(zoomed.left(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(zoomed.right(), 80.0, epsilon = 1e-9);
        assert_relative_eq!(zoomed.bottom(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(zoomed.top(), 80.0, epsilon = 1e-9);
    }

    #[test]
    fn float_pan_moves_against_pointer_and_flips_y() {
        let area = PlotArea::new(&FloatBackend, 0.0, 0.0, 100.0, 50.0).expect("area");
        let panned = pan_area(
            &FloatBackend,
            &area,
            Canvas::new(1000, 500),
            10.0,
            20.0,
            PrecisionConfig::default(),
        )
        .expect("pan");
        assert_relative_eq!(panned.left(), -1.0, epsilon = 1e-12);
        assert_relative_eq!(panned.right(), 99.0, epsilon = 1e-12);
        assert_relative_eq!(panned.bottom(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(panned.top(), 52.0, epsilon = 1e-12);
    }

    #[test]
    fn decimal_pan_rounding_ignores_bound_scale() {
        let backend = DecimalBackend;
        let coarse = PlotArea::new(
            &backend,
            backend.parse("0").expect("left"),
            backend.parse("0").expect("bottom"),
            backend.parse("7").expect("right"),
            backend.parse("3").expect("top"),
        )
        .expect("area");
        let fine = PlotArea::new(
            &backend,
            backend.parse("0.00000").expect("left"),
            backend.parse("0.00000").expect("bottom"),
            backend.parse("7.00000").expect("right"),
            backend.parse("3.00000").expect("top"),
        )
        .expect("area");
        let canvas = Canvas::new(997, 503);
        let precision = PrecisionConfig::default();

        let a = pan_area(&backend, &coarse, canvas, 97.0, 41.0, precision).expect("pan");
        let b = pan_area(&backend, &fine, canvas, 97.0, 41.0, precision).expect("pan");
        assert_eq!(a, b);
        assert_eq!(a.left(), backend.parse("-0.681").expect("shift"));
        assert_eq!(a.bottom(), backend.parse("0.245").expect("shift"));
    }

    #[test]
    fn config_rejects_step_limit_that_could_collapse_span() {
        let config = NavigationConfig {
            max_zoom_step_ratio: 0.5,
            ..NavigationConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(NavigationConfig::default().validate().is_ok());
    }
}
