use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Largest number of fractional digits a `Decimal` can carry.
pub const MAX_DECIMAL_SCALE: u32 = 28;

/// Rounding applied when a value is cut to a target scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RoundingMode {
    /// Midpoints round away from zero (`0.125 -> 0.13`, `-0.125 -> -0.13`).
    #[default]
    HalfUp,
    /// Midpoints round to the even neighbour.
    HalfEven,
    /// Truncates toward zero.
    Down,
}

impl RoundingMode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::Down => RoundingStrategy::ToZero,
        }
    }
}

/// Target scale and rounding for one division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionPrecision {
    pub scale: u32,
    pub rounding: RoundingMode,
}

impl DivisionPrecision {
    #[must_use]
    pub const fn half_up(scale: u32) -> Self {
        Self {
            scale,
            rounding: RoundingMode::HalfUp,
        }
    }
}

/// Arithmetic strategy used for every coordinate computation.
///
/// Transform and navigation code is written against this trait only; the
/// concrete backend is chosen once when a plot is built. Backends are
/// stateless and passed around by value.
pub trait NumericBackend: Copy + Default + fmt::Debug + Send + Sync + 'static {
    type Value: Copy + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Short backend identifier used in logs and snapshots.
    const NAME: &'static str;

    /// Whether values carry a fractional-digit scale that navigation must manage.
    const TRACKS_SCALE: bool;

    fn zero(&self) -> Self::Value;
    fn one(&self) -> Self::Value;

    fn from_native(&self, value: f64) -> PlotResult<Self::Value>;
    fn to_native(&self, value: Self::Value) -> PlotResult<f64>;

    /// Parses a textual number without passing through `f64`.
    fn parse(&self, text: &str) -> PlotResult<Self::Value>;

    fn add(&self, lhs: Self::Value, rhs: Self::Value) -> PlotResult<Self::Value>;
    fn sub(&self, lhs: Self::Value, rhs: Self::Value) -> PlotResult<Self::Value>;
    fn mul(&self, lhs: Self::Value, rhs: Self::Value) -> PlotResult<Self::Value>;

    /// Divides `dividend` by `divisor`.
    ///
    /// Backends that track scale require `precision`; backends that do not
    /// ignore it.
    fn div(
        &self,
        dividend: Self::Value,
        divisor: Self::Value,
        precision: Option<DivisionPrecision>,
    ) -> PlotResult<Self::Value>;

    fn compare(&self, lhs: Self::Value, rhs: Self::Value) -> PlotResult<Ordering>;

    /// Number of fractional digits carried by `value`, if the backend tracks it.
    fn scale(&self, value: Self::Value) -> Option<u32>;

    /// Rounds or pads `value` to exactly `scale` fractional digits.
    fn set_scale(
        &self,
        value: Self::Value,
        scale: u32,
        rounding: RoundingMode,
    ) -> PlotResult<Self::Value>;

    fn is_positive(&self, value: Self::Value) -> PlotResult<bool> {
        Ok(self.compare(value, self.zero())? == Ordering::Greater)
    }

    fn neg(&self, value: Self::Value) -> PlotResult<Self::Value> {
        self.sub(self.zero(), value)
    }
}

/// IEEE-754 double arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloatBackend;

impl FloatBackend {
    fn finite(value: f64, operation: &str) -> PlotResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(PlotError::Arithmetic(format!(
                "{operation} produced a non-finite value"
            )))
        }
    }
}

impl NumericBackend for FloatBackend {
    type Value = f64;

    const NAME: &'static str = "float";
    const TRACKS_SCALE: bool = false;

    fn zero(&self) -> f64 {
        0.0
    }

    fn one(&self) -> f64 {
        1.0
    }

    fn from_native(&self, value: f64) -> PlotResult<f64> {
        if !value.is_finite() {
            return Err(PlotError::InvalidData("value must be finite".to_owned()));
        }
        Ok(value)
    }

    fn to_native(&self, value: f64) -> PlotResult<f64> {
        Ok(value)
    }

    fn parse(&self, text: &str) -> PlotResult<f64> {
        let value = text
            .trim()
            .parse::<f64>()
            .map_err(|err| PlotError::InvalidData(format!("invalid number `{text}`: {err}")))?;
        self.from_native(value)
    }

    fn add(&self, lhs: f64, rhs: f64) -> PlotResult<f64> {
        Self::finite(lhs + rhs, "addition")
    }

    fn sub(&self, lhs: f64, rhs: f64) -> PlotResult<f64> {
        Self::finite(lhs - rhs, "subtraction")
    }

    fn mul(&self, lhs: f64, rhs: f64) -> PlotResult<f64> {
        Self::finite(lhs * rhs, "multiplication")
    }

    fn div(
        &self,
        dividend: f64,
        divisor: f64,
        _precision: Option<DivisionPrecision>,
    ) -> PlotResult<f64> {
        if divisor == 0.0 {
            return Err(PlotError::Arithmetic("division by zero".to_owned()));
        }
        Self::finite(dividend / divisor, "division")
    }

    fn compare(&self, lhs: f64, rhs: f64) -> PlotResult<Ordering> {
        lhs.partial_cmp(&rhs).ok_or_else(|| {
            PlotError::Arithmetic("invalid comparison operands (NaN)".to_owned())
        })
    }

    fn scale(&self, _value: f64) -> Option<u32> {
        None
    }

    fn set_scale(&self, value: f64, _scale: u32, _rounding: RoundingMode) -> PlotResult<f64> {
        Ok(value)
    }
}

/// Arbitrary-precision decimal arithmetic backed by `rust_decimal`.
///
/// Divisions always carry an explicit target scale and rounding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecimalBackend;

impl DecimalBackend {
    fn checked(value: Option<Decimal>, operation: &str) -> PlotResult<Decimal> {
        value.ok_or_else(|| PlotError::Arithmetic(format!("decimal {operation} overflowed")))
    }
}

impl NumericBackend for DecimalBackend {
    type Value = Decimal;

    const NAME: &'static str = "decimal";
    const TRACKS_SCALE: bool = true;

    fn zero(&self) -> Decimal {
        Decimal::ZERO
    }

    fn one(&self) -> Decimal {
        Decimal::ONE
    }

    fn from_native(&self, value: f64) -> PlotResult<Decimal> {
        if !value.is_finite() {
            return Err(PlotError::InvalidData("value must be finite".to_owned()));
        }
        Decimal::from_f64(value).ok_or_else(|| {
            PlotError::InvalidData(format!("{value} cannot be represented as a decimal"))
        })
    }

    fn to_native(&self, value: Decimal) -> PlotResult<f64> {
        value.to_f64().ok_or_else(|| {
            PlotError::Arithmetic(format!("{value} cannot be represented as f64"))
        })
    }

    fn parse(&self, text: &str) -> PlotResult<Decimal> {
        Decimal::from_str(text.trim())
            .map_err(|err| PlotError::InvalidData(format!("invalid number `{text}`: {err}")))
    }

    fn add(&self, lhs: Decimal, rhs: Decimal) -> PlotResult<Decimal> {
        Self::checked(lhs.checked_add(rhs), "addition")
    }

    fn sub(&self, lhs: Decimal, rhs: Decimal) -> PlotResult<Decimal> {
        Self::checked(lhs.checked_sub(rhs), "subtraction")
    }

    fn mul(&self, lhs: Decimal, rhs: Decimal) -> PlotResult<Decimal> {
        Self::checked(lhs.checked_mul(rhs), "multiplication")
    }

    fn div(
        &self,
        dividend: Decimal,
        divisor: Decimal,
        precision: Option<DivisionPrecision>,
    ) -> PlotResult<Decimal> {
        let Some(precision) = precision else {
            return Err(PlotError::Precision(
                "decimal division requires a target scale and rounding mode".to_owned(),
            ));
        };
        if divisor.is_zero() {
            return Err(PlotError::Arithmetic("division by zero".to_owned()));
        }
        let quotient = Self::checked(dividend.checked_div(divisor), "division")?;
        self.set_scale(quotient, precision.scale, precision.rounding)
    }

    fn compare(&self, lhs: Decimal, rhs: Decimal) -> PlotResult<Ordering> {
        Ok(lhs.cmp(&rhs))
    }

    fn scale(&self, value: Decimal) -> Option<u32> {
        Some(value.scale())
    }

    fn set_scale(&self, value: Decimal, scale: u32, rounding: RoundingMode) -> PlotResult<Decimal> {
        if scale > MAX_DECIMAL_SCALE {
            return Err(PlotError::Precision(format!(
                "scale {scale} exceeds the decimal maximum of {MAX_DECIMAL_SCALE}"
            )));
        }
        let mut rounded = value.round_dp_with_strategy(scale, rounding.strategy());
        rounded.rescale(scale);
        // `rescale` silently stops short when the integer part leaves no room.
        if rounded.scale() != scale {
            return Err(PlotError::Precision(format!(
                "{value} cannot carry {scale} fractional digits"
            )));
        }
        Ok(rounded)
    }
}
