//! Static dispatch over yield curve implementations.

use super::{FlatCurve, InterpolatedCurve, YieldCurve};
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Closed set of yield curves held by processes and engines.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{CurveEnum, FlatCurve, YieldCurve};
///
/// let curve: CurveEnum<f64> = FlatCurve::new(0.05).into();
/// assert!((curve.discount_factor(1.0).unwrap() - 0.951229).abs() < 1e-5);
/// assert!(curve.is_flat());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CurveEnum<T: Float> {
    /// Constant rate
    Flat(FlatCurve<T>),
    /// Pillar-based curve
    Interpolated(InterpolatedCurve<T>),
}

impl<T: Float> CurveEnum<T> {
    /// Flat curve at `rate`.
    #[inline]
    pub fn flat(rate: T) -> Self {
        CurveEnum::Flat(FlatCurve::new(rate))
    }

    /// Whether the curve carries no term structure.
    #[inline]
    pub fn is_flat(&self) -> bool {
        matches!(self, CurveEnum::Flat(_))
    }
}

impl<T: Float> YieldCurve<T> for CurveEnum<T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        match self {
            CurveEnum::Flat(c) => c.discount_factor(t),
            CurveEnum::Interpolated(c) => c.discount_factor(t),
        }
    }

    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        match self {
            CurveEnum::Flat(c) => c.zero_rate(t),
            CurveEnum::Interpolated(c) => c.zero_rate(t),
        }
    }

    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        match self {
            CurveEnum::Flat(c) => c.forward_rate(t1, t2),
            CurveEnum::Interpolated(c) => c.forward_rate(t1, t2),
        }
    }
}

impl<T: Float> From<FlatCurve<T>> for CurveEnum<T> {
    fn from(curve: FlatCurve<T>) -> Self {
        CurveEnum::Flat(curve)
    }
}

impl<T: Float> From<InterpolatedCurve<T>> for CurveEnum<T> {
    fn from(curve: InterpolatedCurve<T>) -> Self {
        CurveEnum::Interpolated(curve)
    }
}
