//! Constant-rate yield curve.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Yield curve with a single continuously compounded rate.
///
/// Zero and forward rates equal the constant everywhere, including the
/// short end.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{FlatCurve, YieldCurve};
///
/// let curve = FlatCurve::new(0.03_f64);
/// assert!((curve.discount_factor(2.0).unwrap() - (-0.06_f64).exp()).abs() < 1e-12);
/// assert_eq!(curve.zero_rate(0.0).unwrap(), 0.03);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatCurve<T: Float> {
    rate: T,
}

impl<T: Float> FlatCurve<T> {
    /// Construct a flat curve with the given constant rate.
    ///
    /// # Arguments
    ///
    /// * `rate` - Continuously compounded rate; negative rates are allowed
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::curves::{FlatCurve, YieldCurve};
    ///
    /// let curve = FlatCurve::new(-0.005_f64);
    /// assert_eq!(curve.rate(), -0.005);
    /// assert!(curve.discount_factor(1.0).unwrap() > 1.0);
    /// ```
    #[inline]
    pub fn new(rate: T) -> Self {
        Self { rate }
    }

    /// The constant rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: Float> YieldCurve<T> for FlatCurve<T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok((-self.rate * t).exp())
    }

    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(self.rate)
    }

    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        if t2 <= t1 || t1 < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: (t2 - t1).to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(self.rate)
    }
}
