//! Pillar-based yield curve.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use crate::math::interpolators::LinearInterpolator;
use num_traits::Float;

/// Interpolation scheme between curve pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveInterpolation {
    /// Zero rates linear in time.
    Linear,
    /// `ln D(t)` linear in time, i.e. piecewise constant forwards.
    LogLinear,
}

/// Yield curve through `(tenor, zero rate)` pillars.
///
/// Before the first pillar the curve is anchored at `D(0) = 1`: the
/// linear scheme holds the first zero rate flat, the log-linear scheme
/// interpolates `ln D` from the origin, which gives the same result. Past the
/// last pillar the last zero rate is held flat when extrapolation is allowed;
/// otherwise lookups fail.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{CurveInterpolation, InterpolatedCurve, YieldCurve};
///
/// let curve = InterpolatedCurve::<f64>::new(
///     &[0.5, 1.0, 2.0],
///     &[0.02, 0.03, 0.04],
///     CurveInterpolation::Linear,
///     false,
/// )
/// .unwrap();
/// assert!((curve.zero_rate(1.5).unwrap() - 0.035).abs() < 1e-12);
/// assert!(curve.discount_factor(3.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedCurve<T: Float> {
    tenors: Vec<T>,
    rates: Vec<T>,
    /// Zero rates against tenors, or `ln D` against `[0, tenors..]`.
    interp: LinearInterpolator<T>,
    method: CurveInterpolation,
    allow_extrapolation: bool,
}

impl<T: Float> InterpolatedCurve<T> {
    /// Builds the curve.
    ///
    /// # Errors
    ///
    /// * `InsufficientData` - fewer than two pillars, or rates and tenors of
    ///   different lengths
    /// * `InvalidMaturity` - a non-positive tenor
    /// * `Interpolation` - tenors not strictly increasing
    pub fn new(
        tenors: &[T],
        rates: &[T],
        method: CurveInterpolation,
        allow_extrapolation: bool,
    ) -> Result<Self, MarketDataError> {
        if tenors.len() < 2 {
            return Err(MarketDataError::InsufficientData {
                got: tenors.len(),
                need: 2,
            });
        }
        if tenors.len() != rates.len() {
            return Err(MarketDataError::InsufficientData {
                got: rates.len(),
                need: tenors.len(),
            });
        }
        if let Some(&t) = tenors.iter().find(|&&t| t <= T::zero()) {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }

        let interp = match method {
            CurveInterpolation::Linear => LinearInterpolator::new(tenors, rates)?,
            CurveInterpolation::LogLinear => {
                let xs: Vec<T> = std::iter::once(T::zero())
                    .chain(tenors.iter().copied())
                    .collect();
                let ys: Vec<T> = std::iter::once(T::zero())
                    .chain(tenors.iter().zip(rates).map(|(&t, &r)| -r * t))
                    .collect();
                LinearInterpolator::new(&xs, &ys)?
            }
        };

        Ok(Self {
            tenors: tenors.to_vec(),
            rates: rates.to_vec(),
            interp,
            method,
            allow_extrapolation,
        })
    }

    /// First and last pillar.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.tenors[0], self.tenors[self.tenors.len() - 1])
    }

    /// Interpolation scheme.
    #[inline]
    pub fn method(&self) -> CurveInterpolation {
        self.method
    }

    /// Whether lookups past the last pillar are served.
    #[inline]
    pub fn allow_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    /// Zero rate at `t > 0`, after the extrapolation check.
    fn rate_at(&self, t: T) -> Result<T, MarketDataError> {
        let (t_min, t_max) = self.domain();
        if t > t_max {
            if !self.allow_extrapolation {
                return Err(MarketDataError::OutOfBounds {
                    x: t.to_f64().unwrap_or(f64::NAN),
                    min: 0.0,
                    max: t_max.to_f64().unwrap_or(f64::NAN),
                });
            }
            return Ok(self.rates[self.rates.len() - 1]);
        }
        match self.method {
            CurveInterpolation::Linear if t < t_min => Ok(self.rates[0]),
            CurveInterpolation::Linear => Ok(self.interp.interpolate_unchecked(t)),
            CurveInterpolation::LogLinear => Ok(-self.interp.interpolate_unchecked(t) / t),
        }
    }
}

impl<T: Float> YieldCurve<T> for InterpolatedCurve<T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        if t == T::zero() {
            return Ok(T::one());
        }
        Ok((-self.rate_at(t)? * t).exp())
    }

    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        if t == T::zero() {
            return Ok(self.rates[0]);
        }
        self.rate_at(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn linear() -> InterpolatedCurve<f64> {
        InterpolatedCurve::new(
            &[0.5, 1.0, 2.0, 5.0],
            &[0.02, 0.025, 0.03, 0.04],
            CurveInterpolation::Linear,
            false,
        )
        .unwrap()
    }

    // ========================================
    // Construction
    // ========================================

    #[test]
    fn test_new_insufficient_pillars() {
        let result =
            InterpolatedCurve::new(&[1.0], &[0.02], CurveInterpolation::Linear, false);
        match result.unwrap_err() {
            MarketDataError::InsufficientData { got, need } => {
                assert_eq!(got, 1);
                assert_eq!(need, 2);
            }
            e => panic!("Expected InsufficientData, got {:?}", e),
        }
    }

    #[test]
    fn test_new_non_positive_tenor() {
        let result = InterpolatedCurve::new(
            &[0.0, 1.0],
            &[0.02, 0.03],
            CurveInterpolation::LogLinear,
            false,
        );
        assert!(matches!(
            result.unwrap_err(),
            MarketDataError::InvalidMaturity { .. }
        ));
    }

    #[test]
    fn test_new_unsorted_tenors() {
        let result = InterpolatedCurve::new(
            &[2.0, 1.0],
            &[0.02, 0.03],
            CurveInterpolation::Linear,
            false,
        );
        assert!(matches!(
            result.unwrap_err(),
            MarketDataError::Interpolation(_)
        ));
    }

    // ========================================
    // Linear zero rates
    // ========================================

    #[test]
    fn test_linear_pillars_and_midpoints() {
        let curve = linear();
        assert_relative_eq!(curve.zero_rate(1.0).unwrap(), 0.025, epsilon = 1e-14);
        assert_relative_eq!(curve.zero_rate(3.5).unwrap(), 0.035, epsilon = 1e-14);
        assert_relative_eq!(
            curve.discount_factor(2.0).unwrap(),
            (-0.06_f64).exp(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_linear_short_end_is_flat() {
        let curve = linear();
        assert_eq!(curve.zero_rate(0.0).unwrap(), 0.02);
        assert_eq!(curve.zero_rate(0.1).unwrap(), 0.02);
        assert_eq!(curve.discount_factor(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_out_of_bounds_without_extrapolation() {
        match linear().discount_factor(6.0).unwrap_err() {
            MarketDataError::OutOfBounds { x, max, .. } => {
                assert_eq!(x, 6.0);
                assert_eq!(max, 5.0);
            }
            e => panic!("Expected OutOfBounds, got {:?}", e),
        }
    }

    #[test]
    fn test_flat_extrapolation() {
        let curve = InterpolatedCurve::new(
            &[1.0, 2.0],
            &[0.02, 0.03],
            CurveInterpolation::Linear,
            true,
        )
        .unwrap();
        assert_eq!(curve.zero_rate(10.0).unwrap(), 0.03);
    }

    // ========================================
    // Log-linear discount factors
    // ========================================

    #[test]
    fn test_log_linear_reprices_pillars() {
        let curve = InterpolatedCurve::new(
            &[1.0, 2.0],
            &[0.02, 0.03],
            CurveInterpolation::LogLinear,
            false,
        )
        .unwrap();
        assert_relative_eq!(curve.zero_rate(1.0).unwrap(), 0.02, epsilon = 1e-14);
        assert_relative_eq!(curve.zero_rate(2.0).unwrap(), 0.03, epsilon = 1e-14);
    }

    #[test]
    fn test_log_linear_constant_forward_between_pillars() {
        let curve = InterpolatedCurve::new(
            &[1.0, 2.0],
            &[0.02, 0.03],
            CurveInterpolation::LogLinear,
            false,
        )
        .unwrap();
        // ln D(1) = -0.02, ln D(2) = -0.06
        assert_relative_eq!(curve.forward_rate(1.2, 1.7).unwrap(), 0.04, epsilon = 1e-12);
        assert_relative_eq!(curve.forward_rate(0.0, 0.5).unwrap(), 0.02, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_zero_rate_bounded_by_pillars(
            rates in prop::collection::vec(0.0f64..0.1, 4),
            u in 0.0f64..1.0,
        ) {
            let tenors = [0.5, 1.0, 2.0, 5.0];
            let curve =
                InterpolatedCurve::new(&tenors, &rates, CurveInterpolation::Linear, false).unwrap();
            let t = 0.5 + u * 4.5;
            let r = curve.zero_rate(t).unwrap();
            let lo = rates.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = rates.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(r >= lo - 1e-12 && r <= hi + 1e-12);
            prop_assert!((curve.discount_factor(t).unwrap() - (-r * t).exp()).abs() < 1e-12);
        }
    }
}

