//! Expiry-dependent Black volatility.

use super::VolatilitySurface;
use crate::market_data::error::MarketDataError;
use crate::math::interpolators::LinearInterpolator;
use num_traits::Float;

/// Term structure of Black volatility, independent of strike.
///
/// Total variance `sigma_i^2 * t_i` is interpolated linearly through the
/// pillars and the origin, so the forward variance between consecutive
/// pillars is constant. Past the last pillar the last volatility is held
/// when extrapolation is allowed.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{BlackVarianceCurve, VolatilitySurface};
///
/// let curve = BlackVarianceCurve::<f64>::new(&[1.0, 2.0], &[0.20, 0.30], false).unwrap();
/// // variance 0.04 at 1y and 0.18 at 2y
/// assert!((curve.black_variance(100.0, 1.5).unwrap() - 0.11).abs() < 1e-12);
/// assert!((curve.volatility(100.0, 0.5).unwrap() - 0.20).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BlackVarianceCurve<T: Float> {
    expiries: Vec<T>,
    vols: Vec<T>,
    variances: LinearInterpolator<T>,
    allow_extrapolation: bool,
}

impl<T: Float> BlackVarianceCurve<T> {
    /// Builds the curve from `(expiry, volatility)` pillars.
    ///
    /// # Errors
    ///
    /// * `InsufficientData` - no pillars, or `vols` of a different length
    /// * `InvalidExpiry` - a non-positive expiry
    /// * `NegativeVolatility` - a negative quote
    /// * `DecreasingVariance` - total variance falls between pillars
    /// * `Interpolation` - expiries not strictly increasing
    pub fn new(
        expiries: &[T],
        vols: &[T],
        allow_extrapolation: bool,
    ) -> Result<Self, MarketDataError> {
        if expiries.is_empty() || expiries.len() != vols.len() {
            return Err(MarketDataError::InsufficientData {
                got: vols.len().min(expiries.len()),
                need: expiries.len().max(1),
            });
        }
        if let Some(&t) = expiries.iter().find(|&&t| t <= T::zero()) {
            return Err(MarketDataError::InvalidExpiry {
                expiry: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        if let Some(&v) = vols.iter().find(|&&v| v < T::zero()) {
            return Err(MarketDataError::NegativeVolatility {
                vol: v.to_f64().unwrap_or(f64::NAN),
            });
        }

        let mut times = Vec::with_capacity(expiries.len() + 1);
        let mut variances = Vec::with_capacity(expiries.len() + 1);
        times.push(T::zero());
        variances.push(T::zero());
        for (&t, &v) in expiries.iter().zip(vols) {
            let var = v * v * t;
            if let Some(&prev) = variances.last() {
                if var < prev {
                    return Err(MarketDataError::DecreasingVariance {
                        expiry: t.to_f64().unwrap_or(f64::NAN),
                    });
                }
            }
            times.push(t);
            variances.push(var);
        }

        Ok(Self {
            expiries: expiries.to_vec(),
            vols: vols.to_vec(),
            variances: LinearInterpolator::new(&times, &variances)?,
            allow_extrapolation,
        })
    }

    /// Pillar expiries.
    pub fn expiries(&self) -> &[T] {
        &self.expiries
    }

    /// Pillar volatilities.
    pub fn vols(&self) -> &[T] {
        &self.vols
    }

    fn variance_at(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        if strike <= T::zero() {
            return Err(MarketDataError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        if expiry < T::zero() {
            return Err(MarketDataError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }
        let t_max = self.expiries[self.expiries.len() - 1];
        if expiry <= t_max {
            return Ok(self.variances.interpolate_unchecked(expiry));
        }
        if !self.allow_extrapolation {
            return Err(MarketDataError::OutOfBounds {
                x: expiry.to_f64().unwrap_or(f64::NAN),
                min: 0.0,
                max: t_max.to_f64().unwrap_or(f64::NAN),
            });
        }
        let last = self.vols[self.vols.len() - 1];
        Ok(last * last * expiry)
    }
}

impl<T: Float> VolatilitySurface<T> for BlackVarianceCurve<T> {
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        if expiry <= T::zero() {
            return Err(MarketDataError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok((self.variance_at(strike, expiry)? / expiry).sqrt())
    }

    fn black_variance(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        self.variance_at(strike, expiry)
    }

    fn strike_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    fn expiry_domain(&self) -> (T, T) {
        let t_max = if self.allow_extrapolation {
            T::infinity()
        } else {
            self.expiries[self.expiries.len() - 1]
        };
        (T::zero(), t_max)
    }
}
