//! Strike × expiry volatility grid.

use super::VolatilitySurface;
use crate::market_data::error::MarketDataError;
use crate::math::interpolators::BilinearInterpolator;
use num_traits::Float;

/// Volatility surface interpolated bilinearly on a strike × expiry grid.
///
/// The grid is laid out as `vols[expiry_idx][strike_idx]`. With
/// extrapolation enabled, [`volatility`](VolatilitySurface::volatility)
/// queries outside the grid take the nearest edge value; otherwise they fail
/// with `OutOfBounds`.
///
/// [`black_variance`](VolatilitySurface::black_variance) is what a diffusion
/// samples along a path, so it is more lenient: vol is held flat in strike
/// outside the grid, and total variance runs linearly from zero at the
/// valuation date to the first expiry. Only expiries past the last pillar
/// still need extrapolation enabled.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{InterpolatedVolSurface, VolatilitySurface};
///
/// let surface = InterpolatedVolSurface::<f64>::new(
///     &[90.0, 100.0, 110.0],
///     &[0.5, 1.0],
///     &[vec![0.24, 0.20, 0.22], vec![0.26, 0.22, 0.24]],
///     false,
/// )
/// .unwrap();
/// assert!((surface.volatility(100.0, 0.75).unwrap() - 0.21).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedVolSurface<T: Float> {
    strikes: Vec<T>,
    expiries: Vec<T>,
    grid: BilinearInterpolator<T>,
    allow_extrapolation: bool,
}

impl<T: Float> InterpolatedVolSurface<T> {
    /// Builds the surface.
    ///
    /// # Errors
    ///
    /// * `InvalidStrike` / `InvalidExpiry` - a non-positive axis node
    /// * `NegativeVolatility` - a negative grid value
    /// * `Interpolation` - unsorted axes or a grid of the wrong shape
    pub fn new(
        strikes: &[T],
        expiries: &[T],
        vols: &[Vec<T>],
        allow_extrapolation: bool,
    ) -> Result<Self, MarketDataError> {
        if let Some(&k) = strikes.iter().find(|&&k| k <= T::zero()) {
            return Err(MarketDataError::InvalidStrike {
                strike: k.to_f64().unwrap_or(f64::NAN),
            });
        }
        if let Some(&t) = expiries.iter().find(|&&t| t <= T::zero()) {
            return Err(MarketDataError::InvalidExpiry {
                expiry: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        if let Some(&v) = vols.iter().flatten().find(|&&v| v < T::zero()) {
            return Err(MarketDataError::NegativeVolatility {
                vol: v.to_f64().unwrap_or(f64::NAN),
            });
        }
        let grid = BilinearInterpolator::new(expiries, strikes, vols)?;
        Ok(Self {
            strikes: strikes.to_vec(),
            expiries: expiries.to_vec(),
            grid,
            allow_extrapolation,
        })
    }

    /// Whether queries outside the grid are clamped.
    #[inline]
    pub fn allow_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn check(value: T, (lo, hi): (T, T)) -> Result<(), MarketDataError> {
        if value < lo || value > hi {
            return Err(MarketDataError::OutOfBounds {
                x: value.to_f64().unwrap_or(f64::NAN),
                min: lo.to_f64().unwrap_or(f64::NAN),
                max: hi.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }
}

impl<T: Float> VolatilitySurface<T> for InterpolatedVolSurface<T> {
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        if strike <= T::zero() {
            return Err(MarketDataError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        if expiry <= T::zero() {
            return Err(MarketDataError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !self.allow_extrapolation {
            Self::check(strike, self.strike_domain())?;
            Self::check(expiry, self.expiry_domain())?;
        }
        Ok(self.grid.interpolate(expiry, strike))
    }

    fn black_variance(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
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
        if expiry == T::zero() {
            return Ok(T::zero());
        }
        let (t_min, t_max) = self.expiry_domain();
        if expiry > t_max && !self.allow_extrapolation {
            return Err(MarketDataError::OutOfBounds {
                x: expiry.to_f64().unwrap_or(f64::NAN),
                min: 0.0,
                max: t_max.to_f64().unwrap_or(f64::NAN),
            });
        }
        // Before the first pillar the first-expiry vol applies, so variance
        // is linear in time from the origin.
        let vol = self.grid.interpolate(expiry.max(t_min), strike);
        Ok(vol * vol * expiry)
    }

    fn strike_domain(&self) -> (T, T) {
        (self.strikes[0], self.strikes[self.strikes.len() - 1])
    }

    fn expiry_domain(&self) -> (T, T) {
        (self.expiries[0], self.expiries[self.expiries.len() - 1])
    }
}
