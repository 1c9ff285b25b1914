//! Constant volatility.

use super::VolatilitySurface;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Volatility surface returning one `sigma` for every admissible query.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{FlatVol, VolatilitySurface};
///
/// let surface = FlatVol::new(0.25_f64);
/// assert_eq!(surface.volatility(80.0, 3.0).unwrap(), 0.25);
/// assert!(surface.volatility(0.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatVol<T: Float> {
    sigma: T,
}

impl<T: Float> FlatVol<T> {
    /// Construct a flat surface with the given volatility.
    ///
    /// # Arguments
    ///
    /// * `sigma` - Annualised Black volatility, used for every strike and
    ///   expiry
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::surfaces::{FlatVol, VolatilitySurface};
    ///
    /// let surface = FlatVol::new(0.2_f64);
    /// assert_eq!(surface.sigma(), 0.2);
    /// assert!((surface.black_variance(100.0, 2.0).unwrap() - 0.08).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn new(sigma: T) -> Self {
        Self { sigma }
    }

    /// The constant volatility.
    #[inline]
    pub fn sigma(&self) -> T {
        self.sigma
    }
}

impl<T: Float> VolatilitySurface<T> for FlatVol<T> {
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
        Ok(self.sigma)
    }

    #[inline]
    fn strike_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    #[inline]
    fn expiry_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }
}
