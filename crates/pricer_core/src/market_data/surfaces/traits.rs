//! Volatility surface trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Black volatility as a function of strike and expiry.
///
/// Every implementation rejects non-positive strikes with
/// `MarketDataError::InvalidStrike` and non-positive expiries in
/// [`volatility`](Self::volatility) with `MarketDataError::InvalidExpiry`.
pub trait VolatilitySurface<T: Float> {
    /// Black volatility for `strike` at `expiry`.
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError>;

    /// Total Black variance `sigma(K, t)^2 * t`.
    ///
    /// Defined at `expiry = 0`, where it is zero.
    fn black_variance(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        if expiry == T::zero() {
            if strike <= T::zero() {
                return Err(MarketDataError::InvalidStrike {
                    strike: strike.to_f64().unwrap_or(f64::NAN),
                });
            }
            return Ok(T::zero());
        }
        let vol = self.volatility(strike, expiry)?;
        Ok(vol * vol * expiry)
    }

    /// Strike range on which lookups succeed.
    fn strike_domain(&self) -> (T, T);

    /// Expiry range on which lookups succeed.
    fn expiry_domain(&self) -> (T, T);
}
