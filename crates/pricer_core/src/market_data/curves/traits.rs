//! Yield curve trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Horizon used to evaluate the instantaneous zero rate at `t = 0`.
const SHORT_END: f64 = 1.0e-4;

/// Term structure of interest rates.
///
/// Implementors only provide [`discount_factor`](Self::discount_factor);
/// rates follow from continuous compounding:
///
/// ```text
/// D(t)       = exp(-r(t) * t)
/// f(t1, t2)  = ln(D(t1) / D(t2)) / (t2 - t1)
/// ```
pub trait YieldCurve<T: Float> {
    /// Discount factor to time `t`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` for `t < 0`.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError>;

    /// Continuously compounded zero rate to time `t`.
    ///
    /// At `t = 0` the short-end limit is returned, approximated over a
    /// one-basis-point horizon.
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        let t = if t == T::zero() {
            T::from(SHORT_END).unwrap_or_else(T::epsilon)
        } else {
            t
        };
        Ok(-self.discount_factor(t)?.ln() / t)
    }

    /// Continuously compounded forward rate over `[t1, t2]`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` when `t2 <= t1` or either end is
    /// negative.
    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        let dt = t2 - t1;
        if dt <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: dt.to_f64().unwrap_or(f64::NAN),
            });
        }
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        Ok((df1 / df2).ln() / dt)
    }
}
