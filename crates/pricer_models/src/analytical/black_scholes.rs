//! Black-Scholes prices for European options with a continuous dividend yield.
//!
//! ## Formulas
//!
//! ```text
//! C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! d₂ = d₁ - σ√T
//! ```

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::OptionType;
use crate::models::MarketSnapshot;

/// Expiries below this are treated as expired.
const EXPIRY_EPSILON: f64 = 1e-12;

/// Black-Scholes model with constant parameters.
///
/// # Example
///
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::OptionType;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
/// let call = bs.price(OptionType::Call, 100.0, 1.0);
/// assert!((call - 10.450_583_572_185_565).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    spot: f64,
    rate: f64,
    dividend: f64,
    volatility: f64,
}

impl BlackScholes {
    /// Builds the model.
    ///
    /// # Errors
    ///
    /// * `InvalidSpot` - spot not strictly positive and finite
    /// * `InvalidVolatility` - volatility not strictly positive and finite
    pub fn new(spot: f64, rate: f64, dividend: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if !(volatility > 0.0 && volatility.is_finite()) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }
        Ok(Self {
            spot,
            rate,
            dividend,
            volatility,
        })
    }

    /// Model with the parameters of a frozen snapshot.
    pub fn from_snapshot(snapshot: &MarketSnapshot) -> Result<Self, AnalyticalError> {
        Self::new(
            snapshot.spot(),
            snapshot.rate(),
            snapshot.dividend(),
            snapshot.volatility(),
        )
    }

    /// Spot.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Dividend yield.
    #[inline]
    pub fn dividend(&self) -> f64 {
        self.dividend
    }

    /// Volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Forward price to `expiry`.
    #[inline]
    pub fn forward(&self, expiry: f64) -> f64 {
        self.spot * ((self.rate - self.dividend) * expiry).exp()
    }

    /// `d₁`, for `expiry > 0`.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        ((self.spot / strike).ln()
            + (self.rate - self.dividend + 0.5 * self.volatility * self.volatility) * expiry)
            / vol_sqrt_t
    }

    /// `d₂`, for `expiry > 0`.
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Present value of a European option; intrinsic value at expiry.
    pub fn price(&self, option_type: OptionType, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return option_type.intrinsic(self.spot, strike);
        }
        let w = option_type.sign();
        let df_r = (-self.rate * expiry).exp();
        let df_q = (-self.dividend * expiry).exp();
        if strike <= 0.0 {
            return (w * (self.spot * df_q - strike * df_r)).max(0.0);
        }
        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        w * (self.spot * df_q * norm_cdf(w * d1) - strike * df_r * norm_cdf(w * d2))
    }

    /// Call price.
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        self.price(OptionType::Call, strike, expiry)
    }

    /// Put price.
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        self.price(OptionType::Put, strike, expiry)
    }

    /// Spot delta.
    pub fn delta(&self, option_type: OptionType, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return if option_type.intrinsic(self.spot, strike) > 0.0 {
                option_type.sign()
            } else {
                0.0
            };
        }
        let w = option_type.sign();
        let df_q = (-self.dividend * expiry).exp();
        w * df_q * norm_cdf(w * self.d1(strike, expiry))
    }

    /// Vega, per unit of volatility.
    pub fn vega(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return 0.0;
        }
        let df_q = (-self.dividend * expiry).exp();
        self.spot * df_q * expiry.sqrt() * norm_pdf(self.d1(strike, expiry))
    }
}
