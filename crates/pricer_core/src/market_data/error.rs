//! Market data error types.

use crate::types::{InterpolationError, PricingError};
use thiserror::Error;

/// Failures raised by yield curve and volatility surface lookups and
/// constructors.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarketDataError {
    /// Maturity outside the admissible range (negative, or zero where a
    /// rate is requested).
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// Offending time
        t: f64,
    },

    /// Non-positive strike passed to a volatility lookup.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// Offending strike
        strike: f64,
    },

    /// Non-positive expiry passed to a volatility lookup.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// Offending expiry
        expiry: f64,
    },

    /// Query outside the curve or surface domain with extrapolation disabled.
    #[error("Out of bounds: {x} not in [{min}, {max}]")]
    OutOfBounds {
        /// Query point
        x: f64,
        /// Lower end of the domain
        min: f64,
        /// Upper end of the domain
        max: f64,
    },

    /// Interpolator failure.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Not enough pillars to build the term structure.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Pillars supplied
        got: usize,
        /// Pillars required
        need: usize,
    },

    /// Negative volatility quote.
    #[error("Negative volatility: sigma = {vol}")]
    NegativeVolatility {
        /// Offending quote
        vol: f64,
    },

    /// Total variance decreases between consecutive expiries, which admits
    /// calendar arbitrage.
    #[error("Black variance decreasing at expiry {expiry}")]
    DecreasingVariance {
        /// First expiry at which variance falls
        expiry: f64,
    },
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            MarketDataError::InvalidMaturity { t: -1.5 }.to_string(),
            "Invalid maturity: t = -1.5"
        );
        assert_eq!(
            MarketDataError::InvalidStrike { strike: -100.0 }.to_string(),
            "Invalid strike: K = -100"
        );
        assert_eq!(
            MarketDataError::InvalidExpiry { expiry: 0.0 }.to_string(),
            "Invalid expiry: T = 0"
        );
        assert_eq!(
            MarketDataError::DecreasingVariance { expiry: 2.0 }.to_string(),
            "Black variance decreasing at expiry 2"
        );
    }

    #[test]
    fn test_from_interpolation_error() {
        let err: MarketDataError = InterpolationError::InsufficientData { got: 0, need: 2 }.into();
        match err {
            MarketDataError::Interpolation(_) => {}
            _ => panic!("Expected Interpolation variant"),
        }
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = MarketDataError::NegativeVolatility { vol: -0.1 }.into();
        match err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("-0.1")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }
}
