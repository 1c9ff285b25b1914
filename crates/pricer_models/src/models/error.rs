//! Process error types.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use thiserror::Error;

/// Failures raised when building or querying a process.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProcessError {
    /// The process does not expose risk-free, dividend and volatility term
    /// structures.
    #[error("Black-Scholes process required")]
    BlackScholesRequired,

    /// Non-positive or non-finite spot.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// Offending spot
        spot: f64,
    },

    /// Negative or non-finite volatility.
    #[error("Invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// Offending volatility
        volatility: f64,
    },

    /// Curve or surface lookup failed.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),
}

impl From<ProcessError> for PricingError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::BlackScholesRequired => PricingError::ModelFailure(err.to_string()),
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}
