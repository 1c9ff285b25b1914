//! Black-Scholes process with frozen parameters.
//!
//! ```text
//! d ln S = (r - q - 0.5 * sigma^2) dt + sigma dW
//! ```
//!
//! Rate, dividend yield and volatility are constants captured in a
//! [`MarketSnapshot`]; drift and diffusion never look at `t` or `x`, which
//! makes each Euler step in log space exact.

use super::error::ProcessError;
use super::process::StochasticProcess1D;

/// Market parameters sampled at a single time.
///
/// Immutable once built; the constructor is the only place their validity
/// is checked.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketSnapshot {
    spot: f64,
    rate: f64,
    dividend: f64,
    volatility: f64,
}

impl MarketSnapshot {
    /// Captures a snapshot.
    ///
    /// # Errors
    ///
    /// * `InvalidSpot` - spot not strictly positive and finite
    /// * `InvalidVolatility` - volatility negative or non-finite
    pub fn new(spot: f64, rate: f64, dividend: f64, volatility: f64) -> Result<Self, ProcessError> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(ProcessError::InvalidSpot { spot });
        }
        if !(volatility >= 0.0 && volatility.is_finite()) {
            return Err(ProcessError::InvalidVolatility { volatility });
        }
        Ok(Self {
            spot,
            rate,
            dividend,
            volatility,
        })
    }

    /// Underlying level.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Continuously compounded risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Continuously compounded dividend yield.
    #[inline]
    pub fn dividend(&self) -> f64 {
        self.dividend
    }

    /// Black volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }
}

/// Black-Scholes process whose parameters do not vary with time or level.
///
/// # Example
///
/// ```
/// use pricer_models::models::{ConstantBlackScholesProcess, MarketSnapshot, StochasticProcess1D};
///
/// let snapshot = MarketSnapshot::new(100.0, 0.05, 0.01, 0.2).unwrap();
/// let process = ConstantBlackScholesProcess::new(snapshot);
///
/// assert_eq!(process.x0(), 100.0);
/// assert!((process.drift(3.0, 42.0).unwrap() - 0.02).abs() < 1e-15);
/// assert_eq!(process.diffusion(0.0, 1.0).unwrap(), 0.2);
/// assert_eq!(process.apply(100.0, 0.0), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstantBlackScholesProcess {
    snapshot: MarketSnapshot,
}

impl ConstantBlackScholesProcess {
    /// Wraps a snapshot.
    #[inline]
    pub fn new(snapshot: MarketSnapshot) -> Self {
        Self { snapshot }
    }

    /// Builds the snapshot and the process in one step.
    pub fn from_parameters(
        spot: f64,
        rate: f64,
        dividend: f64,
        volatility: f64,
    ) -> Result<Self, ProcessError> {
        Ok(Self::new(MarketSnapshot::new(spot, rate, dividend, volatility)?))
    }

    /// The frozen parameters.
    #[inline]
    pub fn snapshot(&self) -> &MarketSnapshot {
        &self.snapshot
    }
}

impl StochasticProcess1D for ConstantBlackScholesProcess {
    fn x0(&self) -> f64 {
        self.snapshot.spot
    }

    fn drift(&self, _t: f64, _x: f64) -> Result<f64, ProcessError> {
        let s = &self.snapshot;
        Ok(s.rate - s.dividend - 0.5 * s.volatility * s.volatility)
    }

    fn diffusion(&self, _t: f64, _x: f64) -> Result<f64, ProcessError> {
        Ok(self.snapshot.volatility)
    }

    fn apply(&self, x: f64, dx: f64) -> f64 {
        x * dx.exp()
    }
}
