//! Static dispatch over volatility surfaces.

use super::{BlackVarianceCurve, FlatVol, InterpolatedVolSurface, VolatilitySurface};
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Closed set of volatility surfaces held by processes.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{VolSurfaceEnum, VolatilitySurface};
///
/// let vol = VolSurfaceEnum::flat(0.2_f64);
/// assert!(vol.is_flat());
/// assert!((vol.black_variance(100.0, 4.0).unwrap() - 0.16).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum VolSurfaceEnum<T: Float> {
    /// Constant volatility
    Flat(FlatVol<T>),
    /// Expiry-dependent volatility
    TermStructure(BlackVarianceCurve<T>),
    /// Strike × expiry grid
    Interpolated(InterpolatedVolSurface<T>),
}

impl<T: Float> VolSurfaceEnum<T> {
    /// Flat surface at `sigma`.
    #[inline]
    pub fn flat(sigma: T) -> Self {
        VolSurfaceEnum::Flat(FlatVol::new(sigma))
    }

    /// Whether the surface is constant in strike and expiry.
    #[inline]
    pub fn is_flat(&self) -> bool {
        matches!(self, VolSurfaceEnum::Flat(_))
    }
}

impl<T: Float> VolatilitySurface<T> for VolSurfaceEnum<T> {
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        match self {
            VolSurfaceEnum::Flat(s) => s.volatility(strike, expiry),
            VolSurfaceEnum::TermStructure(s) => s.volatility(strike, expiry),
            VolSurfaceEnum::Interpolated(s) => s.volatility(strike, expiry),
        }
    }

    fn black_variance(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        match self {
            VolSurfaceEnum::Flat(s) => s.black_variance(strike, expiry),
            VolSurfaceEnum::TermStructure(s) => s.black_variance(strike, expiry),
            VolSurfaceEnum::Interpolated(s) => s.black_variance(strike, expiry),
        }
    }

    fn strike_domain(&self) -> (T, T) {
        match self {
            VolSurfaceEnum::Flat(s) => s.strike_domain(),
            VolSurfaceEnum::TermStructure(s) => s.strike_domain(),
            VolSurfaceEnum::Interpolated(s) => s.strike_domain(),
        }
    }

    fn expiry_domain(&self) -> (T, T) {
        match self {
            VolSurfaceEnum::Flat(s) => s.expiry_domain(),
            VolSurfaceEnum::TermStructure(s) => s.expiry_domain(),
            VolSurfaceEnum::Interpolated(s) => s.expiry_domain(),
        }
    }
}

impl<T: Float> From<FlatVol<T>> for VolSurfaceEnum<T> {
    fn from(s: FlatVol<T>) -> Self {
        VolSurfaceEnum::Flat(s)
    }
}

impl<T: Float> From<BlackVarianceCurve<T>> for VolSurfaceEnum<T> {
    fn from(s: BlackVarianceCurve<T>) -> Self {
        VolSurfaceEnum::TermStructure(s)
    }
}

impl<T: Float> From<InterpolatedVolSurface<T>> for VolSurfaceEnum<T> {
    fn from(s: InterpolatedVolSurface<T>) -> Self {
        VolSurfaceEnum::Interpolated(s)
    }
}
