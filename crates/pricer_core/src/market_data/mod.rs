//! Market data: yield curves and volatility surfaces.
//!
//! All structures are generic over `T: Float` and take times as year
//! fractions from the valuation date.
//!
//! # Components
//!
//! - [`curves`]: [`YieldCurve`] and its implementations
//! - [`surfaces`]: [`VolatilitySurface`] and its implementations
//! - [`error`]: [`MarketDataError`]
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
//! use pricer_core::market_data::surfaces::{VolatilitySurface, FlatVol};
//!
//! let curve = FlatCurve::new(0.05_f64);
//! let df = curve.discount_factor(1.0).unwrap();
//! assert!((df - 0.951229).abs() < 1e-5);
//!
//! let vol_surface = FlatVol::new(0.20_f64);
//! assert_eq!(vol_surface.volatility(100.0, 1.0).unwrap(), 0.20);
//! ```

pub mod curves;
pub mod error;
pub mod surfaces;

pub use curves::{CurveEnum, CurveInterpolation, FlatCurve, InterpolatedCurve, YieldCurve};
pub use error::MarketDataError;
pub use surfaces::{
    BlackVarianceCurve, FlatVol, InterpolatedVolSurface, VolSurfaceEnum, VolatilitySurface,
};
