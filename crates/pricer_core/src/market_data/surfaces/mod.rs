//! Volatility surfaces.
//!
//! - [`VolatilitySurface`]: Black volatility and total variance by strike and expiry
//! - [`FlatVol`]: constant volatility
//! - [`BlackVarianceCurve`]: expiry-dependent, strike-independent volatility,
//!   linear in total variance
//! - [`InterpolatedVolSurface`]: strike × expiry grid
//! - [`VolSurfaceEnum`]: static dispatch over the above

mod flat;
mod interpolated;
mod surface_enum;
mod traits;
mod variance_curve;

pub use flat::FlatVol;
pub use interpolated::InterpolatedVolSurface;
pub use surface_enum::VolSurfaceEnum;
pub use traits::VolatilitySurface;
pub use variance_curve::BlackVarianceCurve;
